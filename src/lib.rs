//! Inverse-transform sampling of the doubly truncated negative exponential
//! distribution, histogram rendering of its empirical pdf/cdf, and a
//! two-station tandem queue simulation driven by the same law.
//!
//! Three binaries sit on top of this library: `truncated-expon-plot` and
//! `truncated-expon-compare` write histogram images into the working
//! directory, `tandem-queues` runs the simulation described by `input.txt`.

pub mod dist;
pub mod histogram;
pub mod plot;
pub mod sample;
pub mod sim;

pub use dist::{DistError, Expon, TruncExpon};
pub use histogram::{Histogram, HistogramError};
pub use plot::{render_cumulative_histogram, render_density_histogram, PlotError};
pub use sample::{draw_samples, SampleSummary};
pub use sim::{ConfigError, SimConfig, SimError, SimReport, TandemSim};
