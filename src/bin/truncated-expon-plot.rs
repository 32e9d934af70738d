//! Samples the doubly truncated negative exponential law and renders its
//! empirical pdf and cdf histograms as PNG files in the working directory.

use std::path::Path;

use anyhow::Context;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use truncated_expon::dist::TruncExpon;
use truncated_expon::histogram::Histogram;
use truncated_expon::plot::{render_cumulative_histogram, render_density_histogram};
use truncated_expon::sample::{draw_samples, SampleSummary};

const A: f64 = 64.0;
const B: f64 = 1500.0;
const MEAN: f64 = 782.0;
const N: usize = 100_000;
const BINS: usize = 40;

fn main() -> anyhow::Result<()> {
    let dist = TruncExpon::new(A, B, MEAN)?;
    let mut rng = SmallRng::from_entropy();

    let samples = draw_samples(&mut rng, N, |u| dist.inv_cdf(u))?;
    if let Some(summary) = SampleSummary::of(&samples) {
        println!("truncated_expon: {}", summary);
    }

    let hist = Histogram::from_samples(&samples, BINS)?;

    let pdf_path = Path::new("truncated_expon_pdf.png");
    render_density_histogram(&hist, None, pdf_path)
        .with_context(|| format!("rendering {}", pdf_path.display()))?;
    println!("saved {}", pdf_path.display());

    let cdf_path = Path::new("truncated_expon_cdf.png");
    render_cumulative_histogram(&hist, None, cdf_path)
        .with_context(|| format!("rendering {}", cdf_path.display()))?;
    println!("saved {}", cdf_path.display());

    Ok(())
}
