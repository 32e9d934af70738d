//! Renders pdf/cdf histograms for the plain inverse exponential transform
//! and both truncated derivations side by side, one PNG pair per variant.

use std::path::Path;

use anyhow::Context;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use strum::IntoEnumIterator;

use truncated_expon::dist::{DistError, Expon, TruncExpon};
use truncated_expon::histogram::Histogram;
use truncated_expon::plot::{
    cdf_plot_name, pdf_plot_name, render_cumulative_histogram, render_density_histogram,
};
use truncated_expon::sample::{draw_samples, SampleSummary};

const A: f64 = 64.0;
const B: f64 = 1500.0;
const MEAN: f64 = 782.0;
const N: usize = 100_000;
const BINS: usize = 40;

/// The compared transforms; the serialized names label the output files.
#[derive(Debug, Clone, Copy, strum_macros::Display, strum_macros::EnumIter)]
enum Variant {
    #[strum(serialize = "inv_expon")]
    Untruncated,
    #[strum(serialize = "inv_t_expon1")]
    TruncatedDirect,
    #[strum(serialize = "inv_t_expon2")]
    TruncatedRearranged,
}

fn main() -> anyhow::Result<()> {
    let untruncated = Expon::new(MEAN)?;
    let truncated = TruncExpon::new(A, B, MEAN)?;
    let mut rng = SmallRng::from_entropy();

    for variant in Variant::iter() {
        let transform: Box<dyn Fn(f64) -> Result<f64, DistError>> = match variant {
            Variant::Untruncated => Box::new(move |u| untruncated.inv_cdf(u)),
            Variant::TruncatedDirect => Box::new(move |u| truncated.inv_cdf(u)),
            Variant::TruncatedRearranged => Box::new(move |u| truncated.inv_cdf_alt(u)),
        };

        let label = variant.to_string();
        let samples = draw_samples(&mut rng, N, |u| transform(u))?;
        if let Some(summary) = SampleSummary::of(&samples) {
            println!("{}: {}", label, summary);
        }

        let hist = Histogram::from_samples(&samples, BINS)?;

        let pdf_name = pdf_plot_name(&label);
        let pdf_path = Path::new(&pdf_name);
        render_density_histogram(&hist, Some(&format!("{} pdf", label)), pdf_path)
            .with_context(|| format!("rendering {}", pdf_path.display()))?;
        println!("saved {}", pdf_path.display());

        let cdf_name = cdf_plot_name(&label);
        let cdf_path = Path::new(&cdf_name);
        render_cumulative_histogram(&hist, Some(&format!("{} cdf", label)), cdf_path)
            .with_context(|| format!("rendering {}", cdf_path.display()))?;
        println!("saved {}", cdf_path.display());
    }

    Ok(())
}
