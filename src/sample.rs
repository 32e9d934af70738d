//! Sample generation and console summaries.

use std::fmt;

use rand::distributions::Open01;
use rand::Rng;
use statrs::statistics::Statistics;

use crate::dist::DistError;

/// Draws `n` samples by feeding independent uniform(0, 1) variates from
/// `rng` through `transform`, in order.
///
/// The transform is fallible so a domain error aborts the whole draw
/// instead of poisoning the sample set.
pub fn draw_samples<R, F>(rng: &mut R, n: usize, mut transform: F) -> Result<Vec<f64>, DistError>
where
    R: Rng + ?Sized,
    F: FnMut(f64) -> Result<f64, DistError>,
{
    let mut samples = Vec::with_capacity(n);
    for _ in 0..n {
        let u: f64 = rng.sample(Open01);
        samples.push(transform(u)?);
    }
    Ok(samples)
}

/// Minimum, mean and maximum of a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    pub count: usize,
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl SampleSummary {
    /// Summarizes a sample set; `None` when it is empty.
    pub fn of(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        Some(SampleSummary {
            count: samples.len(),
            min: samples.min(),
            mean: samples.mean(),
            max: samples.max(),
        })
    }
}

impl fmt::Display for SampleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n = {}, min = {:.3}, mean = {:.3}, max = {:.3}",
            self.count, self.min, self.mean, self.max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dist::TruncExpon;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn draws_the_requested_count() {
        let mut rng = SmallRng::seed_from_u64(1);
        let samples = draw_samples(&mut rng, 1_000, Ok).unwrap();
        assert_eq!(samples.len(), 1_000);
        assert!(samples.iter().all(|&u| u > 0.0 && u < 1.0));
    }

    #[test]
    fn identical_seeds_reproduce_the_samples() {
        let dist = TruncExpon::new(64.0, 1500.0, 782.0).unwrap();
        let mut first = SmallRng::seed_from_u64(42);
        let mut second = SmallRng::seed_from_u64(42);
        let a = draw_samples(&mut first, 500, |u| dist.inv_cdf(u)).unwrap();
        let b = draw_samples(&mut second, 500, |u| dist.inv_cdf(u)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn propagates_transform_errors() {
        let mut rng = SmallRng::seed_from_u64(1);
        let result = draw_samples(&mut rng, 10, |u| {
            Err(DistError::VariateOutOfRange(u + 1.0))
        });
        assert!(matches!(result, Err(DistError::VariateOutOfRange(_))));
    }

    #[test]
    fn summary_reports_the_extremes() {
        let summary = SampleSummary::of(&[3.0, 1.0, 2.0]).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 3.0);
        assert!((summary.mean - 2.0).abs() < 1e-12);
        assert!(SampleSummary::of(&[]).is_none());
    }

    #[test]
    fn summary_displays_all_fields() {
        let summary = SampleSummary::of(&[1.0, 2.0]).unwrap();
        let line = summary.to_string();
        assert!(line.contains("n = 2"));
        assert!(line.contains("min = 1.000"));
        assert!(line.contains("max = 2.000"));
    }
}
