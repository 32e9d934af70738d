//! Fixed-bin-count empirical histograms with density and cumulative views.

use thiserror::Error;

/// Errors from binning a sample set.
#[derive(Debug, Error, PartialEq)]
pub enum HistogramError {
    #[error("cannot bin an empty sample set")]
    EmptySamples,

    #[error("bin count must be positive")]
    ZeroBins,

    #[error("sample {0} is not finite")]
    NonFinite(f64),
}

/// Equal-width histogram spanning the closed sample range.
///
/// Bins are half-open `[edge_i, edge_i+1)` except the last, which also
/// includes its right edge so the maximum sample is counted.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    lo: f64,
    hi: f64,
    counts: Vec<u64>,
    total: u64,
}

impl Histogram {
    /// Bins `samples` into `bins` equal-width bins over `[min, max]`.
    ///
    /// A degenerate range (all samples equal) is widened by 0.5 on each
    /// side so the bins keep a nonzero width.
    pub fn from_samples(samples: &[f64], bins: usize) -> Result<Self, HistogramError> {
        if bins == 0 {
            return Err(HistogramError::ZeroBins);
        }
        if samples.is_empty() {
            return Err(HistogramError::EmptySamples);
        }

        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &x in samples {
            if !x.is_finite() {
                return Err(HistogramError::NonFinite(x));
            }
            lo = lo.min(x);
            hi = hi.max(x);
        }
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let mut counts = vec![0u64; bins];
        for &x in samples {
            let mut idx = ((x - lo) / width) as usize;
            // The maximum sample computes to exactly `bins`; fold it into
            // the last bin.
            if idx >= bins {
                idx = bins - 1;
            }
            counts[idx] += 1;
        }

        Ok(Histogram {
            lo,
            hi,
            counts,
            total: samples.len() as u64,
        })
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn bin_width(&self) -> f64 {
        (self.hi - self.lo) / self.counts.len() as f64
    }

    /// Left and right edge of bin `i`.
    pub fn bin_edges(&self, i: usize) -> (f64, f64) {
        let w = self.bin_width();
        (self.lo + i as f64 * w, self.lo + (i + 1) as f64 * w)
    }

    /// Fraction of the samples in each bin; the masses sum to 1.
    pub fn masses(&self) -> Vec<f64> {
        self.counts
            .iter()
            .map(|&c| c as f64 / self.total as f64)
            .collect()
    }

    /// Bar heights for a density plot: mass divided by bin width, so the
    /// bars integrate to 1 over the sample range.
    pub fn density_bars(&self) -> Vec<f64> {
        let w = self.bin_width();
        self.masses().into_iter().map(|m| m / w).collect()
    }

    /// Bar heights for a cumulative plot: running mass sums, ending at 1.
    pub fn cumulative_bars(&self) -> Vec<f64> {
        let mut acc = 0.0;
        self.masses()
            .into_iter()
            .map(|m| {
                acc += m;
                acc
            })
            .collect()
    }
}
