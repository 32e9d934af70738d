//! Negative exponential distributions sampled by inverse-transform.
//!
//! [`TruncExpon`] is the doubly truncated law confined to a closed interval;
//! [`Expon`] is the plain unbounded law, kept around so the two can be
//! plotted side by side.

use rand::distributions::{Distribution, Open01};
use rand::Rng;
use thiserror::Error;

/// Errors from constructing or evaluating a distribution.
#[derive(Debug, Error, PartialEq)]
pub enum DistError {
    /// Truncation bounds must be finite with `lower < upper`.
    #[error("invalid truncation bounds: lower {lower} must be below upper {upper}")]
    InvalidBounds { lower: f64, upper: f64 },

    /// The mean must be finite and strictly positive.
    #[error("invalid mean {0}: must be finite and positive")]
    InvalidMean(f64),

    /// Inverse-CDF arguments must lie strictly inside (0, 1); at the
    /// endpoints the logarithm argument reaches zero or goes negative.
    #[error("uniform variate {0} is outside the open interval (0, 1)")]
    VariateOutOfRange(f64),
}

fn check_mean(mean: f64) -> Result<(), DistError> {
    if !mean.is_finite() || mean <= 0.0 {
        return Err(DistError::InvalidMean(mean));
    }
    Ok(())
}

fn check_variate(u: f64) -> Result<(), DistError> {
    if u > 0.0 && u < 1.0 {
        Ok(())
    } else {
        Err(DistError::VariateOutOfRange(u))
    }
}

/// Negative exponential distribution with the given mean, doubly truncated
/// to the closed interval `[lower, upper]` and renormalized over it.
///
/// Inverse-transform sampling maps a uniform variate `u` in (0, 1) to
///
/// ```text
/// x = lower - mean * ln(1 - u * (1 - e^((lower - upper) / mean)))
/// ```
///
/// which stays inside `[lower, upper]` for every admissible `u`.
///
/// # Example
///
/// ```
/// use truncated_expon::TruncExpon;
///
/// let service = TruncExpon::new(64.0, 1500.0, 782.0)?;
/// let x = service.inv_cdf(0.5)?;
/// assert!((64.0..=1500.0).contains(&x));
/// # Ok::<(), truncated_expon::DistError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncExpon {
    lower: f64,
    upper: f64,
    mean: f64,
}

impl TruncExpon {
    /// Creates the distribution, rejecting inverted or non-finite bounds and
    /// a non-positive mean.
    pub fn new(lower: f64, upper: f64, mean: f64) -> Result<Self, DistError> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(DistError::InvalidBounds { lower, upper });
        }
        check_mean(mean)?;
        Ok(TruncExpon { lower, upper, mean })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Probability mass the untruncated law assigns to `[lower, upper]`;
    /// the normalizing constant of the truncated density.
    fn norm(&self) -> f64 {
        1.0 - ((self.lower - self.upper) / self.mean).exp()
    }

    fn transform(&self, u: f64) -> f64 {
        self.lower - self.mean * (1.0 - u * self.norm()).ln()
    }

    /// Maps a uniform variate `u` strictly inside (0, 1) into
    /// `[lower, upper]`.
    pub fn inv_cdf(&self, u: f64) -> Result<f64, DistError> {
        check_variate(u)?;
        Ok(self.transform(u))
    }

    /// Algebraic rearrangement of [`inv_cdf`](Self::inv_cdf):
    ///
    /// ```text
    /// x = -mean * ln(e^(-lower/mean) - (e^(-lower/mean) - e^(-upper/mean)) * u)
    /// ```
    ///
    /// Agrees with the direct form to floating-point accuracy.
    pub fn inv_cdf_alt(&self, u: f64) -> Result<f64, DistError> {
        check_variate(u)?;
        let lo = (-self.lower / self.mean).exp();
        let hi = (-self.upper / self.mean).exp();
        Ok(-self.mean * (lo - (lo - hi) * u).ln())
    }

    /// Distribution function: 0 at and below `lower`, 1 at and above
    /// `upper`.
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= self.lower {
            0.0
        } else if x >= self.upper {
            1.0
        } else {
            (1.0 - ((self.lower - x) / self.mean).exp()) / self.norm()
        }
    }

    /// Density: 0 outside `[lower, upper]`, integrates to 1 over it.
    pub fn pdf(&self, x: f64) -> f64 {
        if x < self.lower || x > self.upper {
            0.0
        } else {
            ((self.lower - x) / self.mean).exp() / (self.mean * self.norm())
        }
    }
}

impl Distribution<f64> for TruncExpon {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // Open01 keeps the variate strictly inside (0, 1), so the logarithm
        // argument stays positive.
        let u: f64 = rng.sample(Open01);
        self.transform(u)
    }
}

/// Plain negative exponential distribution with the given mean.
///
/// Kept for visual comparison against [`TruncExpon`]; its inverse CDF
/// `x = -mean * ln(u)` is unbounded above as `u` approaches 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expon {
    mean: f64,
}

impl Expon {
    /// Creates the distribution, rejecting a non-positive mean.
    pub fn new(mean: f64) -> Result<Self, DistError> {
        check_mean(mean)?;
        Ok(Expon { mean })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Maps a uniform variate `u` strictly inside (0, 1) to
    /// `-mean * ln(u)`.
    ///
    /// `u` and `1 - u` are identically distributed, so the sign flip of the
    /// textbook `-ln(1 - u)` form is dropped.
    pub fn inv_cdf(&self, u: f64) -> Result<f64, DistError> {
        check_variate(u)?;
        Ok(-self.mean * u.ln())
    }
}

impl Distribution<f64> for Expon {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.sample(Open01);
        -self.mean * u.ln()
    }
}
