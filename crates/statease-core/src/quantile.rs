//! Linear-interpolation percentiles
//!
//! For a probability `p` over sorted data of size `n` the position is
//! `h = p * (n - 1)`; the result interpolates linearly between the order
//! statistics at `floor(h)` and `ceil(h)`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Quantile of pre-sorted data, `p` in `[0, 1]`
///
/// # Examples
///
/// ```rust
/// use statease_core::quantile_sorted;
///
/// let data = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile_sorted(&data, 0.5).unwrap(), 2.5);
/// ```
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidParameter(format!(
            "Quantile {p} must be in [0, 1]"
        )));
    }
    if sorted.is_empty() {
        return Err(Error::EmptySample);
    }

    let h = p * (sorted.len() - 1) as f64;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;
    Ok(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

/// Percentile of pre-sorted data, `percent` in `[0, 100]`
pub fn percentile_sorted(sorted: &[f64], percent: f64) -> Result<f64> {
    quantile_sorted(sorted, percent / 100.0)
}

/// First quartile, median and third quartile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Compute quartiles from pre-sorted data
    pub fn from_sorted(sorted: &[f64]) -> Result<Self> {
        Ok(Self {
            q1: quantile_sorted(sorted, 0.25)?,
            median: quantile_sorted(sorted, 0.5)?,
            q3: quantile_sorted(sorted, 0.75)?,
        })
    }

    /// Interquartile range, `q3 - q1`
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Tukey fence `[q1 - k * iqr, q3 + k * iqr]`
    pub fn fence(&self, multiplier: f64) -> (f64, f64) {
        let iqr = self.iqr();
        (self.q1 - multiplier * iqr, self.q3 + multiplier * iqr)
    }
}

/// Median of unsorted data
pub fn median(data: &[f64]) -> Result<f64> {
    quantile_sorted(&crate::utils::sorted(data), 0.5)
}
