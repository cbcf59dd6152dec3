//! Tukey fence outlier detection

use serde::{Deserialize, Serialize};
use statease_core::Quartiles;

/// Outlier bounds `[q1 - k * iqr, q3 + k * iqr]`
///
/// Values strictly below `lower` or strictly above `upper` are outliers;
/// values sitting exactly on a bound are not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TukeyFence {
    pub lower: f64,
    pub upper: f64,
}

impl TukeyFence {
    pub fn new(quartiles: &Quartiles, multiplier: f64) -> Self {
        let (lower, upper) = quartiles.fence(multiplier);
        Self { lower, upper }
    }

    /// Whether `value` lies outside the fence
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }

    /// Offending values in their original order
    pub fn outliers(&self, values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .copied()
            .filter(|&v| self.is_outlier(v))
            .collect()
    }

    /// Smallest and largest values that stay inside the fence
    ///
    /// Returns `None` only when every value is an outlier, which cannot happen
    /// for a fence built from the same sample's quartiles.
    pub fn whiskers(&self, values: &[f64]) -> Option<(f64, f64)> {
        values
            .iter()
            .copied()
            .filter(|&v| !self.is_outlier(v))
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
