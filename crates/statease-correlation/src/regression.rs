//! Ordinary least squares fit of y on x

use serde::{Deserialize, Serialize};
use statease_core::utils::mean;
use statease_core::{Error, Result};

/// Fitted line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Share of the variance in y explained by the line
    pub r_squared: f64,
}

impl LinearFit {
    /// Fitted value at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Cross products around the means of a paired sample
///
/// Deviations are divided by each column's largest absolute deviation before
/// they are multiplied, so the sums neither overflow nor underflow for finite
/// input. `scale_x` and `scale_y` restore the units where needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CrossProducts {
    pub mean_x: f64,
    pub mean_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub sxx: f64,
    pub syy: f64,
    pub sxy: f64,
}

fn max_deviation(values: &[f64], center: f64) -> f64 {
    let scale = values
        .iter()
        .map(|&v| (v - center).abs())
        .fold(0.0, f64::max);
    if scale > 0.0 {
        scale
    } else {
        1.0
    }
}

impl CrossProducts {
    pub fn new(x: &[f64], y: &[f64]) -> Self {
        let mean_x = mean(x);
        let mean_y = mean(y);
        let scale_x = max_deviation(x, mean_x);
        let scale_y = max_deviation(y, mean_y);

        let mut sxx = 0.0;
        let mut syy = 0.0;
        let mut sxy = 0.0;
        for (&xi, &yi) in x.iter().zip(y) {
            let dx = (xi - mean_x) / scale_x;
            let dy = (yi - mean_y) / scale_y;
            sxx += dx * dx;
            syy += dy * dy;
            sxy += dx * dy;
        }

        Self {
            mean_x,
            mean_y,
            scale_x,
            scale_y,
            sxx,
            syy,
            sxy,
        }
    }

    /// Pearson r, clamped to [-1, 1] against rounding
    pub fn correlation(&self) -> f64 {
        (self.sxy / (self.sxx.sqrt() * self.syy.sqrt())).clamp(-1.0, 1.0)
    }

    pub fn linear_fit(&self) -> Result<LinearFit> {
        if self.sxx <= 0.0 {
            return Err(Error::UndefinedCorrelation(
                "x has zero variance; the regression slope is undefined".to_string(),
            ));
        }
        let slope = self.sxy / self.sxx * (self.scale_y / self.scale_x);
        let r_squared = if self.syy > 0.0 {
            let r = self.correlation();
            r * r
        } else {
            1.0
        };
        Ok(LinearFit {
            slope,
            intercept: self.mean_y - slope * self.mean_x,
            r_squared,
        })
    }
}

/// OLS line of `y` on `x` for equal-length slices
pub fn linear_fit(x: &[f64], y: &[f64]) -> Result<LinearFit> {
    if x.len() != y.len() {
        return Err(Error::length_mismatch(x.len(), y.len()));
    }
    if x.len() < 2 {
        return Err(Error::InsufficientSample {
            expected: 2,
            actual: x.len(),
        });
    }
    CrossProducts::new(x, y).linear_fit()
}
