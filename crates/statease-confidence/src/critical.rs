//! Two-sided critical values from reference distributions

use crate::types::ConfidenceLevel;
use statease_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

/// Standard normal quantile at `1 - alpha / 2`
pub fn z_critical(level: ConfidenceLevel) -> Result<f64> {
    let normal = Normal::new(0.0, 1.0).map_err(|e| {
        Error::Computation(format!("Failed to create normal distribution: {}", e))
    })?;
    Ok(normal.inverse_cdf(level.upper_quantile()))
}

/// Student t quantile at `1 - alpha / 2` with `df` degrees of freedom
pub fn t_critical(level: ConfidenceLevel, df: usize) -> Result<f64> {
    if df == 0 {
        return Err(Error::InsufficientSample {
            expected: 2,
            actual: 1,
        });
    }
    let t_dist = StudentsT::new(0.0, 1.0, df as f64).map_err(|e| {
        Error::Computation(format!("Failed to create t-distribution: {}", e))
    })?;
    Ok(t_dist.inverse_cdf(level.upper_quantile()))
}
