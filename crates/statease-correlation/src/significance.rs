//! Significance of a correlation coefficient

use statease_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Two-sided p-value for H0: ρ = 0
///
/// Uses `t = r·√((n-2)/(1-r²))` against Student's t with `n - 2` degrees of
/// freedom. Returns `None` below three pairs, where no degrees of freedom
/// remain.
pub fn correlation_p_value(r: f64, n: usize) -> Result<Option<f64>> {
    if n < 3 {
        return Ok(None);
    }
    let denom = 1.0 - r * r;
    if denom <= 0.0 {
        return Ok(Some(0.0));
    }

    let df = (n - 2) as f64;
    let t = r * (df / denom).sqrt();
    let t_dist = StudentsT::new(0.0, 1.0, df).map_err(|e| {
        Error::Computation(format!("Failed to create t-distribution: {}", e))
    })?;
    let p = 2.0 * (1.0 - t_dist.cdf(t.abs()));
    Ok(Some(p.clamp(0.0, 1.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_value() {
        // r = 6/√60, n = 5 -> t = 2.12132, df = 3
        let r = 6.0 / 60f64.sqrt();
        let p = correlation_p_value(r, 5).unwrap().unwrap();
        assert_abs_diff_eq!(p, 0.124_027, epsilon = 1e-5);
        // Symmetric in the sign of r
        let q = correlation_p_value(-r, 5).unwrap().unwrap();
        assert_abs_diff_eq!(p, q, epsilon = 1e-12);
    }

    #[test]
    fn test_edges() {
        assert_eq!(correlation_p_value(0.5, 2).unwrap(), None);
        assert_eq!(correlation_p_value(1.0, 10).unwrap(), Some(0.0));
        assert_eq!(correlation_p_value(-1.0, 10).unwrap(), Some(0.0));
        assert_abs_diff_eq!(
            correlation_p_value(0.0, 10).unwrap().unwrap(),
            1.0,
            epsilon = 1e-12
        );
    }
}
