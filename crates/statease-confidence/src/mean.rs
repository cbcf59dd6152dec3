//! Student t interval for a population mean

use crate::critical::t_critical;
use crate::types::{ConfidenceLevel, EstimateDetails, EstimateKind, IntervalEstimate};
use statease_core::utils::{mean, std_dev};
use statease_core::{Result, Sample};
use tracing::debug;

/// Minimum sample size for a mean interval
pub const MIN_MEAN_SAMPLE: usize = 2;

/// Mean ± t(n-1) · s/√n, unclamped
pub(crate) fn mean_interval(values: &[f64], level: ConfidenceLevel) -> Result<IntervalEstimate> {
    let sample = Sample::with_min_len(values, MIN_MEAN_SAMPLE)?;
    let n = sample.len();
    let point_estimate = mean(sample.values());
    let s = std_dev(sample.values());
    let standard_error = s / sample.n().sqrt();

    let degrees_of_freedom = n - 1;
    let critical_value = t_critical(level, degrees_of_freedom)?;
    let margin_of_error = critical_value * standard_error;
    debug!(
        n,
        standard_error, critical_value, "Computed t interval for the mean"
    );

    Ok(IntervalEstimate {
        kind: EstimateKind::Mean,
        sample_size: n,
        point_estimate,
        standard_error,
        confidence_level: level.value(),
        critical_value,
        margin_of_error,
        lower_bound: point_estimate - margin_of_error,
        upper_bound: point_estimate + margin_of_error,
        details: EstimateDetails::Mean {
            std_dev: s,
            degrees_of_freedom,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use statease_core::Error;

    #[test]
    fn test_one_to_five() {
        let ci = mean_interval(&[1.0, 2.0, 3.0, 4.0, 5.0], ConfidenceLevel::NINETY_FIVE).unwrap();
        assert_eq!(ci.kind, EstimateKind::Mean);
        assert_eq!(ci.point_estimate, 3.0);
        // s = sqrt(2.5), se = sqrt(0.5)
        assert_abs_diff_eq!(ci.standard_error, 0.5f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(ci.critical_value, 2.776_445, epsilon = 1e-4);
        assert_abs_diff_eq!(ci.margin_of_error, 1.963_243, epsilon = 1e-4);
        assert_abs_diff_eq!(ci.lower_bound, 1.036_757, epsilon = 1e-4);
        assert_abs_diff_eq!(ci.upper_bound, 4.963_243, epsilon = 1e-4);
        assert_eq!(
            ci.details,
            EstimateDetails::Mean {
                std_dev: 2.5f64.sqrt(),
                degrees_of_freedom: 4
            }
        );
    }

    #[test]
    fn test_too_small() {
        assert_eq!(
            mean_interval(&[1.0], ConfidenceLevel::NINETY_FIVE),
            Err(Error::InsufficientSample {
                expected: 2,
                actual: 1
            })
        );
        assert!(mean_interval(&[], ConfidenceLevel::NINETY_FIVE).is_err());
    }

    #[test]
    fn test_constant_sample_has_zero_width() {
        let ci = mean_interval(&[4.0, 4.0, 4.0], ConfidenceLevel::NINETY_NINE).unwrap();
        assert_eq!(ci.standard_error, 0.0);
        assert_eq!(ci.lower_bound, 4.0);
        assert_eq!(ci.upper_bound, 4.0);
    }

    #[test]
    fn test_bounds_are_not_clamped() {
        let ci = mean_interval(&[-10.0, 0.5, 12.0], ConfidenceLevel::NINETY_FIVE).unwrap();
        assert!(ci.lower_bound < -10.0);
        assert!(ci.upper_bound > 12.0);
    }
}
