//! Entry points for interval estimation

use crate::mean::mean_interval;
use crate::proportion::{proportion_interval, ProportionConfig};
use crate::types::{ConfidenceLevel, EstimateKind, IntervalEstimate};
use statease_core::Result;
use tracing::instrument;

/// Point and interval estimator for a mean or a proportion
///
/// # Example
///
/// ```rust
/// use statease_confidence::IntervalEstimator;
///
/// let estimator = IntervalEstimator::new();
/// let ci = estimator.estimate_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.95).unwrap();
/// assert!(ci.contains(3.0));
/// println!("{ci}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct IntervalEstimator {
    proportion: ProportionConfig,
}

impl IntervalEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_proportion_config(proportion: ProportionConfig) -> Self {
        Self { proportion }
    }

    pub fn proportion_config(&self) -> &ProportionConfig {
        &self.proportion
    }

    /// t interval for the population mean
    ///
    /// Fails with `InvalidParameter` for a level outside (0, 1) and
    /// `InsufficientSample` for fewer than two observations.
    #[instrument(skip(self, sample), fields(n = sample.len()))]
    pub fn estimate_mean(&self, sample: &[f64], confidence_level: f64) -> Result<IntervalEstimate> {
        let level = ConfidenceLevel::new(confidence_level)?;
        mean_interval(sample, level)
    }

    /// Normal-approximation interval for the share of values `>= threshold`
    ///
    /// Without a threshold the sample median is used and the returned
    /// estimate reports [`ThresholdSource::MedianDefault`](crate::ThresholdSource).
    #[instrument(skip(self, sample), fields(n = sample.len()))]
    pub fn estimate_proportion(
        &self,
        sample: &[f64],
        threshold: Option<f64>,
        confidence_level: f64,
    ) -> Result<IntervalEstimate> {
        let level = ConfidenceLevel::new(confidence_level)?;
        proportion_interval(sample, threshold, level, &self.proportion)
    }

    /// Dispatch on an estimate kind; `threshold` is ignored for means
    pub fn estimate(
        &self,
        kind: EstimateKind,
        sample: &[f64],
        confidence_level: f64,
        threshold: Option<f64>,
    ) -> Result<IntervalEstimate> {
        match kind {
            EstimateKind::Mean => self.estimate_mean(sample, confidence_level),
            EstimateKind::Proportion => {
                self.estimate_proportion(sample, threshold, confidence_level)
            }
        }
    }
}

/// Mean interval with default settings
pub fn estimate_mean(sample: &[f64], confidence_level: f64) -> Result<IntervalEstimate> {
    IntervalEstimator::new().estimate_mean(sample, confidence_level)
}

/// Proportion interval with default settings
pub fn estimate_proportion(
    sample: &[f64],
    threshold: Option<f64>,
    confidence_level: f64,
) -> Result<IntervalEstimate> {
    IntervalEstimator::new().estimate_proportion(sample, threshold, confidence_level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use statease_core::Error;

    #[test]
    fn test_invalid_level() {
        let data = [1.0, 2.0, 3.0];
        for level in [0.0, 1.0, 95.0] {
            assert!(matches!(
                estimate_mean(&data, level),
                Err(Error::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_dispatch() {
        let data: Vec<f64> = (0..30).map(f64::from).collect();
        let estimator = IntervalEstimator::new();
        let mean = estimator
            .estimate(EstimateKind::Mean, &data, 0.9, Some(3.0))
            .unwrap();
        assert_eq!(mean.kind, EstimateKind::Mean);
        let prop = estimator
            .estimate(EstimateKind::Proportion, &data, 0.9, Some(15.0))
            .unwrap();
        assert_eq!(prop.kind, EstimateKind::Proportion);
        assert_eq!(prop.point_estimate, 0.5);
    }

    #[test]
    fn test_twenty_five_observations() {
        let data: Vec<f64> = (0..25).map(|i| 10.0 + f64::from(i) * 0.5).collect();
        assert!(estimate_mean(&data, 0.95).is_ok());
        assert_eq!(
            estimate_proportion(&data, None, 0.95),
            Err(Error::InsufficientSample {
                expected: 30,
                actual: 25
            })
        );
    }
}
