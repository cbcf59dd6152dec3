//! Normal-approximation interval for a population proportion

use crate::critical::z_critical;
use crate::types::{
    ConfidenceLevel, EstimateDetails, EstimateKind, IntervalEstimate, ThresholdSource,
};
use serde::{Deserialize, Serialize};
use statease_core::{median, Error, Result, Sample};
use tracing::{debug, warn};

/// Usual minimum sample size for the normal approximation
pub const DEFAULT_MIN_PROPORTION_SAMPLE: usize = 30;

/// Parameters for proportion intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProportionConfig {
    /// Smaller samples are rejected with `InsufficientSample`
    pub min_sample_size: usize,
}

impl Default for ProportionConfig {
    fn default() -> Self {
        Self {
            min_sample_size: DEFAULT_MIN_PROPORTION_SAMPLE,
        }
    }
}

impl ProportionConfig {
    /// Lower (or raise) the accepted minimum
    ///
    /// Estimates below [`DEFAULT_MIN_PROPORTION_SAMPLE`] are flagged with
    /// `reduced_validity`.
    pub fn with_min_sample_size(mut self, min_sample_size: usize) -> Self {
        self.min_sample_size = min_sample_size.max(1);
        self
    }
}

/// p̂ ± z · √(p̂(1-p̂)/n), clamped to [0, 1]
pub(crate) fn proportion_interval(
    values: &[f64],
    threshold: Option<f64>,
    level: ConfidenceLevel,
    config: &ProportionConfig,
) -> Result<IntervalEstimate> {
    let sample = Sample::with_min_len(values, config.min_sample_size)?;
    let n = sample.len();

    let (threshold, threshold_source) = match threshold {
        Some(t) if t.is_finite() => (t, ThresholdSource::Supplied),
        Some(t) => {
            return Err(Error::InvalidParameter(format!(
                "Threshold must be finite, got {t}"
            )))
        }
        None => (median(sample.values())?, ThresholdSource::MedianDefault),
    };
    if threshold_source == ThresholdSource::MedianDefault {
        debug!(threshold, "No threshold supplied; using the sample median");
    }

    let reduced_validity = n < DEFAULT_MIN_PROPORTION_SAMPLE;
    if reduced_validity {
        warn!(
            n,
            "Proportion interval below {} observations; normal approximation may be poor",
            DEFAULT_MIN_PROPORTION_SAMPLE
        );
    }

    let successes = sample.values().iter().filter(|&&x| x >= threshold).count();
    let p_hat = successes as f64 / sample.n();
    let standard_error = (p_hat * (1.0 - p_hat) / sample.n()).sqrt();
    let critical_value = z_critical(level)?;
    let margin_of_error = critical_value * standard_error;

    let raw_lower = p_hat - margin_of_error;
    let raw_upper = p_hat + margin_of_error;
    let lower_bound = raw_lower.max(0.0);
    let upper_bound = raw_upper.min(1.0);
    let clamped = raw_lower < 0.0 || raw_upper > 1.0;

    Ok(IntervalEstimate {
        kind: EstimateKind::Proportion,
        sample_size: n,
        point_estimate: p_hat,
        standard_error,
        confidence_level: level.value(),
        critical_value,
        margin_of_error,
        lower_bound,
        upper_bound,
        details: EstimateDetails::Proportion {
            successes,
            threshold,
            threshold_source,
            reduced_validity,
            clamped,
        },
    })
}
