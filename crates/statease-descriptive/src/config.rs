//! Tunable constants for descriptive summaries

use serde::{Deserialize, Serialize};

/// Multiplier of the IQR used for the Tukey fence
pub const DEFAULT_FENCE_MULTIPLIER: f64 = 1.5;

/// |skewness| below this is read as approximately symmetric
pub const DEFAULT_SKEW_THRESHOLD: f64 = 0.5;

/// |excess kurtosis| at or below this is read as approximately normal
pub const DEFAULT_KURTOSIS_THRESHOLD: f64 = 0.5;

/// Which estimator family to use for skewness and kurtosis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentBias {
    /// Bias-adjusted Fisher estimators (G1, G2)
    #[default]
    Adjusted,
    /// Uncorrected moment ratios (g1, g2)
    Population,
}

/// Parameters for [`SampleStats`](crate::SampleStats)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptiveConfig {
    pub fence_multiplier: f64,
    pub skew_threshold: f64,
    pub kurtosis_threshold: f64,
    pub moment_bias: MomentBias,
}

impl Default for DescriptiveConfig {
    fn default() -> Self {
        Self {
            fence_multiplier: DEFAULT_FENCE_MULTIPLIER,
            skew_threshold: DEFAULT_SKEW_THRESHOLD,
            kurtosis_threshold: DEFAULT_KURTOSIS_THRESHOLD,
            moment_bias: MomentBias::Adjusted,
        }
    }
}

impl DescriptiveConfig {
    pub fn with_fence_multiplier(mut self, multiplier: f64) -> Self {
        self.fence_multiplier = multiplier;
        self
    }

    pub fn with_skew_threshold(mut self, threshold: f64) -> Self {
        self.skew_threshold = threshold;
        self
    }

    pub fn with_kurtosis_threshold(mut self, threshold: f64) -> Self {
        self.kurtosis_threshold = threshold;
        self
    }

    pub fn with_moment_bias(mut self, bias: MomentBias) -> Self {
        self.moment_bias = bias;
        self
    }

    /// Check that every constant is finite and non-negative
    pub fn validate(&self) -> statease_core::Result<()> {
        for (name, value) in [
            ("fence_multiplier", self.fence_multiplier),
            ("skew_threshold", self.skew_threshold),
            ("kurtosis_threshold", self.kurtosis_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(statease_core::Error::InvalidParameter(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DescriptiveConfig::default();
        assert_eq!(config.fence_multiplier, 1.5);
        assert_eq!(config.skew_threshold, 0.5);
        assert_eq!(config.kurtosis_threshold, 0.5);
        assert_eq!(config.moment_bias, MomentBias::Adjusted);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: DescriptiveConfig =
            serde_json::from_str(r#"{"fence_multiplier": 3.0, "moment_bias": "population"}"#)
                .unwrap();
        assert_eq!(config.fence_multiplier, 3.0);
        assert_eq!(config.skew_threshold, 0.5);
        assert_eq!(config.moment_bias, MomentBias::Population);
    }

    #[test]
    fn test_negative_multiplier_rejected() {
        let config = DescriptiveConfig::default().with_fence_multiplier(-1.0);
        assert!(config.validate().is_err());
    }
}
