//! Common types for confidence intervals

use serde::{Deserialize, Serialize};
use statease_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Confidence level type with validation
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level
    ///
    /// Fails with `InvalidParameter` unless `level` is strictly inside (0, 1).
    pub fn new(level: f64) -> Result<Self> {
        if level > 0.0 && level < 1.0 {
            Ok(Self(level))
        } else {
            Err(Error::invalid_confidence_level(level))
        }
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Probability at which the two-sided critical value is read
    pub fn upper_quantile(&self) -> f64 {
        1.0 - self.tail_probability()
    }

    /// Common confidence levels
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self::NINETY_FIVE
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> f64 {
        level.0
    }
}

/// Parses `"95%"`, `"95 %"` or `"0.95"`
impl FromStr for ConfidenceLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (number, scale) = match trimmed.strip_suffix('%') {
            Some(percent) => (percent.trim(), 100.0),
            None => (trimmed, 1.0),
        };
        let value: f64 = number.parse().map_err(|_| {
            Error::InvalidParameter(format!("Cannot parse confidence level from {s:?}"))
        })?;
        Self::new(value / scale)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

/// Which population parameter an interval estimates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateKind {
    Mean,
    Proportion,
}

impl FromStr for EstimateKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "proportion" => Ok(Self::Proportion),
            other => Err(Error::InvalidParameter(format!(
                "Unknown estimate type {other:?}; expected \"mean\" or \"proportion\""
            ))),
        }
    }
}

impl fmt::Display for EstimateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mean => write!(f, "mean"),
            Self::Proportion => write!(f, "proportion"),
        }
    }
}

/// Where the success threshold of a proportion estimate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdSource {
    /// Supplied by the caller
    Supplied,
    /// No threshold was given; the sample median was applied
    MedianDefault,
}

/// Method-specific facts behind an estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EstimateDetails {
    Mean {
        /// Sample standard deviation (divisor n - 1)
        std_dev: f64,
        degrees_of_freedom: usize,
    },
    Proportion {
        successes: usize,
        /// Observations `>= threshold` count as successes
        threshold: f64,
        threshold_source: ThresholdSource,
        /// Sample is below the usual normal-approximation minimum
        reduced_validity: bool,
        /// Interval was clamped to [0, 1]
        clamped: bool,
    },
}

/// Point estimate with a two-sided confidence interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalEstimate {
    pub kind: EstimateKind,
    pub sample_size: usize,
    pub point_estimate: f64,
    pub standard_error: f64,
    pub confidence_level: f64,
    pub critical_value: f64,
    /// `critical_value * standard_error`, before any clamping
    pub margin_of_error: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub details: EstimateDetails,
}

impl IntervalEstimate {
    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower_bound && value <= self.upper_bound
    }

    /// Whether the sample median was substituted for a missing threshold
    pub fn used_default_threshold(&self) -> bool {
        matches!(
            self.details,
            EstimateDetails::Proportion {
                threshold_source: ThresholdSource::MedianDefault,
                ..
            }
        )
    }

    /// Whether the estimate was computed below the recommended sample size
    pub fn has_reduced_validity(&self) -> bool {
        matches!(
            self.details,
            EstimateDetails::Proportion {
                reduced_validity: true,
                ..
            }
        )
    }
}

impl fmt::Display for IntervalEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI for the {}: [{:.4}, {:.4}], estimate: {:.4}",
            self.confidence_level * 100.0,
            self.kind,
            self.lower_bound,
            self.upper_bound,
            self.point_estimate
        )
    }
}
