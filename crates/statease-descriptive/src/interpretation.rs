//! Deterministic narrative reading of a descriptive report
//!
//! The mapping from numbers to words uses the thresholds carried in
//! [`DescriptiveConfig`]; nothing here is estimated.

use crate::config::DescriptiveConfig;
use crate::summary::DescriptiveReport;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of the distribution as read from skewness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skewness {
    Symmetric,
    RightSkewed,
    LeftSkewed,
}

impl Skewness {
    /// `|skew| < t` is symmetric, `skew >= t` right, `skew <= -t` left
    pub fn classify(skewness: f64, threshold: f64) -> Self {
        if skewness.abs() < threshold {
            Self::Symmetric
        } else if skewness > 0.0 {
            Self::RightSkewed
        } else {
            Self::LeftSkewed
        }
    }
}

impl fmt::Display for Skewness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symmetric => write!(f, "the distribution is approximately symmetric"),
            Self::RightSkewed => write!(
                f,
                "the distribution is right-skewed (positive skew) with a longer right tail"
            ),
            Self::LeftSkewed => write!(
                f,
                "the distribution is left-skewed (negative skew) with a longer left tail"
            ),
        }
    }
}

/// Tail weight as read from excess kurtosis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tailedness {
    Peaked,
    Flat,
    Normal,
}

impl Tailedness {
    /// `k > t` is peaked, `k < -t` flat, anything between normal
    pub fn classify(excess_kurtosis: f64, threshold: f64) -> Self {
        if excess_kurtosis > threshold {
            Self::Peaked
        } else if excess_kurtosis < -threshold {
            Self::Flat
        } else {
            Self::Normal
        }
    }
}

impl fmt::Display for Tailedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Peaked => write!(f, "with high kurtosis (peaked distribution)"),
            Self::Flat => write!(f, "with low kurtosis (flat distribution)"),
            Self::Normal => write!(f, "with kurtosis close to a normal distribution"),
        }
    }
}

/// Narrative classification of a [`DescriptiveReport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub shape: Skewness,
    pub tails: Tailedness,
    pub outlier_count: usize,
}

impl Interpretation {
    pub fn new(report: &DescriptiveReport, config: &DescriptiveConfig) -> Self {
        Self {
            shape: Skewness::classify(report.skewness, config.skew_threshold),
            tails: Tailedness::classify(report.kurtosis, config.kurtosis_threshold),
            outlier_count: report.outlier_count,
        }
    }

    pub fn has_outliers(&self) -> bool {
        self.outlier_count > 0
    }

    /// Sentence describing shape and tails
    pub fn shape_sentence(&self) -> String {
        let shape = self.shape.to_string();
        let mut chars = shape.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => shape,
        };
        format!("{capitalized}, {}.", self.tails)
    }

    /// Sentence describing the outlier check
    pub fn outlier_sentence(&self) -> String {
        match self.outlier_count {
            0 => "No obvious outliers were detected.".to_string(),
            1 => "Detected 1 potential outlier; it may need further inspection.".to_string(),
            n => format!("Detected {n} potential outliers; they may need further inspection."),
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.shape_sentence(), self.outlier_sentence())
    }
}
