//! Descriptive statistics for a single numeric sample
//!
//! This crate computes the scalar summary of a sample and flags outliers:
//!
//! - Mean, median, population standard deviation, range
//! - Linear-interpolation quartiles and the interquartile range
//! - Bias-adjusted skewness and excess kurtosis
//! - Tukey fence outliers (`1.5 * IQR` by default)
//!
//! A deterministic [`Interpretation`] maps skewness, kurtosis and the outlier
//! count to narrative categories.
//!
//! # Examples
//!
//! ```rust
//! use statease_descriptive::{SampleStats, Skewness};
//!
//! let data = vec![2.0, 3.0, 3.5, 4.0, 4.2, 5.0, 30.0];
//! let stats = SampleStats::new();
//! let report = stats.summarize(&data).unwrap();
//!
//! assert_eq!(report.outliers, vec![30.0]);
//! let reading = stats.interpret(&report);
//! assert_eq!(reading.shape, Skewness::RightSkewed);
//! println!("{reading}");
//! ```

pub mod config;
pub mod interpretation;
pub mod moments;
pub mod outliers;
pub mod summary;

pub use config::{
    DescriptiveConfig, MomentBias, DEFAULT_FENCE_MULTIPLIER, DEFAULT_KURTOSIS_THRESHOLD,
    DEFAULT_SKEW_THRESHOLD,
};
pub use interpretation::{Interpretation, Skewness, Tailedness};
pub use moments::{excess_kurtosis, skewness, CentralMoments};
pub use outliers::TukeyFence;
pub use summary::{summarize, DescriptiveReport, SampleStats};

pub use statease_core::{Error, Result};
