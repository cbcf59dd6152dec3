//! Confidence interval estimation
//!
//! This crate provides two interval estimators:
//!
//! - **Mean**: Student t interval with `n - 1` degrees of freedom, using the
//!   unbiased standard deviation. Bounds are not clamped.
//! - **Proportion**: Wald (normal approximation) interval for the share of
//!   observations at or above a threshold. Bounds are clamped to `[0, 1]`.
//!   Without a threshold the sample median is applied and the estimate says so.
//!
//! # Examples
//!
//! ```rust
//! use statease_confidence::{estimate_proportion, ThresholdSource, EstimateDetails};
//!
//! let sample: Vec<f64> = (1..=40).map(f64::from).collect();
//! let ci = estimate_proportion(&sample, None, 0.95).unwrap();
//!
//! assert!(ci.used_default_threshold());
//! assert!(ci.lower_bound >= 0.0 && ci.upper_bound <= 1.0);
//! if let EstimateDetails::Proportion { threshold, threshold_source, .. } = ci.details {
//!     assert_eq!(threshold_source, ThresholdSource::MedianDefault);
//!     println!("threshold = {threshold}");
//! }
//! ```

mod critical;
mod estimator;
mod mean;
mod proportion;
mod types;

pub use critical::{t_critical, z_critical};
pub use estimator::{estimate_mean, estimate_proportion, IntervalEstimator};
pub use mean::MIN_MEAN_SAMPLE;
pub use proportion::{ProportionConfig, DEFAULT_MIN_PROPORTION_SAMPLE};
pub use types::{
    ConfidenceLevel, EstimateDetails, EstimateKind, IntervalEstimate, ThresholdSource,
};

pub use statease_core::{Error, Result};
