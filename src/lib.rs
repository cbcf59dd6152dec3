//! # statease
//!
//! Descriptive and inferential statistics for a single numeric sample.
//!
//! This crate re-exports the workspace members:
//!
//! - [`core`]: shared error type, sample validation, quantiles
//! - [`descriptive`]: summary statistics, shape estimators, Tukey outliers
//! - [`distribution`]: histogram, kernel density and boxplot layouts
//! - [`confidence`]: t interval for a mean, Wald interval for a proportion
//! - [`correlation`]: Pearson and Spearman coefficients with a trend line
//! - [`report`]: Markdown and JSON rendering of the result records
//!
//! ## Quick start
//!
//! ```rust
//! use statease::prelude::*;
//!
//! let data = [12.0, 15.5, 9.8, 14.1, 11.7, 13.3, 10.9, 48.0];
//!
//! let stats = SampleStats::new();
//! let report = stats.summarize(&data).unwrap();
//! assert_eq!(report.outlier_count, 1);
//!
//! let ci = estimate_mean(&data, 0.95).unwrap();
//! assert!(ci.lower_bound < report.mean && report.mean < ci.upper_bound);
//!
//! let x = [1.0, 2.0, 3.0, 4.0];
//! let y = [2.1, 3.9, 6.2, 7.8];
//! let r = analyze(&x, &y, CorrelationMethod::Pearson).unwrap();
//! assert!(r.coefficient > 0.99);
//! ```

pub use statease_confidence as confidence;
pub use statease_core as core;
pub use statease_correlation as correlation;
pub use statease_descriptive as descriptive;
pub use statease_distribution as distribution;
pub use statease_report as report;

pub use statease_core::{Error, Result, Sample};

/// The types and entry points most callers need
pub mod prelude {
    pub use statease_confidence::{
        estimate_mean, estimate_proportion, ConfidenceLevel, EstimateDetails, EstimateKind,
        IntervalEstimate, IntervalEstimator, ProportionConfig, ThresholdSource,
    };
    pub use statease_core::{Error, Result, Sample};
    pub use statease_correlation::{
        analyze, CorrelationAnalyzer, CorrelationMethod, CorrelationResult,
    };
    pub use statease_descriptive::{
        summarize, DescriptiveConfig, DescriptiveReport, Interpretation, MomentBias, SampleStats,
    };
    pub use statease_distribution::{
        boxplot_spec, histogram_spec, Bandwidth, BoxplotSpec, DistributionConfig,
        DistributionSummary, HistogramSpec,
    };
}
