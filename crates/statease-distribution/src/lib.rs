//! Distribution layouts for plotting a sample
//!
//! This crate turns a sample into the numbers a plotting backend needs; it
//! never renders anything itself.
//!
//! - **Histogram**: Sturges' bin count, equal-width bins normalized to a
//!   density, mean and median marker positions
//! - **Kernel density**: Gaussian KDE with Scott's (default) or Silverman's
//!   bandwidth, sampled at 100 evenly spaced points over the sample range
//! - **Boxplot**: quartiles, Tukey whiskers, fliers and a seedable jittered
//!   overlay of every observation
//!
//! # Examples
//!
//! ```rust
//! use statease_distribution::{histogram_spec, boxplot_spec};
//!
//! let data = vec![1.0, 2.0, 2.5, 3.0, 3.2, 3.5, 9.0];
//! let histogram = histogram_spec(&data).unwrap();
//! for bin in &histogram.bins {
//!     println!("{bin}");
//! }
//!
//! let boxplot = boxplot_spec(&data).unwrap();
//! assert_eq!(boxplot.fliers, vec![9.0]);
//! ```

pub mod boxplot;
pub mod config;
pub mod histogram;
pub mod kde;
pub mod summary;

pub use boxplot::{BoxplotSpec, JitterPoint, WHISKER_MULTIPLIER};
pub use config::{Bandwidth, DistributionConfig, DEFAULT_DENSITY_POINTS, MIN_DENSITY_SAMPLES};
pub use histogram::{equal_width_bins, sturges_bins, HistogramBin};
pub use kde::{DensityCurve, DensityPoint, GaussianKde};
pub use summary::{boxplot_spec, histogram_spec, DistributionSummary, HistogramSpec};

pub use statease_core::{Error, Result};
