//! Bivariate correlation analysis
//!
//! Computes the Pearson product-moment coefficient or the Spearman rank
//! coefficient (Pearson on average ranks) between two aligned columns, along
//! with a two-sided significance test and an ordinary least squares trend
//! line of `y` on `x`.
//!
//! The trend line is a visual aid. It is fitted to the raw values for both
//! methods, so a Spearman analysis of a curved monotone relationship reports
//! a perfect coefficient next to an imperfect line.
//!
//! # Examples
//!
//! ```rust
//! use statease_correlation::{analyze, CorrelationMethod, Error};
//!
//! let err = analyze(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0], CorrelationMethod::Pearson);
//! assert!(matches!(err, Err(Error::UndefinedCorrelation(_))));
//! ```

mod analyzer;
mod method;
mod rank;
mod regression;
mod significance;

pub use analyzer::{analyze, CorrelationAnalyzer, CorrelationResult, MIN_PAIRS};
pub use method::CorrelationMethod;
pub use rank::average_ranks;
pub use regression::{linear_fit, LinearFit};
pub use significance::correlation_p_value;

pub use statease_core::{Error, Result};
