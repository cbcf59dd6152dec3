//! Core types for the statease statistics engine
//!
//! This crate provides the pieces shared by every analysis crate:
//!
//! - [`Error`] and [`Result`], the single error taxonomy of the workspace
//! - [`Sample`], a validated borrowed view over finite observations
//! - Linear-interpolation quantiles and [`Quartiles`]
//! - Basic moment helpers in [`utils`]
//!
//! # Example
//!
//! ```rust
//! use statease_core::{Quartiles, Sample};
//!
//! let data = [4.0, 1.0, 3.0, 2.0, 5.0];
//! let sample = Sample::new(&data).unwrap();
//! let quartiles = Quartiles::from_sorted(&sample.sorted()).unwrap();
//! assert_eq!(quartiles.median, 3.0);
//! assert_eq!(quartiles.iqr(), 2.0);
//! ```

pub mod error;
pub mod quantile;
pub mod sample;
pub mod utils;

pub use error::{Error, Result};
pub use quantile::{median, percentile_sorted, quantile_sorted, Quartiles};
pub use sample::{to_f64_vec, Sample};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
