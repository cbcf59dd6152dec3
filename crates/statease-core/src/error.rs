//! Error types for statease
//!
//! Provides a unified error type for all statease crates.

use thiserror::Error;

/// Core error type for statistical operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Zero-length sample passed to a summarizer
    #[error("Empty sample: at least one observation is required")]
    EmptySample,

    /// Sample is shorter than the method's minimum
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientSample { expected: usize, actual: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Paired samples of unequal length
    #[error("Length mismatch: x has {left} observations, y has {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Correlation coefficient is undefined for the input
    #[error("Undefined correlation: {0}")]
    UndefinedCorrelation(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a confidence level outside (0, 1)
    pub fn invalid_confidence_level(level: f64) -> Self {
        Self::InvalidParameter(format!("Confidence level {level} must be in (0, 1)"))
    }

    /// Create an error for paired samples of different sizes
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str, index: usize) -> Self {
        Self::InvalidInput(format!(
            "{context} contains a NaN or infinite value at index {index}"
        ))
    }

    /// Whether the error was caused by the size of the input rather than its values
    pub fn is_size_error(&self) -> bool {
        matches!(
            self,
            Self::EmptySample | Self::InsufficientSample { .. } | Self::LengthMismatch { .. }
        )
    }
}
