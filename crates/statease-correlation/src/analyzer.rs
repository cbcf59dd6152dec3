//! Bivariate correlation between two paired columns

use crate::method::CorrelationMethod;
use crate::rank::average_ranks;
use crate::regression::CrossProducts;
use crate::significance::correlation_p_value;
use serde::{Deserialize, Serialize};
use statease_core::{Error, Result, Sample};
use std::fmt;
use tracing::{debug, instrument};

/// Smallest number of pairs accepted by [`CorrelationAnalyzer::analyze`]
pub const MIN_PAIRS: usize = 2;

/// Outcome of a correlation analysis
///
/// The regression line is always the least squares fit of the raw `y` on the
/// raw `x`, whichever coefficient was requested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    pub method: CorrelationMethod,
    /// Coefficient in [-1, 1]
    pub coefficient: f64,
    pub sample_size: usize,
    pub regression_slope: f64,
    pub regression_intercept: f64,
    /// Coefficient of determination of the regression line
    pub r_squared: f64,
    /// Two-sided p-value for zero correlation; `None` for two pairs
    pub p_value: Option<f64>,
}

impl CorrelationResult {
    /// Whether the coefficient differs from zero at significance `alpha`
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value.is_some_and(|p| p < alpha)
    }

    /// Fitted value of the regression line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.regression_slope * x + self.regression_intercept
    }
}

impl fmt::Display for CorrelationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.regression_intercept < 0.0 { '-' } else { '+' };
        write!(
            f,
            "{} r = {:.4} (n = {}), y = {:.4}x {} {:.4}",
            self.method,
            self.coefficient,
            self.sample_size,
            self.regression_slope,
            sign,
            self.regression_intercept.abs()
        )?;
        if let Some(p) = self.p_value {
            write!(f, ", p = {p:.4}")?;
        }
        Ok(())
    }
}

/// Pearson or Spearman correlation with a least squares trend line
///
/// # Example
///
/// ```rust
/// use statease_correlation::{CorrelationAnalyzer, CorrelationMethod};
///
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [1.0, 4.0, 9.0, 16.0, 25.0];
///
/// let analyzer = CorrelationAnalyzer::new();
/// let result = analyzer.analyze(&x, &y, CorrelationMethod::Spearman).unwrap();
/// assert!((result.coefficient - 1.0).abs() < 1e-12);
/// assert!((result.regression_slope - 6.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrelationAnalyzer;

impl CorrelationAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Correlate `y` with `x`
    ///
    /// Fails with `LengthMismatch` for columns of different length,
    /// `InsufficientSample` below two pairs, `InvalidInput` for non-finite
    /// values and `UndefinedCorrelation` when either column is constant.
    #[instrument(skip(self, x, y), fields(n = x.len()))]
    pub fn analyze(
        &self,
        x: &[f64],
        y: &[f64],
        method: CorrelationMethod,
    ) -> Result<CorrelationResult> {
        if x.len() != y.len() {
            return Err(Error::length_mismatch(x.len(), y.len()));
        }
        let x = Sample::with_min_len(x, MIN_PAIRS)?;
        let y = Sample::with_min_len(y, MIN_PAIRS)?;
        ensure_varies(x.values(), "x")?;
        ensure_varies(y.values(), "y")?;

        let raw = CrossProducts::new(x.values(), y.values());
        let fit = raw.linear_fit()?;

        let coefficient = match method {
            CorrelationMethod::Pearson => raw.correlation(),
            CorrelationMethod::Spearman => {
                let rx = average_ranks(x.values());
                let ry = average_ranks(y.values());
                CrossProducts::new(&rx, &ry).correlation()
            }
        };
        if !coefficient.is_finite() {
            return Err(Error::UndefinedCorrelation(
                "Coefficient is not finite; the columns have no usable variance".to_string(),
            ));
        }

        let p_value = correlation_p_value(coefficient, x.len())?;
        debug!(%method, coefficient, ?p_value, "Correlation computed");

        Ok(CorrelationResult {
            method,
            coefficient,
            sample_size: x.len(),
            regression_slope: fit.slope,
            regression_intercept: fit.intercept,
            r_squared: fit.r_squared,
            p_value,
        })
    }

    /// Same as [`analyze`](Self::analyze) with the method given by name
    ///
    /// Unknown names fail with `InvalidParameter`.
    pub fn analyze_named(&self, x: &[f64], y: &[f64], method: &str) -> Result<CorrelationResult> {
        let method = method.parse::<CorrelationMethod>()?;
        self.analyze(x, y, method)
    }
}

fn ensure_varies(values: &[f64], column: &str) -> Result<()> {
    let first = values[0];
    if values.iter().all(|&v| v == first) {
        return Err(Error::UndefinedCorrelation(format!(
            "{column} has zero variance (every value is {first})"
        )));
    }
    Ok(())
}

/// Correlation with the default analyzer
pub fn analyze(x: &[f64], y: &[f64], method: CorrelationMethod) -> Result<CorrelationResult> {
    CorrelationAnalyzer::new().analyze(x, y, method)
}
