//! Correlation method selector

use serde::{Deserialize, Serialize};
use statease_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Coefficient to compute between two paired columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationMethod {
    /// Product-moment correlation of the raw values
    #[default]
    Pearson,
    /// Product-moment correlation of the average ranks
    Spearman,
}

impl CorrelationMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pearson => "pearson",
            Self::Spearman => "spearman",
        }
    }
}

impl FromStr for CorrelationMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pearson" => Ok(Self::Pearson),
            "spearman" => Ok(Self::Spearman),
            other => Err(Error::InvalidParameter(format!(
                "Unknown correlation method {other:?}; expected \"pearson\" or \"spearman\""
            ))),
        }
    }
}

impl fmt::Display for CorrelationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pearson => write!(f, "Pearson"),
            Self::Spearman => write!(f, "Spearman"),
        }
    }
}
