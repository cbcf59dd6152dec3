//! Layout parameters for distribution plots

use serde::{Deserialize, Serialize};
use statease_core::{Error, Result};

/// Number of evenly spaced points on the density curve
pub const DEFAULT_DENSITY_POINTS: usize = 100;

/// Smallest sample that gets a density curve
pub const MIN_DENSITY_SAMPLES: usize = 3;

/// Bandwidth rule for the Gaussian kernel density estimate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bandwidth {
    /// Scott's factor `n^(-1/5)` times the sample standard deviation
    #[default]
    Scott,
    /// Silverman's factor `(3n/4)^(-1/5)` times the sample standard deviation
    Silverman,
    /// Fixed kernel standard deviation
    Fixed(f64),
}

impl Bandwidth {
    /// Kernel standard deviation for a sample of size `n` and spread `std_dev`
    pub fn kernel_width(&self, n: usize, std_dev: f64) -> f64 {
        let n = n as f64;
        match *self {
            Self::Scott => std_dev * n.powf(-0.2),
            Self::Silverman => std_dev * (n * 0.75).powf(-0.2),
            Self::Fixed(h) => h,
        }
    }
}

/// Parameters for [`DistributionSummary`](crate::DistributionSummary)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionConfig {
    pub density_points: usize,
    pub min_density_samples: usize,
    pub bandwidth: Bandwidth,
    /// Center of the vertical jitter used for the boxplot overlay
    pub jitter_center: f64,
    pub jitter_std_dev: f64,
    /// Fixed seed for reproducible jitter; fresh entropy when `None`
    pub jitter_seed: Option<u64>,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            density_points: DEFAULT_DENSITY_POINTS,
            min_density_samples: MIN_DENSITY_SAMPLES,
            bandwidth: Bandwidth::Scott,
            jitter_center: 1.0,
            jitter_std_dev: 0.04,
            jitter_seed: None,
        }
    }
}

impl DistributionConfig {
    pub fn with_density_points(mut self, points: usize) -> Self {
        self.density_points = points;
        self
    }

    pub fn with_bandwidth(mut self, bandwidth: Bandwidth) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    pub fn with_jitter(mut self, center: f64, std_dev: f64) -> Self {
        self.jitter_center = center;
        self.jitter_std_dev = std_dev;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.jitter_seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.density_points < 2 {
            return Err(Error::InvalidParameter(format!(
                "density_points must be at least 2, got {}",
                self.density_points
            )));
        }
        if let Bandwidth::Fixed(h) = self.bandwidth {
            if !(h.is_finite() && h > 0.0) {
                return Err(Error::InvalidParameter(format!(
                    "Fixed bandwidth must be positive, got {h}"
                )));
            }
        }
        if !self.jitter_center.is_finite()
            || !self.jitter_std_dev.is_finite()
            || self.jitter_std_dev < 0.0
        {
            return Err(Error::InvalidParameter(format!(
                "Jitter needs a finite center and non-negative spread, got N({}, {})",
                self.jitter_center, self.jitter_std_dev
            )));
        }
        Ok(())
    }
}
