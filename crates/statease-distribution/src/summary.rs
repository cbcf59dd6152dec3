//! Plot-ready distribution summaries

use crate::boxplot::{self, BoxplotSpec};
use crate::config::DistributionConfig;
use crate::histogram::{equal_width_bins, sturges_bins, HistogramBin};
use crate::kde::{DensityCurve, GaussianKde};
use serde::{Deserialize, Serialize};
use statease_core::utils::mean;
use statease_core::{quantile_sorted, Result, Sample};
use tracing::{debug, instrument};

/// Numbers needed to draw a density histogram with a KDE overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSpec {
    /// Sturges' bin count
    pub bin_count: usize,
    /// Equal-width bins; densities integrate to one
    pub bins: Vec<HistogramBin>,
    /// `None` for samples too small or too flat for a kernel estimate
    pub density_curve: Option<DensityCurve>,
    /// Position of the mean marker
    pub mean: f64,
    /// Position of the median marker
    pub median: f64,
}

/// Prepares histogram and boxplot layouts
///
/// # Example
///
/// ```rust
/// use statease_distribution::{DistributionConfig, DistributionSummary};
///
/// let config = DistributionConfig::default().with_seed(7);
/// let summary = DistributionSummary::with_config(config).unwrap();
/// let data = [2.0, 4.0, 4.5, 5.0, 7.0, 9.0];
///
/// let histogram = summary.histogram_spec(&data).unwrap();
/// assert_eq!(histogram.bin_count, 4);
/// assert_eq!(histogram.density_curve.unwrap().points.len(), 100);
///
/// let boxplot = summary.boxplot_spec(&data).unwrap();
/// assert_eq!(boxplot.jitter.len(), data.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistributionSummary {
    config: DistributionConfig,
}

impl DistributionSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DistributionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DistributionConfig {
        &self.config
    }

    /// Histogram layout: Sturges bins, KDE curve, mean and median markers
    ///
    /// Fails only with `EmptySample` (or `InvalidInput` for non-finite
    /// values). Degenerate samples still produce a spec, without a curve.
    #[instrument(skip(self, sample), fields(n = sample.len()))]
    pub fn histogram_spec(&self, sample: &[f64]) -> Result<HistogramSpec> {
        let sample = Sample::new(sample)?;
        let sorted = sample.sorted();
        let bin_count = sturges_bins(sample.len());

        Ok(HistogramSpec {
            bin_count,
            bins: equal_width_bins(&sorted, bin_count),
            density_curve: self.density_curve(&sample),
            mean: mean(sample.values()),
            median: quantile_sorted(&sorted, 0.5)?,
        })
    }

    /// Boxplot layout: quartiles, whiskers, fliers and jittered points
    #[instrument(skip(self, sample), fields(n = sample.len()))]
    pub fn boxplot_spec(&self, sample: &[f64]) -> Result<BoxplotSpec> {
        let sample = Sample::new(sample)?;
        boxplot::layout(sample.values(), &sample.sorted(), &self.config)
    }

    fn density_curve(&self, sample: &Sample<'_>) -> Option<DensityCurve> {
        if sample.len() < self.config.min_density_samples {
            debug!("Sample too small for a density curve");
            return None;
        }
        match GaussianKde::new(sample.values(), self.config.bandwidth) {
            Ok(kde) => {
                debug!(bandwidth = kde.bandwidth(), "Fitted Gaussian KDE");
                Some(kde.curve(sample.min(), sample.max(), self.config.density_points))
            }
            Err(e) => {
                debug!(error = %e, "Skipping density curve");
                None
            }
        }
    }
}

/// Histogram layout with the default configuration
pub fn histogram_spec(sample: &[f64]) -> Result<HistogramSpec> {
    DistributionSummary::new().histogram_spec(sample)
}

/// Boxplot layout with the default configuration
pub fn boxplot_spec(sample: &[f64]) -> Result<BoxplotSpec> {
    DistributionSummary::new().boxplot_spec(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use statease_core::Error;

    #[test]
    fn test_empty_sample() {
        assert_eq!(histogram_spec(&[]), Err(Error::EmptySample));
        assert_eq!(boxplot_spec(&[]), Err(Error::EmptySample));
    }

    #[test]
    fn test_small_samples_have_no_curve() {
        let spec = histogram_spec(&[1.0, 2.0]).unwrap();
        assert!(spec.density_curve.is_none());
        assert_eq!(spec.bin_count, 2);
        assert_eq!(spec.mean, 1.5);
        assert_eq!(spec.median, 1.5);

        let spec = histogram_spec(&[1.0, 2.0, 3.0]).unwrap();
        assert!(spec.density_curve.is_some());
    }

    #[test]
    fn test_constant_sample_does_not_fail() {
        let data = [4.0; 10];
        let spec = histogram_spec(&data).unwrap();
        assert!(spec.density_curve.is_none());
        assert_eq!(spec.bins.len(), spec.bin_count);
        assert_eq!(spec.bins.iter().map(|b| b.count).sum::<usize>(), 10);

        let boxplot = boxplot_spec(&data).unwrap();
        assert_eq!(boxplot.iqr, 0.0);
        assert!(boxplot.fliers.is_empty());
        assert_eq!(boxplot.lower_whisker, 4.0);
        assert_eq!(boxplot.upper_whisker, 4.0);
    }

    #[test]
    fn test_curve_spans_sample_range() {
        let data = [3.0, -1.0, 2.5, 8.0, 4.0];
        let curve = histogram_spec(&data).unwrap().density_curve.unwrap();
        assert_eq!(curve.points.len(), 100);
        assert_eq!(curve.points[0].x, -1.0);
        assert_eq!(curve.points[99].x, 8.0);
        assert!(curve.points.iter().all(|p| p.density > 0.0));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DistributionConfig::default().with_density_points(0);
        assert!(DistributionSummary::with_config(config).is_err());
    }
}
