//! Scalar descriptive statistics with outlier flags

use crate::config::DescriptiveConfig;
use crate::interpretation::Interpretation;
use crate::moments::CentralMoments;
use crate::outliers::TukeyFence;
use serde::{Deserialize, Serialize};
use statease_core::{Quartiles, Result, Sample};
use tracing::{debug, instrument};

/// Summary statistics of a single sample
///
/// `std_dev` is the population standard deviation (divisor n) and
/// `kurtosis` is excess kurtosis, so a normal sample reads close to 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveReport {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    /// Fence used for the outlier check
    pub fence: TukeyFence,
    /// Out-of-fence values in their original order
    pub outliers: Vec<f64>,
    pub outlier_count: usize,
}

impl DescriptiveReport {
    /// Quartiles as a single value
    pub fn quartiles(&self) -> Quartiles {
        Quartiles {
            q1: self.q1,
            median: self.median,
            q3: self.q3,
        }
    }

    /// Range, `max - min`
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Descriptive statistics estimator
///
/// # Example
///
/// ```rust
/// use statease_descriptive::SampleStats;
///
/// let report = SampleStats::new().summarize(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(report.mean, 3.0);
/// assert_eq!(report.iqr, 2.0);
/// assert_eq!(report.outlier_count, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SampleStats {
    config: DescriptiveConfig,
}

impl SampleStats {
    /// Create an estimator with the default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an estimator with custom thresholds
    pub fn with_config(config: DescriptiveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DescriptiveConfig {
        &self.config
    }

    /// Summarize a sample
    ///
    /// Fails with `EmptySample` on zero-length input.
    #[instrument(skip(self, sample), fields(n = sample.len()))]
    pub fn summarize(&self, sample: &[f64]) -> Result<DescriptiveReport> {
        let sample = Sample::new(sample)?;
        let sorted = sample.sorted();
        let quartiles = Quartiles::from_sorted(&sorted)?;
        let moments = CentralMoments::from_sample(sample.values());

        let fence = TukeyFence::new(&quartiles, self.config.fence_multiplier);
        let outliers = fence.outliers(sample.values());
        debug!(
            lower = fence.lower,
            upper = fence.upper,
            outliers = outliers.len(),
            "Tukey fence applied"
        );

        Ok(DescriptiveReport {
            count: sample.len(),
            mean: moments.mean,
            median: quartiles.median,
            std_dev: moments.std_dev(),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            q1: quartiles.q1,
            q3: quartiles.q3,
            iqr: quartiles.iqr(),
            skewness: moments.skewness(self.config.moment_bias),
            kurtosis: moments.excess_kurtosis(self.config.moment_bias),
            fence,
            outlier_count: outliers.len(),
            outliers,
        })
    }

    /// Narrative classification of a report under this estimator's thresholds
    pub fn interpret(&self, report: &DescriptiveReport) -> Interpretation {
        Interpretation::new(report, &self.config)
    }
}

/// Summarize a sample with the default configuration
pub fn summarize(sample: &[f64]) -> Result<DescriptiveReport> {
    SampleStats::new().summarize(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MomentBias;
    use approx::assert_relative_eq;
    use statease_core::Error;

    #[test]
    fn test_one_to_five() {
        let report = summarize(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(report.count, 5);
        assert_relative_eq!(report.mean, 3.0);
        assert_relative_eq!(report.median, 3.0);
        assert_relative_eq!(report.std_dev, 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_eq!(report.min, 1.0);
        assert_eq!(report.max, 5.0);
        assert_eq!(report.q1, 2.0);
        assert_eq!(report.q3, 4.0);
        assert_eq!(report.iqr, 2.0);
        assert_relative_eq!(report.skewness, 0.0, epsilon = 1e-12);
        assert_relative_eq!(report.kurtosis, -1.2, epsilon = 1e-12);
        assert!(report.outliers.is_empty());
        assert_eq!(report.outlier_count, 0);
        assert_relative_eq!(report.range(), 4.0);
    }

    #[test]
    fn test_empty_sample() {
        assert_eq!(summarize(&[]), Err(Error::EmptySample));
    }

    #[test]
    fn test_single_observation() {
        let report = summarize(&[7.5]).unwrap();
        assert_eq!(report.count, 1);
        assert_eq!(report.mean, 7.5);
        assert_eq!(report.median, 7.5);
        assert_eq!(report.std_dev, 0.0);
        assert_eq!(report.iqr, 0.0);
        assert_eq!(report.skewness, 0.0);
        assert_eq!(report.outlier_count, 0);
    }

    #[test]
    fn test_outliers_in_original_order() {
        let data = [50.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, -40.0];
        let report = summarize(&data).unwrap();
        assert_eq!(report.outliers, vec![50.0, -40.0]);
        assert_eq!(report.outlier_count, 2);
    }

    #[test]
    fn test_population_bias_option() {
        let stats = SampleStats::with_config(
            DescriptiveConfig::default().with_moment_bias(MomentBias::Population),
        )
        .unwrap();
        let report = stats.summarize(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_relative_eq!(report.kurtosis, -1.3, epsilon = 1e-12);
    }

    #[test]
    fn test_tiny_magnitudes_keep_their_shape() {
        let unit = [1.0, 2.0, 3.0, 4.0, 10.0];
        let tiny: Vec<f64> = unit.iter().map(|v| v * 1e-90).collect();
        let stats = SampleStats::new();
        let expected = stats.summarize(&unit).unwrap();
        let report = stats.summarize(&tiny).unwrap();

        assert!(report.kurtosis.is_finite());
        assert_relative_eq!(report.skewness, expected.skewness, max_relative = 1e-9);
        assert_relative_eq!(report.kurtosis, expected.kurtosis, max_relative = 1e-9);
        assert_relative_eq!(report.std_dev, expected.std_dev * 1e-90, max_relative = 1e-9);
        assert_eq!(stats.interpret(&report), stats.interpret(&expected));
    }

    #[test]
    fn test_wider_fence_hides_outliers() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 9.0];
        assert_eq!(summarize(&data).unwrap().outlier_count, 1);

        let stats =
            SampleStats::with_config(DescriptiveConfig::default().with_fence_multiplier(3.0))
                .unwrap();
        assert_eq!(stats.summarize(&data).unwrap().outlier_count, 0);
    }

    #[test]
    fn test_interpretation_of_flat_sample() {
        let stats = SampleStats::new();
        let report = stats.summarize(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let reading = stats.interpret(&report);
        assert_eq!(reading.shape, crate::Skewness::Symmetric);
        assert_eq!(reading.tails, crate::Tailedness::Flat);
        assert!(!reading.has_outliers());
    }
}
