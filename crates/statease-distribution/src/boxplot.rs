//! Boxplot layout with a jittered point overlay

use crate::config::DistributionConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use statease_core::{Error, Quartiles, Result};

/// Multiplier of the IQR that bounds the whiskers
pub const WHISKER_MULTIPLIER: f64 = 1.5;

/// An observation placed on the overlay scatter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JitterPoint {
    pub value: f64,
    /// Vertical position; cosmetic only
    pub offset: f64,
}

/// Numbers needed to draw a horizontal boxplot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxplotSpec {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    /// Most extreme observations still inside the fence
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    /// Observations outside the fence, in original order
    pub fliers: Vec<f64>,
    /// One point per observation, in original order
    pub jitter: Vec<JitterPoint>,
}

/// Build a boxplot layout from the sample and its sorted copy
pub(crate) fn layout(
    values: &[f64],
    sorted: &[f64],
    config: &DistributionConfig,
) -> Result<BoxplotSpec> {
    let quartiles = Quartiles::from_sorted(sorted)?;
    let (lower_fence, upper_fence) = quartiles.fence(WHISKER_MULTIPLIER);
    let inside = |v: f64| v >= lower_fence && v <= upper_fence;

    // The median is always inside the fence, so both searches succeed
    let lower_whisker = sorted
        .iter()
        .copied()
        .find(|&v| inside(v))
        .unwrap_or(quartiles.q1);
    let upper_whisker = sorted
        .iter()
        .rev()
        .copied()
        .find(|&v| inside(v))
        .unwrap_or(quartiles.q3);
    let fliers = values.iter().copied().filter(|&v| !inside(v)).collect();

    Ok(BoxplotSpec {
        q1: quartiles.q1,
        median: quartiles.median,
        q3: quartiles.q3,
        iqr: quartiles.iqr(),
        lower_fence,
        upper_fence,
        lower_whisker,
        upper_whisker,
        fliers,
        jitter: jitter(values, config)?,
    })
}

fn jitter(values: &[f64], config: &DistributionConfig) -> Result<Vec<JitterPoint>> {
    let normal = Normal::new(config.jitter_center, config.jitter_std_dev)
        .map_err(|e| Error::InvalidParameter(format!("Invalid jitter distribution: {e}")))?;
    let mut rng = match config.jitter_seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    Ok(values
        .iter()
        .map(|&value| JitterPoint {
            value,
            offset: normal.sample(&mut rng),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_for(values: &[f64], config: &DistributionConfig) -> BoxplotSpec {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        layout(values, &sorted, config).unwrap()
    }

    #[test]
    fn test_quartiles_and_whiskers() {
        let values = [5.0, 1.0, 4.0, 2.0, 3.0, 20.0];
        let spec = spec_for(&values, &DistributionConfig::default().with_seed(1));
        // sorted: 1 2 3 4 5 20 -> q1 = 2.25, q3 = 4.75
        assert_eq!(spec.q1, 2.25);
        assert_eq!(spec.median, 3.5);
        assert_eq!(spec.q3, 4.75);
        assert_eq!(spec.iqr, 2.5);
        assert_eq!(spec.lower_whisker, 1.0);
        assert_eq!(spec.upper_whisker, 5.0);
        assert_eq!(spec.fliers, vec![20.0]);
    }

    #[test]
    fn test_jitter_follows_original_order() {
        let values = [3.0, 1.0, 2.0];
        let spec = spec_for(&values, &DistributionConfig::default().with_seed(9));
        let ordered: Vec<f64> = spec.jitter.iter().map(|p| p.value).collect();
        assert_eq!(ordered, vec![3.0, 1.0, 2.0]);
        assert!(spec.jitter.iter().all(|p| (p.offset - 1.0).abs() < 0.5));
    }

    #[test]
    fn test_seeded_jitter_is_reproducible() {
        let values: Vec<f64> = (0..20).map(f64::from).collect();
        let config = DistributionConfig::default().with_seed(42);
        assert_eq!(spec_for(&values, &config).jitter, spec_for(&values, &config).jitter);
    }

    #[test]
    fn test_zero_spread_jitter() {
        let values = [1.0, 2.0];
        let spec = spec_for(&values, &DistributionConfig::default().with_jitter(0.0, 0.0));
        assert!(spec.jitter.iter().all(|p| p.offset == 0.0));
    }
}
