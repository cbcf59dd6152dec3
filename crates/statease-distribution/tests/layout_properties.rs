//! Property tests for histogram and boxplot layouts

use approx::assert_relative_eq;
use proptest::prelude::*;
use statease_distribution::{
    sturges_bins, Bandwidth, DistributionConfig, DistributionSummary,
};

fn seeded() -> DistributionSummary {
    DistributionSummary::with_config(DistributionConfig::default().with_seed(42)).unwrap()
}

#[test]
fn test_bimodal_curve_has_two_bumps() {
    let mut data: Vec<f64> = (0..50).map(|i| 30.0 + (i as f64 - 25.0) * 0.2).collect();
    data.extend((0..50).map(|i| 70.0 + (i as f64 - 25.0) * 0.2));

    let summary = DistributionSummary::with_config(
        DistributionConfig::default().with_bandwidth(Bandwidth::Fixed(2.0)),
    )
    .unwrap();
    let curve = summary.histogram_spec(&data).unwrap().density_curve.unwrap();

    let densities: Vec<f64> = curve.points.iter().map(|p| p.density).collect();
    let local_maxima = densities
        .windows(3)
        .filter(|w| w[1] > w[0] && w[1] > w[2])
        .count();
    assert_eq!(local_maxima, 2);
}

#[test]
fn test_spec_serializes() {
    let spec = seeded().boxplot_spec(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json["median"], 2.5);
    assert_eq!(json["jitter"].as_array().unwrap().len(), 4);
}

proptest! {
    #[test]
    fn prop_histogram_counts_every_value(data in prop::collection::vec(-1e4f64..1e4, 1..400)) {
        let spec = seeded().histogram_spec(&data).unwrap();
        prop_assert_eq!(spec.bin_count, sturges_bins(data.len()));
        prop_assert_eq!(spec.bins.len(), spec.bin_count);
        prop_assert_eq!(spec.bins.iter().map(|b| b.count).sum::<usize>(), data.len());
    }

    #[test]
    fn prop_histogram_density_area(data in prop::collection::vec(-1e4f64..1e4, 2..200)) {
        let spec = seeded().histogram_spec(&data).unwrap();
        let area: f64 = spec.bins.iter().map(|b| b.density * b.width()).sum();
        assert_relative_eq!(area, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn prop_boxplot_ordering(data in prop::collection::vec(-1e4f64..1e4, 1..200)) {
        let spec = seeded().boxplot_spec(&data).unwrap();
        prop_assert!(spec.lower_whisker >= spec.lower_fence);
        prop_assert!(spec.upper_whisker <= spec.upper_fence);
        prop_assert!(spec.q1 <= spec.median && spec.median <= spec.q3);
        prop_assert!(spec.upper_whisker >= spec.lower_whisker);
        prop_assert_eq!(spec.jitter.len(), data.len());
    }
}
