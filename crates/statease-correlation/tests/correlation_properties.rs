use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;
use statease_correlation::{analyze, CorrelationMethod};

/// y = slope * x + noise
fn linear_with_noise(n: usize, slope: f64, noise: f64, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let x_dist = Normal::new(0.0, 1.0).unwrap();
    let e_dist = Normal::new(0.0, noise).unwrap();
    let x: Vec<f64> = (0..n).map(|_| x_dist.sample(&mut rng)).collect();
    let y = x.iter().map(|&xi| slope * xi + e_dist.sample(&mut rng)).collect();
    (x, y)
}

#[test]
fn test_strong_linear_relationship() {
    let (x, y) = linear_with_noise(200, 3.0, 0.5, 42);
    let result = analyze(&x, &y, CorrelationMethod::Pearson).unwrap();

    assert!(result.coefficient > 0.95);
    assert_abs_diff_eq!(result.regression_slope, 3.0, epsilon = 0.2);
    assert_abs_diff_eq!(result.regression_intercept, 0.0, epsilon = 0.2);
    assert!(result.is_significant(0.001));
    assert_abs_diff_eq!(
        result.r_squared,
        result.coefficient * result.coefficient,
        epsilon = 1e-12
    );
}

#[test]
fn test_independent_columns() {
    let (x, _) = linear_with_noise(500, 0.0, 1.0, 1);
    let (y, _) = linear_with_noise(500, 0.0, 1.0, 2);
    for method in [CorrelationMethod::Pearson, CorrelationMethod::Spearman] {
        let result = analyze(&x, &y, method).unwrap();
        // Standard error of r is about 1/√n ≈ 0.045
        assert!(result.coefficient.abs() < 0.2, "{method}: {}", result.coefficient);
    }
}

#[test]
fn test_spearman_resists_outlier() {
    let mut x: Vec<f64> = (1..=30).map(f64::from).collect();
    let mut y = x.clone();
    x.push(31.0);
    y.push(-1_000.0);

    let pearson = analyze(&x, &y, CorrelationMethod::Pearson).unwrap();
    let spearman = analyze(&x, &y, CorrelationMethod::Spearman).unwrap();
    assert!(spearman.coefficient > 0.8);
    assert!(pearson.coefficient < spearman.coefficient);
}

#[test]
fn test_result_serializes() {
    let result = analyze(&[1.0, 2.0, 3.0, 4.0], &[2.0, 1.0, 4.0, 3.0], CorrelationMethod::Spearman)
        .unwrap();
    let json = serde_json::to_value(result).unwrap();
    assert_eq!(json["method"], "spearman");
    assert_eq!(json["sample_size"], 4);
    assert!(json["p_value"].is_number());
}

fn varied_pairs() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (3usize..60).prop_flat_map(|n| {
        (
            prop::collection::vec(-1e3f64..1e3, n),
            prop::collection::vec(-1e3f64..1e3, n),
        )
    })
}

proptest! {
    #[test]
    fn prop_coefficient_in_range((x, y) in varied_pairs()) {
        for method in [CorrelationMethod::Pearson, CorrelationMethod::Spearman] {
            if let Ok(result) = analyze(&x, &y, method) {
                prop_assert!((-1.0..=1.0).contains(&result.coefficient));
                prop_assert!((0.0..=1.0).contains(&result.r_squared));
                let p = result.p_value.unwrap();
                prop_assert!((0.0..=1.0).contains(&p));
            }
        }
    }

    #[test]
    fn prop_self_correlation_is_one(
        raw in prop::collection::vec(-1000i32..1000, 3..60),
        exponent in -250i32..250,
    ) {
        let factor = 10f64.powi(exponent);
        let x: Vec<f64> = raw.into_iter().map(|v| f64::from(v) * factor).collect();
        prop_assume!(x.iter().any(|&v| v != x[0]));
        let neg: Vec<f64> = x.iter().map(|v| -v).collect();
        for method in [CorrelationMethod::Pearson, CorrelationMethod::Spearman] {
            let same = analyze(&x, &x, method).unwrap();
            prop_assert!((same.coefficient - 1.0).abs() < 1e-9);
            let opposite = analyze(&x, &neg, method).unwrap();
            prop_assert!((opposite.coefficient + 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_symmetric_in_arguments((x, y) in varied_pairs()) {
        if let (Ok(xy), Ok(yx)) = (
            analyze(&x, &y, CorrelationMethod::Spearman),
            analyze(&y, &x, CorrelationMethod::Spearman),
        ) {
            prop_assert!((xy.coefficient - yx.coefficient).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_length_mismatch_reported(
        x in prop::collection::vec(-10f64..10.0, 2..20),
        extra in 1usize..5,
    ) {
        let y = vec![1.0; x.len() + extra];
        let is_mismatch = matches!(
            analyze(&x, &y, CorrelationMethod::Pearson),
            Err(statease_correlation::Error::LengthMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }
}
