//! Gaussian kernel density estimation

use crate::config::Bandwidth;
use serde::{Deserialize, Serialize};
use statease_core::utils::std_dev;
use statease_core::{Error, Result};
use std::f64::consts::PI;

/// A point on the density curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    pub x: f64,
    pub density: f64,
}

/// Density curve sampled on an even grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityCurve {
    /// Kernel standard deviation used for the estimate
    pub bandwidth: f64,
    pub points: Vec<DensityPoint>,
}

impl DensityCurve {
    /// Location of the highest density on the grid
    pub fn peak(&self) -> Option<DensityPoint> {
        self.points
            .iter()
            .copied()
            .max_by(|a, b| a.density.total_cmp(&b.density))
    }
}

/// Gaussian KDE over a borrowed sample
#[derive(Debug, Clone)]
pub struct GaussianKde<'a> {
    data: &'a [f64],
    bandwidth: f64,
    norm: f64,
}

impl<'a> GaussianKde<'a> {
    /// Fit a KDE using the given bandwidth rule
    ///
    /// Fails with `Computation` when the rule yields a non-positive kernel
    /// width, which happens for zero-variance samples.
    pub fn new(data: &'a [f64], rule: Bandwidth) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::EmptySample);
        }
        let bandwidth = rule.kernel_width(data.len(), std_dev(data));
        Self::with_bandwidth(data, bandwidth)
    }

    /// Fit a KDE with an explicit kernel standard deviation
    pub fn with_bandwidth(data: &'a [f64], bandwidth: f64) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::EmptySample);
        }
        if !(bandwidth.is_finite() && bandwidth > 0.0) {
            return Err(Error::Computation(format!(
                "Kernel bandwidth must be positive, got {bandwidth}"
            )));
        }
        let norm = 1.0 / (data.len() as f64 * bandwidth * (2.0 * PI).sqrt());
        Ok(Self {
            data,
            bandwidth,
            norm,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Density estimate at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let sum: f64 = self
            .data
            .iter()
            .map(|&xi| {
                let z = (x - xi) / h;
                (-0.5 * z * z).exp()
            })
            .sum();
        sum * self.norm
    }

    /// Evaluate on `points` evenly spaced values spanning `[lo, hi]`
    pub fn curve(&self, lo: f64, hi: f64, points: usize) -> DensityCurve {
        let points = linspace(lo, hi, points)
            .map(|x| DensityPoint {
                x,
                density: self.evaluate(x),
            })
            .collect();
        DensityCurve {
            bandwidth: self.bandwidth,
            points,
        }
    }
}

/// `count` evenly spaced values from `lo` to `hi` inclusive
pub fn linspace(lo: f64, hi: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 {
        (hi - lo) / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(move |i| {
        if i + 1 == count && count > 1 {
            hi
        } else {
            lo + i as f64 * step
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_point_kernel() {
        let data = [0.0];
        let kde = GaussianKde::with_bandwidth(&data, 1.0).unwrap();
        assert_relative_eq!(kde.evaluate(0.0), 1.0 / (2.0 * PI).sqrt(), epsilon = 1e-12);
        let expected = (-0.5f64).exp() / (2.0 * PI).sqrt();
        assert_relative_eq!(kde.evaluate(1.0), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_scott_bandwidth() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let kde = GaussianKde::new(&data, Bandwidth::Scott).unwrap();
        // sample std 1.5811, n^(-1/5) = 0.72478
        assert_relative_eq!(kde.bandwidth(), 2.5f64.sqrt() * 5f64.powf(-0.2), epsilon = 1e-12);
    }

    #[test]
    fn test_density_integrates_to_about_one() {
        let data = [1.0, 1.5, 2.0, 4.0, 4.2, 5.5, 7.0];
        let kde = GaussianKde::new(&data, Bandwidth::Scott).unwrap();
        let h = kde.bandwidth();
        let curve = kde.curve(1.0 - 8.0 * h, 7.0 + 8.0 * h, 4001);
        let dx = curve.points[1].x - curve.points[0].x;
        let area: f64 = curve.points.iter().map(|p| p.density * dx).sum();
        assert_relative_eq!(area, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_variance_rejected() {
        let data = [2.0, 2.0, 2.0];
        assert!(matches!(
            GaussianKde::new(&data, Bandwidth::Scott),
            Err(Error::Computation(_))
        ));
    }

    #[test]
    fn test_linspace_endpoints() {
        let xs: Vec<f64> = linspace(0.0, 1.0, 5).collect();
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        let xs: Vec<f64> = linspace(2.0, 3.0, 1).collect();
        assert_eq!(xs, vec![2.0]);
    }

    #[test]
    fn test_peak() {
        let data = [0.0, 0.1, -0.1, 5.0];
        let kde = GaussianKde::with_bandwidth(&data, 0.5).unwrap();
        let peak = kde.curve(-1.0, 6.0, 141).peak().unwrap();
        assert!(peak.x.abs() < 0.2);
    }
}
