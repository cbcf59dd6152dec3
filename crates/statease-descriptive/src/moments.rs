//! Higher-order moments: skewness and kurtosis
//!
//! Both estimators are built from the central moment ratios
//! `g1 = m3 / m2^(3/2)` and `g2 = m4 / m2^2 - 3`. The adjusted (Fisher)
//! forms correct them for sample size:
//!
//! ```text
//! G1 = g1 * sqrt(n (n - 1)) / (n - 2)
//! G2 = ((n + 1) g2 + 6) (n - 1) / ((n - 2) (n - 3))
//! ```
//!
//! Where a form is undefined (too few observations or zero variance) the
//! shape is reported as 0.0, i.e. indistinguishable from a normal sample.
//!
//! Deviations are divided by the largest absolute deviation before they are
//! raised to powers, so the ratios stay finite for any finite sample.

use crate::config::MomentBias;
use statease_core::utils::mean;

/// Central moments m2, m3, m4 (divisor n)
///
/// `m2`..`m4` are in the units of the data and may overflow or underflow for
/// extreme magnitudes. The shape estimators and [`std_dev`](Self::std_dev)
/// work on the standardised moments instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralMoments {
    pub n: usize,
    pub mean: f64,
    pub m2: f64,
    pub m3: f64,
    pub m4: f64,
    /// Largest absolute deviation from the mean
    pub scale: f64,
    // Moments of deviation / scale
    z2: f64,
    z3: f64,
    z4: f64,
}

impl CentralMoments {
    /// Compute central moments in a single pass around the mean
    pub fn from_sample(sample: &[f64]) -> Self {
        let n = sample.len();
        let center = if n == 0 { 0.0 } else { mean(sample) };
        let scale = sample
            .iter()
            .map(|&x| (x - center).abs())
            .fold(0.0, f64::max);
        if n == 0 || scale == 0.0 {
            return Self {
                n,
                mean: center,
                m2: 0.0,
                m3: 0.0,
                m4: 0.0,
                scale: 0.0,
                z2: 0.0,
                z3: 0.0,
                z4: 0.0,
            };
        }

        let (mut s2, mut s3, mut s4) = (0.0, 0.0, 0.0);
        for &x in sample {
            let z = (x - center) / scale;
            let z2 = z * z;
            s2 += z2;
            s3 += z2 * z;
            s4 += z2 * z2;
        }
        let n_f = n as f64;
        let (z2, z3, z4) = (s2 / n_f, s3 / n_f, s4 / n_f);
        Self {
            n,
            mean: center,
            m2: z2 * scale * scale,
            m3: z3 * scale * scale * scale,
            m4: z4 * scale * scale * scale * scale,
            scale,
            z2,
            z3,
            z4,
        }
    }

    /// Population standard deviation, `sqrt(m2)`
    pub fn std_dev(&self) -> f64 {
        self.scale * self.z2.sqrt()
    }

    // Rounding in the mean leaves a residual spread for constant samples
    fn degenerate(&self) -> bool {
        let tolerance = 8.0 * f64::EPSILON * self.mean.abs().max(f64::MIN_POSITIVE);
        self.scale <= tolerance
    }

    /// Skewness under the requested bias convention
    pub fn skewness(&self, bias: MomentBias) -> f64 {
        if self.degenerate() {
            return 0.0;
        }
        let g1 = self.z3 / self.z2.powf(1.5);
        match bias {
            MomentBias::Population => g1,
            MomentBias::Adjusted => {
                if self.n < 3 {
                    return 0.0;
                }
                let n = self.n as f64;
                g1 * (n * (n - 1.0)).sqrt() / (n - 2.0)
            }
        }
    }

    /// Excess kurtosis under the requested bias convention
    pub fn excess_kurtosis(&self, bias: MomentBias) -> f64 {
        if self.degenerate() {
            return 0.0;
        }
        let g2 = self.z4 / (self.z2 * self.z2) - 3.0;
        match bias {
            MomentBias::Population => g2,
            MomentBias::Adjusted => {
                if self.n < 4 {
                    return 0.0;
                }
                let n = self.n as f64;
                ((n + 1.0) * g2 + 6.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0))
            }
        }
    }
}

/// Bias-adjusted sample skewness
pub fn skewness(sample: &[f64]) -> f64 {
    CentralMoments::from_sample(sample).skewness(MomentBias::Adjusted)
}

/// Bias-adjusted sample excess kurtosis
pub fn excess_kurtosis(sample: &[f64]) -> f64 {
    CentralMoments::from_sample(sample).excess_kurtosis(MomentBias::Adjusted)
}
