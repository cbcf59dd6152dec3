//! Seeded demonstration datasets

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Exp, Normal};
use serde::{Deserialize, Serialize};
use statease_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Seed used when a caller does not pick one
pub const DEFAULT_SEED: u64 = 42;

/// The three sample shapes offered to first-time users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// 100 draws from Normal(50, 10)
    Normal,
    /// 100 draws from an exponential with scale 10
    Skewed,
    /// 50 draws from Normal(30, 5) followed by 50 from Normal(70, 5)
    Bimodal,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Normal, Preset::Skewed, Preset::Bimodal];

    /// Draw the dataset from a ChaCha stream seeded with `seed`
    pub fn generate(&self, seed: u64) -> Result<Vec<f64>> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        match self {
            Preset::Normal => Ok(draw(&mut rng, normal(50.0, 10.0)?, 100)),
            Preset::Skewed => {
                let exp = Exp::new(0.1).map_err(|e| {
                    Error::Computation(format!("Failed to create exponential distribution: {}", e))
                })?;
                Ok(draw(&mut rng, exp, 100))
            }
            Preset::Bimodal => {
                let mut data = draw(&mut rng, normal(30.0, 5.0)?, 50);
                data.extend(draw(&mut rng, normal(70.0, 5.0)?, 50));
                Ok(data)
            }
        }
    }
}

fn normal(mean: f64, std_dev: f64) -> Result<Normal<f64>> {
    Normal::new(mean, std_dev)
        .map_err(|e| Error::Computation(format!("Failed to create normal distribution: {}", e)))
}

fn draw<D: Distribution<f64>>(rng: &mut ChaCha8Rng, dist: D, n: usize) -> Vec<f64> {
    dist.sample_iter(rng).take(n).collect()
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "skewed" | "exponential" => Ok(Self::Skewed),
            "bimodal" => Ok(Self::Bimodal),
            other => Err(Error::InvalidParameter(format!(
                "Unknown preset {other:?}; expected normal, skewed or bimodal"
            ))),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal distribution"),
            Self::Skewed => write!(f, "skewed distribution"),
            Self::Bimodal => write!(f, "bimodal distribution"),
        }
    }
}
