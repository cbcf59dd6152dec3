//! Validated numeric samples
//!
//! Every statistic in the workspace starts from a [`Sample`]: a borrowed view
//! over finite `f64` values that has already been checked for size.

use crate::utils::sorted;
use crate::{Error, Result};
use num_traits::ToPrimitive;

/// A borrowed, validated sample of finite real numbers
///
/// The underlying slice is never modified; operations that need order
/// statistics work on a sorted copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<'a> {
    values: &'a [f64],
}

impl<'a> Sample<'a> {
    /// Validate a non-empty sample
    ///
    /// Fails with [`Error::EmptySample`] for zero-length input and
    /// [`Error::InvalidInput`] when any value is NaN or infinite.
    pub fn new(values: &'a [f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptySample);
        }
        Self::checked(values)
    }

    /// Validate a sample that must hold at least `min_len` observations
    ///
    /// Shorter input (including empty input) fails with
    /// [`Error::InsufficientSample`].
    pub fn with_min_len(values: &'a [f64], min_len: usize) -> Result<Self> {
        if values.len() < min_len.max(1) {
            return Err(Error::InsufficientSample {
                expected: min_len.max(1),
                actual: values.len(),
            });
        }
        Self::checked(values)
    }

    fn checked(values: &'a [f64]) -> Result<Self> {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(Error::non_finite("sample", index));
        }
        Ok(Self { values })
    }

    /// The observations in their original order
    pub fn values(&self) -> &'a [f64] {
        self.values
    }

    /// Number of observations (always at least one)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample size as a float
    pub fn n(&self) -> f64 {
        self.values.len() as f64
    }

    /// A sorted copy of the observations
    pub fn sorted(&self) -> Vec<f64> {
        sorted(self.values)
    }

    /// Smallest observation
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest observation
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Convert any primitive numeric slice into `f64` values
///
/// Integer samples coming out of a parser or a preset dataset can be fed to
/// the estimators after this conversion.
///
/// # Examples
///
/// ```rust
/// use statease_core::to_f64_vec;
///
/// let values = to_f64_vec(&[1u32, 2, 3]).unwrap();
/// assert_eq!(values, vec![1.0, 2.0, 3.0]);
/// ```
pub fn to_f64_vec<T: ToPrimitive>(values: &[T]) -> Result<Vec<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(index, v)| match v.to_f64() {
            Some(x) if x.is_finite() => Ok(x),
            _ => Err(Error::non_finite("input", index)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample_rejected() {
        assert_eq!(Sample::new(&[]), Err(Error::EmptySample));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = Sample::new(&[1.0, f64::NAN, 3.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(Sample::new(&[f64::INFINITY]).is_err());
    }

    #[test]
    fn test_min_len() {
        let err = Sample::with_min_len(&[1.0], 2).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientSample {
                expected: 2,
                actual: 1
            }
        );

        let err = Sample::with_min_len(&[], 2).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientSample {
                expected: 2,
                actual: 0
            }
        );

        assert!(Sample::with_min_len(&[1.0, 2.0], 2).is_ok());
    }

    #[test]
    fn test_accessors_do_not_reorder() {
        let data = [3.0, 1.0, 2.0];
        let sample = Sample::new(&data).unwrap();
        assert_eq!(sample.values(), &[3.0, 1.0, 2.0]);
        assert_eq!(sample.sorted(), vec![1.0, 2.0, 3.0]);
        assert_eq!(sample.min(), 1.0);
        assert_eq!(sample.max(), 3.0);
        assert_eq!(sample.len(), 3);
    }

    #[test]
    fn test_to_f64_vec() {
        assert_eq!(to_f64_vec(&[1i64, -2, 3]).unwrap(), vec![1.0, -2.0, 3.0]);
        assert!(to_f64_vec(&[1.0f32, f32::NAN]).is_err());
    }
}
