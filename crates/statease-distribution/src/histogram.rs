//! Equal-width histogram binning

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
    /// Density (count / (total_count * bin_width))
    pub density: f64,
}

impl HistogramBin {
    /// Create a new histogram bin
    pub fn new(left: f64, right: f64, count: usize, total_count: usize) -> Self {
        let width = right - left;
        let density = if width > 0.0 && total_count > 0 {
            count as f64 / (total_count as f64 * width)
        } else {
            0.0
        };

        Self {
            left,
            right,
            count,
            density,
        }
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, density={:.3}",
            self.left, self.right, self.count, self.density
        )
    }
}

/// Sturges' rule: `ceil(log2(n) + 1)`, at least one bin
///
/// # Examples
///
/// ```rust
/// use statease_distribution::sturges_bins;
///
/// assert_eq!(sturges_bins(1), 1);
/// assert_eq!(sturges_bins(100), 8);
/// ```
pub fn sturges_bins(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    ((n as f64).log2() + 1.0).ceil().max(1.0) as usize
}

/// Bin pre-sorted data into `num_bins` equal-width bins spanning `[min, max]`
///
/// The last bin is closed on the right so the maximum is counted. When every
/// value is equal the span is widened to `[v - 0.5, v + 0.5]`.
pub fn equal_width_bins(sorted_sample: &[f64], num_bins: usize) -> Vec<HistogramBin> {
    if sorted_sample.is_empty() {
        return Vec::new();
    }
    let num_bins = num_bins.max(1);
    let total = sorted_sample.len();

    let (mut min, mut max) = (sorted_sample[0], sorted_sample[total - 1]);
    if max - min <= 0.0 {
        min -= 0.5;
        max += 0.5;
    }

    let width = (max - min) / num_bins as f64;
    let mut bins: Vec<HistogramBin> = (0..num_bins)
        .map(|i| {
            let left = min + i as f64 * width;
            let right = if i == num_bins - 1 {
                max // Ensure last bin includes max
            } else {
                min + (i + 1) as f64 * width
            };
            HistogramBin::new(left, right, 0, total)
        })
        .collect();

    // Single pass through sorted data
    let mut current_bin = 0;
    for &value in sorted_sample {
        while current_bin < num_bins - 1 && value >= bins[current_bin].right {
            current_bin += 1;
        }
        bins[current_bin].count += 1;
    }

    for bin in &mut bins {
        *bin = HistogramBin::new(bin.left, bin.right, bin.count, total);
    }
    bins
}
