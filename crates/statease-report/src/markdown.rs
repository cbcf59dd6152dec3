//! Markdown rendering of result records
//!
//! Every renderer here is a pure formatter: it reads the numbers already held
//! by a record and never recomputes a statistic.

use statease_confidence::{
    EstimateDetails, EstimateKind, IntervalEstimate, ThresholdSource, DEFAULT_MIN_PROPORTION_SAMPLE,
};
use statease_correlation::CorrelationResult;
use statease_descriptive::{DescriptiveReport, Interpretation};
use statease_distribution::{BoxplotSpec, HistogramSpec};
use std::fmt;

/// Notice printed when the proportion threshold fell back to the median
pub const MEDIAN_THRESHOLD_NOTICE: &str =
    "Note: no threshold was supplied, so the sample median was used as the threshold.";

/// Notice printed when a proportion interval was computed below the usual minimum
pub fn reduced_validity_notice() -> String {
    format!(
        "Note: the sample is smaller than {DEFAULT_MIN_PROPORTION_SAMPLE} observations; \
         the normal approximation may be inaccurate."
    )
}

/// `y = 1.5000x - 2.0000`
fn trend_line(slope: f64, intercept: f64) -> String {
    let sign = if intercept < 0.0 { '-' } else { '+' };
    format!("y = {slope:.4}x {sign} {:.4}", intercept.abs())
}

struct DescriptiveMarkdown<'a> {
    report: &'a DescriptiveReport,
    interpretation: &'a Interpretation,
}

impl fmt::Display for DescriptiveMarkdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.report;
        writeln!(f, "### Descriptive statistics")?;
        writeln!(f)?;
        writeln!(f, "| Statistic | Value |")?;
        writeln!(f, "|-----------|-------|")?;
        writeln!(f, "| Count | {} |", r.count)?;
        writeln!(f, "| Mean | {:.4} |", r.mean)?;
        writeln!(f, "| Median | {:.4} |", r.median)?;
        writeln!(f, "| Standard deviation | {:.4} |", r.std_dev)?;
        writeln!(f, "| Minimum | {:.4} |", r.min)?;
        writeln!(f, "| Maximum | {:.4} |", r.max)?;
        writeln!(f, "| First quartile (Q1) | {:.4} |", r.q1)?;
        writeln!(f, "| Third quartile (Q3) | {:.4} |", r.q3)?;
        writeln!(f, "| Interquartile range (IQR) | {:.4} |", r.iqr)?;
        writeln!(f, "| Skewness | {:.4} |", r.skewness)?;
        writeln!(f, "| Excess kurtosis | {:.4} |", r.kurtosis)?;
        writeln!(f, "| Outliers | {} |", r.outlier_count)?;
        writeln!(f)?;
        writeln!(f, "### Interpretation")?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Central tendency**: comparing the mean ({:.2}) with the median ({:.2}) \
             hints at the symmetry of the data",
            r.mean, r.median
        )?;
        writeln!(
            f,
            "- **Dispersion**: the standard deviation is {:.2}, the typical spread around the mean",
            r.std_dev
        )?;
        writeln!(f, "- **Shape**: {}", self.interpretation.shape_sentence())?;
        writeln!(f, "- **Outliers**: {}", self.interpretation.outlier_sentence())
    }
}

struct IntervalMarkdown<'a>(&'a IntervalEstimate);

impl fmt::Display for IntervalMarkdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = self.0;
        if e.used_default_threshold() {
            writeln!(f, "{MEDIAN_THRESHOLD_NOTICE}")?;
            writeln!(f)?;
        }
        if e.has_reduced_validity() {
            writeln!(f, "{}", reduced_validity_notice())?;
            writeln!(f)?;
        }

        let title = match e.kind {
            EstimateKind::Mean => "Mean",
            EstimateKind::Proportion => "Proportion",
        };
        writeln!(f, "### {title} estimate")?;
        writeln!(f)?;
        writeln!(f, "| Quantity | Value |")?;
        writeln!(f, "|----------|-------|")?;
        writeln!(f, "| Sample size | {} |", e.sample_size)?;
        writeln!(f, "| Point estimate | {:.4} |", e.point_estimate)?;
        writeln!(f, "| Standard error | {:.4} |", e.standard_error)?;
        writeln!(f, "| Confidence level | {:.1}% |", e.confidence_level * 100.0)?;
        writeln!(f, "| Critical value | {:.4} |", e.critical_value)?;
        writeln!(f, "| Margin of error | {:.4} |", e.margin_of_error)?;
        writeln!(f, "| Lower bound | {:.4} |", e.lower_bound)?;
        writeln!(f, "| Upper bound | {:.4} |", e.upper_bound)?;

        match e.details {
            EstimateDetails::Mean {
                std_dev,
                degrees_of_freedom,
            } => {
                writeln!(f, "| Standard deviation | {std_dev:.4} |")?;
                writeln!(f, "| Degrees of freedom | {degrees_of_freedom} |")?;
            }
            EstimateDetails::Proportion {
                successes,
                threshold,
                threshold_source,
                ..
            } => {
                let source = match threshold_source {
                    ThresholdSource::Supplied => "supplied",
                    ThresholdSource::MedianDefault => "sample median",
                };
                writeln!(f, "| Threshold | {threshold:.4} ({source}) |")?;
                writeln!(f, "| Observations at or above threshold | {successes} |")?;
            }
        }
        writeln!(f)?;
        writeln!(
            f,
            "We are {:.1}% confident that the population {} lies between {:.4} and {:.4}.",
            e.confidence_level * 100.0,
            e.kind,
            e.lower_bound,
            e.upper_bound
        )
    }
}

struct CorrelationMarkdown<'a>(&'a CorrelationResult);

impl fmt::Display for CorrelationMarkdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        writeln!(f, "### {} correlation", r.method)?;
        writeln!(f)?;
        writeln!(f, "| Quantity | Value |")?;
        writeln!(f, "|----------|-------|")?;
        writeln!(f, "| Pairs | {} |", r.sample_size)?;
        writeln!(f, "| Coefficient | {:.4} |", r.coefficient)?;
        match r.p_value {
            Some(p) => writeln!(f, "| p-value | {p:.4} |")?,
            None => writeln!(f, "| p-value | n/a |")?,
        }
        writeln!(f, "| Slope | {:.4} |", r.regression_slope)?;
        writeln!(f, "| Intercept | {:.4} |", r.regression_intercept)?;
        writeln!(f, "| R² | {:.4} |", r.r_squared)?;
        writeln!(f)?;
        writeln!(
            f,
            "Trend line (least squares): {}",
            trend_line(r.regression_slope, r.regression_intercept)
        )
    }
}

struct HistogramMarkdown<'a>(&'a HistogramSpec);

impl fmt::Display for HistogramMarkdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = self.0;
        writeln!(f, "### Histogram ({} bins)", spec.bin_count)?;
        writeln!(f)?;
        writeln!(f, "| Bin | Count | Density |")?;
        writeln!(f, "|-----|-------|---------|")?;
        for bin in &spec.bins {
            writeln!(
                f,
                "| [{:.2}, {:.2}) | {} | {:.4} |",
                bin.left, bin.right, bin.count, bin.density
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Mean {:.2}, median {:.2}.", spec.mean, spec.median)?;
        if let Some(peak) = spec.density_curve.as_ref().and_then(|c| c.peak()) {
            writeln!(f, "Density peaks near {:.2}.", peak.x)?;
        }
        Ok(())
    }
}

struct BoxplotMarkdown<'a>(&'a BoxplotSpec);

impl fmt::Display for BoxplotMarkdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = self.0;
        writeln!(f, "### Boxplot")?;
        writeln!(f)?;
        writeln!(f, "| Element | Value |")?;
        writeln!(f, "|---------|-------|")?;
        writeln!(f, "| Lower whisker | {:.4} |", spec.lower_whisker)?;
        writeln!(f, "| Q1 | {:.4} |", spec.q1)?;
        writeln!(f, "| Median | {:.4} |", spec.median)?;
        writeln!(f, "| Q3 | {:.4} |", spec.q3)?;
        writeln!(f, "| Upper whisker | {:.4} |", spec.upper_whisker)?;
        writeln!(f, "| Fliers | {} |", spec.fliers.len())
    }
}

/// Statistics table followed by the narrative interpretation
pub fn descriptive_markdown(report: &DescriptiveReport, interpretation: &Interpretation) -> String {
    DescriptiveMarkdown {
        report,
        interpretation,
    }
    .to_string()
}

/// Interval table, preceded by any threshold or validity notice
pub fn interval_markdown(estimate: &IntervalEstimate) -> String {
    IntervalMarkdown(estimate).to_string()
}

/// Coefficient, significance and trend line
pub fn correlation_markdown(result: &CorrelationResult) -> String {
    CorrelationMarkdown(result).to_string()
}

/// Bin table of a histogram layout
pub fn histogram_markdown(spec: &HistogramSpec) -> String {
    HistogramMarkdown(spec).to_string()
}

pub fn boxplot_markdown(spec: &BoxplotSpec) -> String {
    BoxplotMarkdown(spec).to_string()
}
