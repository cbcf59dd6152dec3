//! Prints every report for the three preset datasets
//!
//! Run with `RUST_LOG=debug` to see the library's tracing output.

use anyhow::{Context, Result};
use statease_confidence::IntervalEstimator;
use statease_correlation::{CorrelationAnalyzer, CorrelationMethod};
use statease_descriptive::SampleStats;
use statease_distribution::{DistributionConfig, DistributionSummary};
use statease_report::{
    boxplot_markdown, correlation_markdown, descriptive_markdown, histogram_markdown,
    interval_markdown, to_json, Preset, DEFAULT_SEED,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let stats = SampleStats::new();
    let layouts =
        DistributionSummary::with_config(DistributionConfig::default().with_seed(DEFAULT_SEED))?;
    let estimator = IntervalEstimator::new();

    for preset in Preset::ALL {
        let data = preset
            .generate(DEFAULT_SEED)
            .with_context(|| format!("generating the {preset}"))?;
        info!(%preset, n = data.len(), "Analyzing preset");

        println!("## {preset}\n");
        let report = stats.summarize(&data)?;
        println!("{}", descriptive_markdown(&report, &stats.interpret(&report)));
        println!("{}", histogram_markdown(&layouts.histogram_spec(&data)?));
        println!("{}", boxplot_markdown(&layouts.boxplot_spec(&data)?));

        for level in [0.90, 0.95, 0.99] {
            let ci = estimator.estimate_mean(&data, level)?;
            println!("{}", interval_markdown(&ci));
        }
        let share = estimator
            .estimate_proportion(&data, None, 0.95)
            .context("proportion above the median")?;
        println!("{}", interval_markdown(&share));
    }

    // Paired demo: the normal preset against a noisy quadratic of itself
    let x = Preset::Normal.generate(DEFAULT_SEED)?;
    let noise = Preset::Normal.generate(DEFAULT_SEED + 1)?;
    let y: Vec<f64> = x
        .iter()
        .zip(&noise)
        .map(|(xi, ni)| 0.02 * xi * xi + (ni - 50.0))
        .collect();

    let analyzer = CorrelationAnalyzer::new();
    for method in [CorrelationMethod::Pearson, CorrelationMethod::Spearman] {
        let result = analyzer.analyze(&x, &y, method)?;
        println!("{}", correlation_markdown(&result));
        println!("```json\n{}\n```\n", to_json(&result)?);
    }

    Ok(())
}
