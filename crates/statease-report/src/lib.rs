//! Presentation helpers for statease results
//!
//! Renders the result records of the statistics crates as Markdown tables or
//! JSON, and generates the seeded preset datasets used by the demo.
//!
//! ```rust
//! use statease_descriptive::SampleStats;
//! use statease_report::{descriptive_markdown, Preset, DEFAULT_SEED};
//!
//! let data = Preset::Normal.generate(DEFAULT_SEED).unwrap();
//! let stats = SampleStats::new();
//! let report = stats.summarize(&data).unwrap();
//! let text = descriptive_markdown(&report, &stats.interpret(&report));
//! assert!(text.contains("| Count | 100 |"));
//! ```

mod json;
mod markdown;
mod presets;

pub use json::to_json;
pub use markdown::{
    boxplot_markdown, correlation_markdown, descriptive_markdown, histogram_markdown,
    interval_markdown, reduced_validity_notice, MEDIAN_THRESHOLD_NOTICE,
};
pub use presets::{Preset, DEFAULT_SEED};

pub use statease_core::{Error, Result};
