//! Output formatters

pub mod csv;
pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use anyhow::Result;
use linkrank_core::{Graph, IterationRun, RankEstimate};

/// Sampling estimator result with the settings that produced it
pub struct SampledRanks {
    pub samples: usize,
    pub seed: Option<u64>,
    pub estimate: RankEstimate,
}

/// Everything the `rank` command reports
pub struct RankReport {
    pub sampled: Option<SampledRanks>,
    pub iterated: Option<IterationRun>,
}

/// Format rank estimates
pub fn format_report(report: &RankReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_report(report),
        OutputFormat::Csv => csv::format_report(report),
        OutputFormat::Md => Ok(markdown::format_report(report)),
        OutputFormat::Cli => Ok(terminal::format_report(report)),
    }
}

/// Format a crawled link graph
pub fn format_graph(graph: &Graph, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_graph(graph),
        OutputFormat::Csv => csv::format_graph(graph),
        OutputFormat::Md => Ok(markdown::format_graph(graph)),
        OutputFormat::Cli => Ok(terminal::format_graph(graph)),
    }
}
