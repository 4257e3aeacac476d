//! JSON output formatter

use super::RankReport;
use anyhow::Result;
use linkrank_core::Graph;

pub fn format_report(report: &RankReport) -> Result<String> {
    let mut output = serde_json::Map::new();

    if let Some(ref sampled) = report.sampled {
        output.insert(
            "sampling".to_string(),
            serde_json::json!({
                "samples": sampled.samples,
                "seed": sampled.seed,
                "ranks": sampled.estimate,
            }),
        );
    }

    if let Some(ref iterated) = report.iterated {
        output.insert(
            "iteration".to_string(),
            serde_json::json!({
                "iterations": iterated.iterations,
                "converged": iterated.converged,
                "max_delta": iterated.max_delta,
                "ranks": iterated.estimate,
            }),
        );
    }

    Ok(serde_json::to_string_pretty(&output)? + "\n")
}

pub fn format_graph(graph: &Graph) -> Result<String> {
    Ok(serde_json::to_string_pretty(graph)? + "\n")
}
