//! Markdown output formatter

use super::RankReport;
use linkrank_core::{Graph, RankEstimate};

pub fn format_report(report: &RankReport) -> String {
    let mut output = String::from("# PageRank Results\n\n");

    if let Some(ref sampled) = report.sampled {
        output.push_str(&format!("## Sampling (n = {})\n\n", sampled.samples));
        push_table(&mut output, &sampled.estimate);
    }

    if let Some(ref iterated) = report.iterated {
        output.push_str(&format!(
            "## Iteration ({} rounds{})\n\n",
            iterated.iterations,
            if iterated.converged { "" } else { ", not converged" }
        ));
        push_table(&mut output, &iterated.estimate);
    }

    output
}

fn push_table(output: &mut String, estimate: &RankEstimate) {
    output.push_str("| Page | Rank |\n|------|------|\n");
    for (page, rank) in estimate.iter() {
        output.push_str(&format!("| `{}` | {:.4} |\n", page, rank));
    }
    output.push('\n');
}

pub fn format_graph(graph: &Graph) -> String {
    let mut output = String::from("# Link Graph\n\n| Page | Links | Targets |\n|------|-------|---------|\n");

    for (page, targets) in graph.iter() {
        let targets: Vec<String> = targets.iter().map(|t| format!("`{}`", t)).collect();
        output.push_str(&format!(
            "| `{}` | {} | {} |\n",
            page,
            targets.len(),
            targets.join(", ")
        ));
    }

    output
}
