//! Terminal output formatter

use super::RankReport;
use linkrank_core::{Graph, RankEstimate};

pub fn format_report(report: &RankReport) -> String {
    let mut output = String::new();

    if let Some(ref sampled) = report.sampled {
        output.push_str(&format!(
            "PageRank Results from Sampling (n = {})\n",
            sampled.samples
        ));
        push_ranks(&mut output, &sampled.estimate);
    }

    if let Some(ref iterated) = report.iterated {
        output.push_str("PageRank Results from Iteration\n");
        push_ranks(&mut output, &iterated.estimate);
        if !iterated.converged {
            output.push_str(&format!(
                "  (stopped after {} rounds without converging)\n",
                iterated.iterations
            ));
        }
    }

    output
}

fn push_ranks(output: &mut String, estimate: &RankEstimate) {
    for (page, rank) in estimate.iter() {
        output.push_str(&format!("  {}: {:.4}\n", page, rank));
    }
}

pub fn format_graph(graph: &Graph) -> String {
    let mut output = String::new();

    for (page, targets) in graph.iter() {
        let targets: Vec<&str> = targets.iter().map(String::as_str).collect();
        if targets.is_empty() {
            output.push_str(&format!("{} (0)\n", page));
        } else {
            output.push_str(&format!(
                "{} ({}) -> {}\n",
                page,
                targets.len(),
                targets.join(", ")
            ));
        }
    }

    output.push_str(&format!(
        "\n{} pages, {} links\n",
        graph.node_count(),
        graph.edge_count()
    ));
    output
}
