//! CSV output formatter

use super::RankReport;
use anyhow::Result;
use linkrank_core::{Graph, RankEstimate};

pub fn format_report(report: &RankReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["method", "page", "rank"])?;

    if let Some(ref sampled) = report.sampled {
        write_ranks(&mut writer, "sampling", &sampled.estimate)?;
    }
    if let Some(ref iterated) = report.iterated {
        write_ranks(&mut writer, "iteration", &iterated.estimate)?;
    }

    finish(writer)
}

fn write_ranks(
    writer: &mut csv::Writer<Vec<u8>>,
    method: &str,
    estimate: &RankEstimate,
) -> Result<()> {
    for (page, rank) in estimate.iter() {
        let rank = rank.to_string();
        writer.write_record([method, page, rank.as_str()])?;
    }
    Ok(())
}

pub fn format_graph(graph: &Graph) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["source", "target"])?;

    for (page, targets) in graph.iter() {
        for target in targets {
            writer.write_record([page, target.as_str()])?;
        }
    }

    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}
