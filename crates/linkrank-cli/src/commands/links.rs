//! Link graph inspection command

use super::crawl_corpus;
use crate::app::{LinksArgs, OutputFormat};
use crate::output::format_graph;
use anyhow::Result;
use linkrank_core::RankConfig;

pub async fn run(args: LinksArgs, format: OutputFormat) -> Result<()> {
    let mut config = RankConfig::load()?;
    let graph = crawl_corpus(&args.corpus, &mut config)?;
    print!("{}", format_graph(&graph, format)?);
    Ok(())
}
