//! CLI command handlers

pub mod config;
pub mod links;
pub mod rank;

use crate::app::CorpusArgs;
use anyhow::Result;
use linkrank_core::{crawl, Graph, RankConfig};

/// Crawl the corpus named on the command line, with flag overrides applied to `config`
fn crawl_corpus(args: &CorpusArgs, config: &mut RankConfig) -> Result<Graph> {
    if let Some(ref pattern) = args.pattern {
        config.pattern = pattern.clone();
    }
    if args.recursive {
        config.recursive = true;
    }
    config.validate()?;

    Ok(crawl(&args.corpus, &config.scan_options())?)
}
