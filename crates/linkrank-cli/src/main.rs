//! Linkrank CLI
//!
//! Rank the pages of an HTML corpus with sampled and iterated PageRank.

use clap::Parser;
use linkrank_core::error::exit_codes;
use linkrank_core::LinkRankError;

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing. RUST_LOG wins; otherwise WARN, or DEBUG with --verbose.
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.as_str()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let result = match cli.command {
        Commands::Rank(args) => commands::rank::run(args, cli.format).await,
        Commands::Links(args) => commands::links::run(args, cli.format).await,
        Commands::Config(args) => commands::config::run(args, cli.format).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<LinkRankError>()
            .map(LinkRankError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}
