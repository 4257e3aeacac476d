//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use linkrank_core::DanglingPolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(
    author,
    version,
    about = "Rank the pages of an HTML corpus with PageRank"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate PageRank for every page of a corpus
    Rank(RankArgs),

    /// Show the link graph crawled from a corpus
    Links(LinksArgs),

    /// Show the effective configuration
    Config(ConfigArgs),
}

/// Options shared by every command that crawls a corpus
#[derive(Args)]
pub struct CorpusArgs {
    /// Directory containing the pages
    pub corpus: PathBuf,

    /// Glob pattern selecting pages
    #[arg(long)]
    pub pattern: Option<String>,

    /// Crawl subdirectories too
    #[arg(short, long)]
    pub recursive: bool,
}

#[derive(Args)]
pub struct RankArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Estimators to run
    #[arg(long, value_enum, default_value = "both")]
    pub method: Method,

    /// Damping factor in (0,1)
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Number of samples for the sampling estimator
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Seed for the sampling estimator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Convergence threshold for the iterative estimator
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Stop the iterative estimator after this many rounds
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Treatment of pages without links in the iterative estimator
    #[arg(long, value_enum)]
    pub dangling: Option<DanglingArg>,
}

#[derive(Args)]
pub struct LinksArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Print the config file location instead of its contents
    #[arg(long)]
    pub path: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    Both,
    Sample,
    Iterate,
}

impl Method {
    pub fn sample(self) -> bool {
        matches!(self, Method::Both | Method::Sample)
    }

    pub fn iterate(self) -> bool {
        matches!(self, Method::Both | Method::Iterate)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DanglingArg {
    Drop,
    Uniform,
}

impl From<DanglingArg> for DanglingPolicy {
    fn from(arg: DanglingArg) -> Self {
        match arg {
            DanglingArg::Drop => DanglingPolicy::Drop,
            DanglingArg::Uniform => DanglingPolicy::Uniform,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
    Md,
}
