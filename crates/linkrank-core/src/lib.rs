//! Linkrank Core Library
//!
//! Estimates the relative importance of pages in a directed link graph with PageRank.
//!
//! # Features
//! - Random-surfer transition model
//! - Monte-Carlo sampling estimator with an explicit, seedable random source
//! - Deterministic fixed-point iteration estimator
//! - Corpus crawler that builds the link graph from a directory of HTML pages

pub mod config;
pub mod corpus;
pub mod error;
pub mod graph;
pub mod rank;

pub use config::RankConfig;
pub use corpus::{crawl, extract_links, ScanOptions};
pub use error::{LinkRankError, Error, Result};
pub use graph::Graph;
pub use rank::{
    iterate_pagerank, iterate_pagerank_checked, iterate_pagerank_run, sample_pagerank,
    sample_pagerank_run, sample_pagerank_seeded, transition_model, DanglingPolicy, Distribution,
    IterationConfig, IterationRun, RankEstimate, SamplingConfig, SamplingRun,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "linkrank";
