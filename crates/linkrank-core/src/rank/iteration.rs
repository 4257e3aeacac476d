//! Fixed-point PageRank iteration

use super::{validate_damping, RankEstimate, DEFAULT_DAMPING, DEFAULT_THRESHOLD};
use crate::error::{LinkRankError, Result};
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// How the rank held by pages without links is treated during iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DanglingPolicy {
    /// Pages without links pass rank to no one; the estimate may sum to less than 1.
    #[default]
    Drop,
    /// Pages without links spread their rank evenly over every page.
    Uniform,
}

impl DanglingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DanglingPolicy::Drop => "drop",
            DanglingPolicy::Uniform => "uniform",
        }
    }
}

impl fmt::Display for DanglingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DanglingPolicy {
    type Err = LinkRankError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "drop" => Ok(DanglingPolicy::Drop),
            "uniform" => Ok(DanglingPolicy::Uniform),
            other => Err(LinkRankError::InvalidParameter(format!(
                "unknown dangling policy: {}",
                other
            ))),
        }
    }
}

/// Settings for the iterative estimator.
#[derive(Debug, Clone, Copy)]
pub struct IterationConfig {
    pub damping: f64,
    /// A page is stable once its rank moves by less than this in one round.
    pub threshold: f64,
    /// Upper bound on rounds. `None` iterates until every page is stable.
    pub max_iterations: Option<usize>,
    pub dangling: DanglingPolicy,
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            threshold: DEFAULT_THRESHOLD,
            max_iterations: None,
            dangling: DanglingPolicy::Drop,
        }
    }
}

impl IterationConfig {
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(LinkRankError::InvalidParameter(
                "threshold must be finite and > 0".to_string(),
            ));
        }
        if self.max_iterations == Some(0) {
            return Err(LinkRankError::InvalidParameter(
                "max_iterations must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of the fixed-point iteration.
#[derive(Debug, Clone)]
pub struct IterationRun {
    pub estimate: RankEstimate,
    /// Rounds performed.
    pub iterations: usize,
    /// Largest per-page change in the final round.
    pub max_delta: f64,
    /// True when every page was stable in the final round.
    pub converged: bool,
}

/// Estimate PageRank by iterating the PageRank recurrence until every page is stable.
///
/// Uses the default threshold of 0.001, no round limit and [`DanglingPolicy::Drop`].
pub fn iterate_pagerank(graph: &Graph, damping_factor: f64) -> Result<RankEstimate> {
    let config = IterationConfig {
        damping: damping_factor,
        ..IterationConfig::default()
    };
    Ok(iterate_pagerank_run(graph, &config)?.estimate)
}

/// Like [`iterate_pagerank_run`], but a run cut short by `max_iterations` is an error.
pub fn iterate_pagerank_checked(graph: &Graph, config: &IterationConfig) -> Result<RankEstimate> {
    let run = iterate_pagerank_run(graph, config)?;
    if !run.converged {
        return Err(LinkRankError::NotConverged {
            iterations: run.iterations,
            max_delta: run.max_delta,
        });
    }
    Ok(run.estimate)
}

/// Fixed-point iteration with convergence reporting.
///
/// Each round computes, for every page,
/// `(1 - d) / N + d * Σ rank[p] / out_degree(p)` over the pages `p` linking to it.
/// All reads come from the previous round's vector; the new vector replaces it once the round
/// is complete. The run stops when every page moved by less than `threshold` in the same round.
pub fn iterate_pagerank_run(graph: &Graph, config: &IterationConfig) -> Result<IterationRun> {
    config.validate()?;

    let pages: Vec<&str> = graph.pages().collect();
    let n = pages.len();
    let n_f64 = n as f64;
    let out_degrees: Vec<usize> = graph.iter().map(|(_, targets)| targets.len()).collect();
    let incoming = build_incoming_links(graph, &pages);

    let teleport = (1.0 - config.damping) / n_f64;
    let mut ranks = vec![1.0 / n_f64; n];
    let mut iterations = 0usize;
    let mut max_delta = f64::INFINITY;
    let mut converged = false;

    loop {
        if config.max_iterations.is_some_and(|max| iterations >= max) {
            break;
        }
        iterations += 1;

        let dangling_share = match config.dangling {
            DanglingPolicy::Drop => 0.0,
            DanglingPolicy::Uniform => {
                let dangling_sum: f64 = out_degrees
                    .iter()
                    .zip(ranks.iter())
                    .filter(|(&deg, _)| deg == 0)
                    .map(|(_, &rank)| rank)
                    .sum();
                config.damping * dangling_sum / n_f64
            }
        };

        let next: Vec<f64> = incoming
            .iter()
            .map(|sources| {
                let link_sum: f64 = sources
                    .iter()
                    .map(|&p| ranks[p] / out_degrees[p] as f64)
                    .sum();
                teleport + config.damping * link_sum + dangling_share
            })
            .collect();

        let mut stable = true;
        max_delta = 0.0;
        for (new, old) in next.iter().zip(ranks.iter()) {
            let delta = (new - old).abs();
            max_delta = max_delta.max(delta);
            if delta >= config.threshold {
                stable = false;
            }
        }

        ranks = next;
        if stable {
            converged = true;
            break;
        }
    }

    tracing::debug!(
        "Iterative estimator finished after {} rounds (converged: {}, max delta {:.6})",
        iterations,
        converged,
        max_delta
    );

    let estimate = RankEstimate::from_ranks(
        pages
            .iter()
            .zip(ranks)
            .map(|(page, rank)| (page.to_string(), rank))
            .collect(),
    );

    Ok(IterationRun {
        estimate,
        iterations,
        max_delta,
        converged,
    })
}

/// For every page (by index), the indices of the pages linking to it.
fn build_incoming_links(graph: &Graph, pages: &[&str]) -> Vec<Vec<usize>> {
    let index: HashMap<&str, usize> = pages.iter().enumerate().map(|(i, p)| (*p, i)).collect();
    let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); pages.len()];

    for (source, (_, targets)) in graph.iter().enumerate() {
        for target in targets {
            if let Some(&t) = index.get(target.as_str()) {
                incoming[t].push(source);
            }
        }
    }

    incoming
}
