//! Monte-Carlo random-surfer estimator

use super::{transition_model, validate_damping, RankEstimate, DEFAULT_DAMPING, DEFAULT_SAMPLES};
use crate::error::{LinkRankError, Result};
use crate::graph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Settings for the sampling estimator.
#[derive(Debug, Clone, Copy)]
pub struct SamplingConfig {
    pub damping: f64,
    /// Number of pages visited, including the starting page.
    pub samples: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl SamplingConfig {
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        if self.samples == 0 {
            return Err(LinkRankError::InvalidParameter(
                "samples must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of one random walk.
#[derive(Debug, Clone)]
pub struct SamplingRun {
    pub estimate: RankEstimate,
    /// Visit count per page. Counts sum to the number of samples.
    pub visits: BTreeMap<String, usize>,
    /// Moves made after the starting page was placed.
    pub transitions: usize,
}

/// Estimate PageRank by walking `n` pages of a random surfer.
///
/// The walk starts on a page chosen uniformly at random and then makes exactly `n - 1` moves,
/// each drawn from the transition model of the current page. Every visit adds `1/n` to the
/// visited page's rank, so the ranks sum to 1 up to rounding. There is no convergence check.
pub fn sample_pagerank<R: Rng>(
    graph: &Graph,
    damping_factor: f64,
    n: usize,
    rng: &mut R,
) -> Result<RankEstimate> {
    let config = SamplingConfig {
        damping: damping_factor,
        samples: n,
    };
    Ok(sample_pagerank_run(graph, &config, rng)?.estimate)
}

/// [`sample_pagerank`] driven by a `StdRng` seeded from `seed`.
pub fn sample_pagerank_seeded(
    graph: &Graph,
    damping_factor: f64,
    n: usize,
    seed: u64,
) -> Result<RankEstimate> {
    let mut rng = StdRng::seed_from_u64(seed);
    sample_pagerank(graph, damping_factor, n, &mut rng)
}

/// Random-surfer walk with visit reporting.
pub fn sample_pagerank_run<R: Rng>(
    graph: &Graph,
    config: &SamplingConfig,
    rng: &mut R,
) -> Result<SamplingRun> {
    config.validate()?;

    let weight = 1.0 / config.samples as f64;
    let mut ranks: BTreeMap<String, f64> = graph.pages().map(|p| (p.to_string(), 0.0)).collect();
    let mut visits: BTreeMap<String, usize> =
        graph.pages().map(|p| (p.to_string(), 0)).collect();

    let start = rng.random_range(0..graph.node_count());
    let mut current = graph
        .pages()
        .nth(start)
        .ok_or(LinkRankError::EmptyGraph)?
        .to_string();
    record_visit(&mut ranks, &mut visits, &current, weight);

    let mut distribution = transition_model(graph, &current, config.damping)?;
    let mut transitions = 0usize;

    for _ in 1..config.samples {
        current = distribution.sample(rng).to_string();
        record_visit(&mut ranks, &mut visits, &current, weight);
        distribution = transition_model(graph, &current, config.damping)?;
        transitions += 1;
    }

    tracing::debug!(
        "Sampling estimator visited {} pages over {} transitions",
        graph.node_count(),
        transitions
    );

    Ok(SamplingRun {
        estimate: RankEstimate::from_ranks(ranks),
        visits,
        transitions,
    })
}

fn record_visit(
    ranks: &mut BTreeMap<String, f64>,
    visits: &mut BTreeMap<String, usize>,
    page: &str,
    weight: f64,
) {
    if let Some(rank) = ranks.get_mut(page) {
        *rank += weight;
    }
    if let Some(count) = visits.get_mut(page) {
        *count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_with_sink() -> Graph {
        Graph::from_adjacency([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec![]),
        ])
        .unwrap()
    }

    #[test]
    fn test_runs_exactly_n_minus_one_transitions() {
        let graph = triangle_with_sink();
        let mut rng = StdRng::seed_from_u64(1);
        let config = SamplingConfig {
            damping: 0.85,
            samples: 537,
        };
        let run = sample_pagerank_run(&graph, &config, &mut rng).unwrap();

        assert_eq!(run.transitions, 536);
        assert_eq!(run.visits.values().sum::<usize>(), 537);
    }

    #[test]
    fn test_single_sample_places_start_only() {
        let graph = triangle_with_sink();
        let mut rng = StdRng::seed_from_u64(3);
        let config = SamplingConfig {
            damping: 0.85,
            samples: 1,
        };
        let run = sample_pagerank_run(&graph, &config, &mut rng).unwrap();

        assert_eq!(run.transitions, 0);
        let visited: Vec<_> = run.estimate.iter().filter(|(_, r)| *r > 0.0).collect();
        assert_eq!(visited.len(), 1);
        assert_eq!(visited[0].1, 1.0);
    }

    #[test]
    fn test_ranks_sum_to_one() {
        let estimate = sample_pagerank_seeded(&triangle_with_sink(), 0.85, 10_000, 11).unwrap();
        assert_eq!(estimate.len(), 4);
        assert!((estimate.total() - 1.0).abs() < 1e-9, "sum={}", estimate.total());
    }

    #[test]
    fn test_same_seed_reproduces_estimate() {
        let graph = triangle_with_sink();
        let a = sample_pagerank_seeded(&graph, 0.85, 5_000, 99).unwrap();
        let b = sample_pagerank_seeded(&graph, 0.85, 5_000, 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sink_gets_visits() {
        let estimate = sample_pagerank_seeded(&triangle_with_sink(), 0.85, 10_000, 5).unwrap();
        assert!(estimate.get("4.html").unwrap() > 0.0);
    }

    #[test]
    fn test_zero_samples_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = sample_pagerank(&triangle_with_sink(), 0.85, 0, &mut rng);
        assert!(matches!(result, Err(LinkRankError::InvalidParameter(_))));
    }
}
