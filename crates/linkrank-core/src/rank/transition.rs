//! Random-surfer transition model

use super::{validate_damping, Distribution};
use crate::error::{LinkRankError, Result};
use crate::graph::Graph;
use std::collections::BTreeMap;

/// Probability distribution over the page a random surfer visits after `page`.
///
/// With probability `damping_factor` the surfer follows one of `page`'s links, chosen uniformly.
/// Otherwise it jumps to any page of the graph, chosen uniformly. A page without links sends the
/// surfer to any page with probability `1/N`, so no mass is lost.
pub fn transition_model(graph: &Graph, page: &str, damping_factor: f64) -> Result<Distribution> {
    validate_damping(damping_factor)?;
    let targets = graph
        .links(page)
        .ok_or_else(|| LinkRankError::PageNotFound(page.to_string()))?;

    let n = graph.node_count() as f64;

    if targets.is_empty() {
        let uniform = 1.0 / n;
        return Ok(Distribution::from_weights(
            graph.pages().map(|p| (p.to_string(), uniform)).collect(),
        ));
    }

    let jump = (1.0 - damping_factor) / n;
    let follow = damping_factor / targets.len() as f64;

    let mut weights: BTreeMap<String, f64> =
        graph.pages().map(|p| (p.to_string(), jump)).collect();
    for target in targets {
        if let Some(w) = weights.get_mut(target) {
            *w += follow;
        }
    }

    Ok(Distribution::from_weights(weights))
}
