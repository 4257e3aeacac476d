//! Probability vectors keyed by page

use rand::Rng;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Probability of moving to each page next, as produced by the transition model.
///
/// Weights are non-negative and sum to 1 over exactly the pages of the graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Distribution {
    weights: BTreeMap<String, f64>,
}

impl Distribution {
    pub(crate) fn from_weights(weights: BTreeMap<String, f64>) -> Self {
        Self { weights }
    }

    pub fn get(&self, page: &str) -> Option<f64> {
        self.weights.get(page).copied()
    }

    /// `(page, weight)` pairs in sorted page order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights.iter().map(|(page, w)| (page.as_str(), *w))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Draw one page with probability equal to its weight.
    ///
    /// Cumulative weights are laid out in sorted page order. A uniform `u` in `[0, total)` selects
    /// the first page whose cumulative bound is strictly greater than `u`, so zero-weight pages
    /// are never chosen. If rounding puts `u` at or past the final bound, the last page with
    /// positive weight is returned.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> &str {
        let mut pages = Vec::with_capacity(self.weights.len());
        let mut bounds = Vec::with_capacity(self.weights.len());
        let mut running = 0.0;
        for (page, w) in &self.weights {
            running += w.max(0.0);
            pages.push(page.as_str());
            bounds.push(running);
        }

        let u = rng.random::<f64>() * running;
        let idx = bounds.partition_point(|&bound| bound <= u);
        if idx < pages.len() {
            return pages[idx];
        }

        self.weights
            .iter()
            .rev()
            .find(|(_, w)| **w > 0.0)
            .map(|(page, _)| page.as_str())
            .unwrap_or_else(|| pages[pages.len() - 1])
    }
}

/// Final rank of every page, as produced by one of the estimators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankEstimate {
    ranks: BTreeMap<String, f64>,
}

impl RankEstimate {
    pub(crate) fn from_ranks(ranks: BTreeMap<String, f64>) -> Self {
        Self { ranks }
    }

    pub fn get(&self, page: &str) -> Option<f64> {
        self.ranks.get(page).copied()
    }

    /// `(page, rank)` pairs in sorted page order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.ranks.iter().map(|(page, r)| (page.as_str(), *r))
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.ranks.values().sum()
    }

    /// Pages by descending rank, ties broken by page name.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        ranked
    }

    /// Largest absolute difference over the union of both page sets.
    ///
    /// A page missing from one side counts as rank 0 there.
    pub fn max_abs_diff(&self, other: &RankEstimate) -> f64 {
        self.ranks
            .keys()
            .chain(other.ranks.keys())
            .map(|page| {
                let a = self.get(page).unwrap_or(0.0);
                let b = other.get(page).unwrap_or(0.0);
                (a - b).abs()
            })
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dist(pairs: &[(&str, f64)]) -> Distribution {
        Distribution::from_weights(pairs.iter().map(|(p, w)| (p.to_string(), *w)).collect())
    }

    #[test]
    fn test_sample_never_picks_zero_weight() {
        let d = dist(&[("a", 0.0), ("b", 1.0), ("c", 0.0)]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            assert_eq!(d.sample(&mut rng), "b");
        }
    }

    #[test]
    fn test_sample_frequencies_follow_weights() {
        let d = dist(&[("a", 0.2), ("b", 0.8)]);
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 20_000;
        let hits = (0..draws).filter(|_| d.sample(&mut rng) == "b").count();
        let freq = hits as f64 / draws as f64;
        assert!((freq - 0.8).abs() < 0.02, "freq={}", freq);
    }

    #[test]
    fn test_ranked_orders_by_rank_then_page() {
        let estimate = RankEstimate::from_ranks(
            [("b", 0.25), ("a", 0.25), ("c", 0.5)]
                .into_iter()
                .map(|(p, r)| (p.to_string(), r))
                .collect(),
        );
        let ranked = estimate.ranked();
        assert_eq!(ranked[0].0, "c");
        assert_eq!(ranked[1].0, "a");
        assert_eq!(ranked[2].0, "b");
    }

    #[test]
    fn test_max_abs_diff_counts_missing_pages() {
        let a = RankEstimate::from_ranks([("x".to_string(), 0.6), ("y".to_string(), 0.4)].into());
        let b = RankEstimate::from_ranks([("x".to_string(), 0.5)].into());
        assert!((a.max_abs_diff(&b) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_estimate_serializes_as_object() {
        let estimate = RankEstimate::from_ranks([("a.html".to_string(), 1.0)].into());
        let json = serde_json::to_string(&estimate).unwrap();
        assert_eq!(json, r#"{"a.html":1.0}"#);
    }
}
