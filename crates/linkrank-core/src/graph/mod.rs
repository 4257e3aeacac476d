//! Directed link graph consumed by the estimators

use crate::error::{LinkRankError, Result};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// An immutable directed graph of pages and the pages they link to.
///
/// Invariants enforced at construction:
/// - at least one page
/// - no page links to itself
/// - every link target is itself a page of the graph
///
/// Pages are kept in sorted order, so every iteration over the graph is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Graph {
    links: BTreeMap<String, BTreeSet<String>>,
}

impl Graph {
    /// Build a graph, rejecting self-links and dangling links.
    pub fn new(links: BTreeMap<String, BTreeSet<String>>) -> Result<Self> {
        if links.is_empty() {
            return Err(LinkRankError::EmptyGraph);
        }

        for (page, targets) in &links {
            for target in targets {
                if target == page {
                    return Err(LinkRankError::SelfLink(page.clone()));
                }
                if !links.contains_key(target) {
                    return Err(LinkRankError::DanglingLink {
                        source_page: page.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        Ok(Self { links })
    }

    /// Build a graph from `(page, targets)` pairs, rejecting self-links and dangling links.
    ///
    /// A page listed more than once has its targets merged.
    pub fn from_adjacency<I, P, L, T>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new(collect_adjacency(adjacency))
    }

    /// Build a graph from `(page, targets)` pairs, silently dropping self-links and links
    /// whose target is not one of the listed pages.
    pub fn from_adjacency_lenient<I, P, L, T>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let raw = collect_adjacency(adjacency);
        let pages: BTreeSet<String> = raw.keys().cloned().collect();

        let mut dropped = 0usize;
        let links = raw
            .into_iter()
            .map(|(page, targets)| {
                let before = targets.len();
                let kept: BTreeSet<String> = targets
                    .into_iter()
                    .filter(|target| *target != page && pages.contains(target))
                    .collect();
                dropped += before - kept.len();
                (page, kept)
            })
            .collect();

        if dropped > 0 {
            tracing::debug!("Dropped {} self or out-of-corpus links", dropped);
        }

        Self::new(links)
    }

    /// Number of pages (N).
    pub fn node_count(&self) -> usize {
        self.links.len()
    }

    /// Total number of links.
    pub fn edge_count(&self) -> usize {
        self.links.values().map(BTreeSet::len).sum()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// Pages in sorted order.
    pub fn pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.links.keys().map(String::as_str)
    }

    /// The out-set of `page`, or `None` if it is not in the graph.
    pub fn links(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.links.get(page)
    }

    pub fn out_degree(&self, page: &str) -> Option<usize> {
        self.links.get(page).map(BTreeSet::len)
    }

    /// True when `page` exists and links to nothing.
    pub fn is_dangling(&self, page: &str) -> bool {
        self.links.get(page).is_some_and(BTreeSet::is_empty)
    }

    /// `(page, out-set)` pairs in sorted page order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> + '_ {
        self.links.iter().map(|(page, targets)| (page.as_str(), targets))
    }
}

fn collect_adjacency<I, P, L, T>(adjacency: I) -> BTreeMap<String, BTreeSet<String>>
where
    I: IntoIterator<Item = (P, L)>,
    P: Into<String>,
    L: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut links: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for (page, targets) in adjacency {
        links
            .entry(page.into())
            .or_default()
            .extend(targets.into_iter().map(Into::into));
    }
    links
}
