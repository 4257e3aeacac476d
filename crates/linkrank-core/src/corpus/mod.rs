//! Corpus crawling: turns a directory of HTML pages into a [`Graph`]

mod link_extractor;
mod scanner;

pub use link_extractor::{extract_links, resolve_link};
pub use scanner::{scan_files, ScanOptions, ScanResult};

use crate::error::{LinkRankError, Result};
use crate::graph::Graph;
use std::path::Path;

/// Crawl `directory` and build the link graph of its pages.
///
/// Each matching file becomes a page named by its path relative to `directory`. Links to the
/// page itself and links to anything outside the corpus are discarded. Files that cannot be read
/// as UTF-8 text are skipped with a warning.
pub fn crawl(directory: &Path, options: &ScanOptions) -> Result<Graph> {
    if !directory.is_dir() {
        return Err(LinkRankError::CorpusNotFound(
            directory.display().to_string(),
        ));
    }

    let files = scan_files(directory, options)?;
    let mut adjacency: Vec<(String, Vec<String>)> = Vec::with_capacity(files.len());

    for file in files {
        let content = match std::fs::read_to_string(&file.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Skipping page {:?}: {}", file.path, e);
                continue;
            }
        };

        let targets: Vec<String> = extract_links(&content)
            .iter()
            .filter_map(|href| resolve_link(href, &file.relative_path))
            .collect();
        adjacency.push((file.relative_path, targets));
    }

    if adjacency.is_empty() {
        return Err(LinkRankError::EmptyGraph);
    }

    let graph = Graph::from_adjacency_lenient(adjacency)?;
    tracing::info!(
        "Crawled {} pages with {} links from {}",
        graph.node_count(),
        graph.edge_count(),
        directory.display()
    );
    Ok(graph)
}
