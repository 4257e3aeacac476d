//! PageRank estimation
//!
//! Two independent estimators over the same immutable [`Graph`](crate::graph::Graph):
//! - [`sample_pagerank`]: random-surfer walk driven by the [`transition_model`]
//! - [`iterate_pagerank`]: deterministic fixed-point iteration
//!
//! Both return a [`RankEstimate`] and only borrow the graph, so they can run side by side.

mod estimate;
mod iteration;
mod sampling;
mod transition;

use crate::error::{LinkRankError, Result};

pub use estimate::{Distribution, RankEstimate};
pub use iteration::{
    iterate_pagerank, iterate_pagerank_checked, iterate_pagerank_run, DanglingPolicy,
    IterationConfig, IterationRun,
};
pub use sampling::{
    sample_pagerank, sample_pagerank_run, sample_pagerank_seeded, SamplingConfig, SamplingRun,
};
pub use transition::transition_model;

/// Probability that the surfer follows a link instead of jumping.
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Pages visited by the sampling estimator.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Per-page change below which the iterative estimator treats a page as stable.
pub const DEFAULT_THRESHOLD: f64 = 0.001;

pub(crate) fn validate_damping(damping: f64) -> Result<()> {
    if !damping.is_finite() || damping <= 0.0 || damping >= 1.0 {
        return Err(LinkRankError::InvalidParameter(format!(
            "damping must be in (0,1), got {}",
            damping
        )));
    }
    Ok(())
}
