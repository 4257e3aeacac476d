//! PageRank estimation command

use super::crawl_corpus;
use crate::app::{OutputFormat, RankArgs};
use crate::output::{format_report, RankReport, SampledRanks};
use anyhow::Result;
use linkrank_core::{iterate_pagerank_run, sample_pagerank_run, RankConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Crawl the corpus and run the selected estimators side by side
pub async fn run(args: RankArgs, format: OutputFormat) -> Result<()> {
    let mut config = RankConfig::load()?;
    apply_overrides(&args, &mut config);
    let graph = Arc::new(crawl_corpus(&args.corpus, &mut config)?);

    tracing::debug!(
        "Ranking {} pages (damping {}, samples {}, threshold {})",
        graph.node_count(),
        config.damping,
        config.samples,
        config.threshold
    );

    let sampling = if args.method.sample() {
        let graph = Arc::clone(&graph);
        let sampling_config = config.sampling_config();
        let seed = config.seed;
        Some(tokio::task::spawn_blocking(move || {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            sample_pagerank_run(&graph, &sampling_config, &mut rng)
        }))
    } else {
        None
    };

    let iteration = if args.method.iterate() {
        let graph = Arc::clone(&graph);
        let iteration_config = config.iteration_config();
        Some(tokio::task::spawn_blocking(move || {
            iterate_pagerank_run(&graph, &iteration_config)
        }))
    } else {
        None
    };

    let sampled = match sampling {
        Some(handle) => Some(SampledRanks {
            samples: config.samples,
            seed: config.seed,
            estimate: handle.await??.estimate,
        }),
        None => None,
    };

    let iterated = match iteration {
        Some(handle) => Some(handle.await??),
        None => None,
    };

    if let Some(ref run) = iterated {
        if !run.converged {
            tracing::warn!(
                "Iteration stopped after {} rounds without converging (max delta {:.6})",
                run.iterations,
                run.max_delta
            );
        }
    }

    let report = RankReport { sampled, iterated };
    print!("{}", format_report(&report, format)?);
    Ok(())
}

fn apply_overrides(args: &RankArgs, config: &mut RankConfig) {
    if let Some(damping) = args.damping {
        config.damping = damping;
    }
    if let Some(samples) = args.samples {
        config.samples = samples;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(max_iterations) = args.max_iterations {
        config.max_iterations = Some(max_iterations);
    }
    if let Some(dangling) = args.dangling {
        config.dangling = dangling.into();
    }
}
