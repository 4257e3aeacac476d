//! Estimator performance benchmarks
//!
//! Measures performance of:
//! - Transition model construction
//! - Sampling estimator at increasing sample counts
//! - Iterative estimator on growing graphs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linkrank_core::{iterate_pagerank, sample_pagerank_seeded, transition_model, Graph};

/// Ring of `n` pages where every page also links to the page `n / 3` ahead
fn ring_graph(n: usize) -> Graph {
    let stride = (n / 3).max(2);
    Graph::from_adjacency_lenient((0..n).map(|i| {
        (
            format!("{}.html", i),
            vec![
                format!("{}.html", (i + 1) % n),
                format!("{}.html", (i + stride) % n),
            ],
        )
    }))
    .unwrap()
}

fn bench_transition_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("transition_model");

    for size in [10, 100, 1_000] {
        let graph = ring_graph(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| transition_model(black_box(graph), black_box("0.html"), 0.85).unwrap());
        });
    }

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_pagerank");
    group.sample_size(10);
    let graph = ring_graph(50);

    for samples in [1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(samples),
            &samples,
            |b, &samples| {
                b.iter(|| sample_pagerank_seeded(black_box(&graph), 0.85, samples, 42).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate_pagerank");

    for size in [10, 100, 1_000] {
        let graph = ring_graph(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| iterate_pagerank(black_box(graph), 0.85).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transition_model, bench_sampling, bench_iteration);
criterion_main!(benches);
