//! Criterion benchmarks for networkg.

use std::io::Write;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use tempfile::NamedTempFile;

use networkg::graph::Graph;
use networkg::types::EdgePair;

/// Random edge pairs over `node_count` nodes.
fn random_pairs(node_count: usize, edge_count: usize) -> Vec<EdgePair> {
    let mut rng = rand::thread_rng();
    (0..edge_count)
        .map(|_| (rng.gen_range(0..node_count), rng.gen_range(0..node_count)))
        .collect()
}

fn bench_fully_connected(c: &mut Criterion) {
    c.bench_function("fully_connected_1k", |b| {
        b.iter(|| Graph::fully_connected(1_000).unwrap())
    });
}

fn bench_add_edge(c: &mut Criterion) {
    let mut graph = Graph::new(100_000);

    c.bench_function("add_edge_to_100k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let n1 = rng.gen_range(0..100_000);
            let n2 = rng.gen_range(0..100_000);
            let _ = graph.add_edge(n1, n2);
        })
    });
}

fn bench_add_edges(c: &mut Criterion) {
    let pairs = random_pairs(100_000, 300_000);

    c.bench_function("add_edges_300k_into_100k", |b| {
        b.iter(|| {
            let mut graph = Graph::new(100_000);
            graph.add_edges(pairs.iter().copied()).unwrap();
            graph
        })
    });
}

fn bench_import(c: &mut Criterion) {
    let pairs = random_pairs(100_000, 300_000);
    let mut file = NamedTempFile::new().unwrap();
    for (n1, n2) in &pairs {
        writeln!(file, "{},{}", n1, n2).unwrap();
    }
    file.flush().unwrap();

    c.bench_function("import_300k_edges", |b| {
        b.iter(|| Graph::from_csv(file.path(), 100_000, b',').unwrap())
    });
}

criterion_group!(
    benches,
    bench_fully_connected,
    bench_add_edge,
    bench_add_edges,
    bench_import,
);
criterion_main!(benches);
