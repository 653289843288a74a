//! Criterion benchmarks for the single-pair core and the all-pairs matrix.
//! Matrix sizes: n in {10, 50, 100}, sequential and rayon.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dubins_cost::prelude::*;

fn nodes(n: usize, seed: u64) -> Vec<Configuration> {
    let cfg = ScatterCfg {
        count: n,
        width: 40.0 * (n as f64).sqrt(),
        height: 40.0 * (n as f64).sqrt(),
        min_separation: 8.0,
        max_attempts: 1_000_000,
    };
    scatter_configurations(&cfg, seed).expect("scatter fixture")
}

fn bench_pair(c: &mut Criterion) {
    let a = Configuration::new(0.0, 0.0, 0.3);
    let b = Configuration::new(25.0, -12.0, 2.1);
    c.bench_function("dubins_path_length", |bch| {
        bch.iter(|| dubins_path_length(black_box(&a), black_box(&b), black_box(2.0)))
    });
}

fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjacency_matrix");
    for &n in &[10usize, 50, 100] {
        let fixture = nodes(n, 11);
        group.bench_with_input(BenchmarkId::new("sequential", n), &fixture, |bch, f| {
            bch.iter(|| build_configuration_matrix(f, 1.0, &CostCfg::sequential()))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &fixture, |bch, f| {
            bch.iter(|| build_configuration_matrix(f, 1.0, &CostCfg::default()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pair, bench_matrix);
criterion_main!(benches);
