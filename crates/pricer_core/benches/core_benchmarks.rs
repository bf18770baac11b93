//! Criterion benchmarks for pricer_core sweep construction.
//!
//! Measures evenly spaced and explicit-point sweep construction across
//! grid sizes to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::SpotSweep;

/// Benchmark `linspace` construction.
fn bench_linspace(c: &mut Criterion) {
    let mut group = c.benchmark_group("spot_sweep_linspace");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("construction", size), &size, |b, &n| {
            b.iter(|| SpotSweep::linspace(black_box(80.0), black_box(120.0), n).unwrap());
        });
    }

    group.finish();
}

/// Benchmark validation of caller-supplied points.
fn bench_from_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("spot_sweep_from_points");

    for size in [100, 1000, 10000] {
        let points: Vec<f64> = (0..size).map(|i| 50.0 + i as f64 * 0.01).collect();
        group.bench_with_input(BenchmarkId::new("validation", size), &points, |b, pts| {
            b.iter(|| SpotSweep::from_points(black_box(pts.clone())).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_linspace, bench_from_points);
criterion_main!(benches);
