//! Criterion benchmarks for the closest-pair kernel.
//! Focus sizes: n in {100, 1000, 10000}; brute force only up to 1000.

use algolab::closest::rand::{draw_points_uniform, BoxCfg, ReplayToken};
use algolab::closest::{brute_force, closest_pair, Point};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn points(n: usize, seed: u64) -> Vec<Point> {
    let cfg = BoxCfg {
        x_min: -1000.0,
        x_max: 1000.0,
        y_min: -1000.0,
        y_max: 1000.0,
        snap_to_int: false,
    };
    draw_points_uniform(n, cfg, ReplayToken { seed, index: 0 })
}

fn bench_closest(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest");
    for &n in &[100usize, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("divide_and_conquer", n), &n, |b, &n| {
            b.iter_batched(
                || points(n, 43),
                |pts| {
                    let _best = closest_pair(&pts);
                },
                BatchSize::SmallInput,
            )
        });
        if n <= 1000 {
            group.bench_with_input(BenchmarkId::new("brute_force", n), &n, |b, &n| {
                b.iter_batched(
                    || points(n, 43),
                    |pts| {
                        let _best = brute_force(&pts);
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_closest);
criterion_main!(benches);
