//! Log-sum-exp benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Core kernel scalability (10 to 100K values)
//! - Pairwise kernel against the two-element array kernel
//! - Pathological sort inputs (sorted, reversed, constant)
//! - Batch row reduction, sequential and parallel
//!
//! For serial batch execution, use `FASTLSE_BACKEND=serial cargo bench`.
//! For parallel batch execution, use `FASTLSE_BACKEND=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastLse::prelude::*;
use lse::prelude::{logsumexp, logsumexp_pair};
use ndarray::Array2;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTLSE_BACKEND").ok().as_deref() {
        Some("serial") => (false, "serial"),
        Some("parallel") | _ => (true, "parallel"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Log-weights drawn from a wide normal distribution.
fn generate_log_weights(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(-20.0, 15.0).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Matrix of log-weights with uniform entries.
fn generate_matrix(rows: usize, cols: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(-50.0, 50.0).unwrap();
    Array2::from_shape_fn((rows, cols), |_| dist.sample(&mut rng))
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_kernel_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel_scalability");

    for &size in &[10_usize, 100, 1_000, 10_000, 100_000] {
        let data = generate_log_weights(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter_batched_ref(
                || data.clone(),
                |buf| black_box(logsumexp(buf)),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair");

    group.bench_function("logsumexp_pair", |b| {
        b.iter(|| black_box(logsumexp_pair(black_box(-3.5), black_box(1.25))));
    });
    group.bench_function("logsumexp_two_elements", |b| {
        b.iter(|| {
            let mut buf = [black_box(-3.5), black_box(1.25)];
            black_box(logsumexp(&mut buf))
        });
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    let size = 5_000;

    let sorted: Vec<f64> = (0..size).map(|i| i as f64 * 1e-3).collect();
    let reversed: Vec<f64> = sorted.iter().rev().copied().collect();
    let constant = vec![-1.0; size];

    let cases = [
        ("sorted", &sorted),
        ("reversed", &reversed),
        ("constant", &constant),
    ];
    for (name, data) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), data, |b, data| {
            b.iter_batched_ref(
                || data.clone(),
                |buf| black_box(logsumexp(buf)),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_batch_rows(c: &mut Criterion) {
    let (parallel, label) = get_config();
    let mut group = c.benchmark_group(format!("batch_rows_{label}"));
    let runner = Lse::new().parallel(parallel).build().unwrap();

    for &(rows, cols) in &[(100_usize, 1_000_usize), (10_000, 100), (100_000, 10)] {
        let matrix = generate_matrix(rows, cols, 7);
        group.throughput(Throughput::Elements((rows * cols) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{cols}")),
            &matrix,
            |b, matrix| {
                b.iter_batched_ref(
                    || matrix.clone(),
                    |m| black_box(runner.rows(m).unwrap()),
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_batch_reduce(c: &mut Criterion) {
    let (parallel, label) = get_config();
    let mut group = c.benchmark_group(format!("batch_reduce_{label}"));
    let runner = Lse::new()
        .parallel(parallel)
        .min_parallel_rows(2)
        .build()
        .unwrap();

    for &size in &[100_000_usize, 1_000_000] {
        let data = generate_log_weights(size, 9);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(runner.reduce(data).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_kernel_scalability,
    bench_pair,
    bench_pathological,
    bench_batch_rows,
    bench_batch_reduce
);
criterion_main!(benches);
