//! erf benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Every method on scalars, in single and double precision
//! - Scalability over array sizes (1K to 1M values)
//! - Argument distributions (uniform, normal, tail-heavy)
//!
//! For serial execution, use `ERF_BENCH_MODE=serial cargo bench`.
//! For parallel execution, use `ERF_BENCH_MODE=parallel cargo bench` (default).

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use error_function::{erf_sun, erf_winitzki};
use fast_error_function::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("ERF_BENCH_MODE").ok().as_deref() {
        Some("serial") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

fn evaluator(method: Method, parallel: bool) -> FastErfEvaluator {
    FastErf::new()
        .method(method)
        .parallel(parallel)
        .build()
        .unwrap()
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Arguments spread uniformly over the interesting range [-6, 6].
fn generate_uniform(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(-6.0, 6.0).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Standard normal arguments, as in probability computations.
fn generate_normal(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 1.0).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Mostly saturated arguments, exercising the tail and early-exit branches.
fn generate_tail(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 8.0).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar");
    let xs = generate_uniform(1_000, 42);
    let xf: Vec<f32> = xs.iter().map(|&x| x as f32).collect();
    group.throughput(Throughput::Elements(xs.len() as u64));

    for method in Method::ALL {
        group.bench_with_input(BenchmarkId::new("f64", method), &xs, |b, xs| {
            b.iter(|| xs.iter().map(|&x| method.erf(black_box(x))).sum::<f64>())
        });
        group.bench_with_input(BenchmarkId::new("f32", method), &xf, |b, xf| {
            b.iter(|| xf.iter().map(|&x| method.erf(black_box(x))).sum::<f32>())
        });
    }

    // Free functions, without enum dispatch.
    group.bench_function("free_sun", |b| {
        b.iter(|| xs.iter().map(|&x| erf_sun(black_box(x))).sum::<f64>())
    });
    group.bench_function("free_winitzki", |b| {
        b.iter(|| xs.iter().map(|&x| erf_winitzki(black_box(x))).sum::<f64>())
    });
    group.finish();
}

fn bench_scalability(c: &mut Criterion) {
    let (parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(size as u64));
        let xs = generate_uniform(size, 42);

        for method in [Method::Reference, Method::AbramowitzStegun, Method::Winitzki] {
            let eval = evaluator(method, parallel);
            group.bench_with_input(BenchmarkId::new(method.name(), size), &xs, |b, xs| {
                b.iter(|| eval.eval_slice(black_box(xs)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_distributions(c: &mut Criterion) {
    let (parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("distributions_{}", mode_name));
    group.sample_size(50);

    let size = 100_000;
    group.throughput(Throughput::Elements(size as u64));
    let datasets = [
        ("uniform", generate_uniform(size, 7)),
        ("normal", generate_normal(size, 7)),
        ("tail", generate_tail(size, 7)),
    ];

    for (name, xs) in &datasets {
        for method in [Method::Reference, Method::NumericalRecipes] {
            let eval = evaluator(method, parallel);
            group.bench_with_input(BenchmarkId::new(method.name(), name), xs, |b, xs| {
                b.iter(|| eval.eval_slice(black_box(xs)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_complementary(c: &mut Criterion) {
    let (parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("erfc_{}", mode_name));

    let xs = generate_normal(100_000, 11);
    group.throughput(Throughput::Elements(xs.len() as u64));

    for method in Method::ALL {
        let eval = FastErf::new()
            .method(method)
            .complementary()
            .parallel(parallel)
            .build()
            .unwrap();
        group.bench_with_input(BenchmarkId::new("erfc", method), &xs, |b, xs| {
            b.iter(|| eval.eval_slice(black_box(xs)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scalar,
    bench_scalability,
    bench_distributions,
    bench_complementary
);
criterion_main!(benches);
