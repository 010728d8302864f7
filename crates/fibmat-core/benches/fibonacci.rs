//! Criterion benchmarks for limb arithmetic and the Fibonacci engine.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fibmat_core::observers::NoOpObserver;
use fibmat_core::{nth_fibonacci, BigUint, FibonacciEngine, Options};

fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("MatrixExponentiation");
    for n in [100i64, 1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| nth_fibonacci(n));
        });
    }
    group.finish();
}

fn bench_truncated(c: &mut Criterion) {
    let engine = FibonacciEngine::new();
    let observer = NoOpObserver::new();
    let opts = Options::with_max_limbs(12);

    let mut group = c.benchmark_group("MatrixExponentiationCapped");
    for n in [1_000_000i64, 41_434_767_994, i64::MAX] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| engine.calculate(n, &opts, &observer));
        });
    }
    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("SchoolbookMultiply");
    for digits in [90usize, 900, 9_000] {
        let operand: BigUint = "7".repeat(digits).parse().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(digits), &operand, |b, x| {
            b.iter(|| x * x);
        });
    }
    group.finish();
}

criterion_group!(benches, bench_exact, bench_truncated, bench_multiply);
criterion_main!(benches);
