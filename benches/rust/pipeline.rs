//! Pipeline Benchmark
//!
//! Benchmarks tokenizing, multiplying and the full pipeline on dense
//! polynomials with N terms.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use latex_polydiff::{ProductDiff, differentiate, multiply, tokenize};
use std::fmt::Write;
use std::hint::black_box;

// =============================================================================
// Polynomial Generator
// =============================================================================

/// Dense polynomial with N terms: alternating signs, descending exponents
fn generate_poly(n: usize) -> String {
    let mut s = String::with_capacity(n * 8);
    for i in (0..n).rev() {
        let coeff = i % 9 + 1;
        let sign = if i % 2 == 0 { " + " } else { " - " };
        if i + 1 != n || sign == " - " {
            s.push_str(sign);
        }
        match i {
            0 => write!(s, "{}", coeff).unwrap(),
            1 => write!(s, "{}x", coeff).unwrap(),
            _ => write!(s, "{}x^{}", coeff, i).unwrap(),
        }
    }
    s
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for n in [10, 100, 300] {
        let poly = generate_poly(n);
        let expr = format!("({})({})", poly, poly);
        let terms = tokenize(&poly, "x").unwrap();

        group.bench_with_input(BenchmarkId::new("tokenize", n), &poly, |b, poly| {
            b.iter(|| tokenize(black_box(poly), "x").unwrap())
        });

        group.bench_with_input(BenchmarkId::new("multiply", n), &terms, |b, terms| {
            b.iter(|| differentiate(&multiply(black_box(terms), black_box(terms)).unwrap()).unwrap())
        });

        let builder = ProductDiff::new();
        group.bench_with_input(BenchmarkId::new("derive", n), &expr, |b, expr| {
            b.iter(|| builder.derive_str(black_box(expr)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
