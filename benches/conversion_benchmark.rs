// ============================================================================
// Conversion Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Integer Conversion - Repeated division over growing big integers
// 2. Fractional Expansion - Terminating vs capped (non-terminating) fractions
// 3. Base -> Decimal - Fractional weights at decimal128 precision
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use radix_converter::prelude::*;
use std::hint::black_box;

// ============================================================================
// Integer Conversion Benchmarks
// ============================================================================

fn benchmark_integer_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_conversion");

    for num_digits in [8, 64, 512].iter() {
        let decimal = "7".repeat(*num_digits);

        group.bench_with_input(
            BenchmarkId::new("decimal_to_base36", num_digits),
            &decimal,
            |b, decimal| b.iter(|| black_box(decimal_to_base(decimal, 36).unwrap())),
        );

        group.bench_with_input(
            BenchmarkId::new("base2_to_base16", num_digits),
            &"1".repeat(*num_digits),
            |b, binary| b.iter(|| black_box(convert_base(binary, 2, 16).unwrap())),
        );
    }

    group.finish();
}

// ============================================================================
// Fractional Expansion Benchmarks
// ============================================================================

fn benchmark_fractional_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("fractional_expansion");

    // Terminates after a handful of digits
    group.bench_function("terminating", |b| {
        b.iter(|| black_box(decimal_to_base(black_box("0.8125"), 2).unwrap()))
    });

    // Runs into the 100-digit cap
    group.bench_function("capped", |b| {
        b.iter(|| black_box(decimal_to_base(black_box("0.1"), 3).unwrap()))
    });

    group.finish();
}

// ============================================================================
// Base -> Decimal Benchmarks
// ============================================================================

fn benchmark_base_to_decimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("base_to_decimal");

    for num_digits in [4, 16, 64].iter() {
        let numeral = format!("z.{}", "z".repeat(*num_digits));

        group.bench_with_input(
            BenchmarkId::from_parameter(num_digits),
            &numeral,
            |b, numeral| b.iter(|| black_box(base_to_decimal(numeral, 36).unwrap())),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_integer_conversion,
    benchmark_fractional_expansion,
    benchmark_base_to_decimal
);
criterion_main!(benches);
