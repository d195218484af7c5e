//! Benchmarks for Smith-Wilson calibration and the alternative extrapolation.
//!
//! Run with: cargo bench -p rfr-curves

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use rfr_curves::alternative::{build_par_curve, forward_to_term_structure, par_to_forward};
use rfr_curves::prelude::*;

// =============================================================================
// TEST DATA
// =============================================================================

fn liquid_curve(last: u32) -> LiquidRates {
    let points = (1..=last)
        .map(|t| (t, 0.01 + 0.02 * (1.0 - (-f64::from(t) / 10.0).exp())))
        .collect();
    LiquidRates::new(points).unwrap()
}

fn spot_curve() -> RateTable {
    (1..=20).map(|t| (t, 0.01 + 0.001 * f64::from(t))).collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_smith_wilson(c: &mut Criterion) {
    let mut group = c.benchmark_group("smith_wilson");
    let params = SmithWilsonParams::default().with_ufr(0.036);

    for last in [10u32, 20, 30, 50] {
        let liquid = liquid_curve(last);
        group.bench_with_input(BenchmarkId::from_parameter(last), &liquid, |b, liquid| {
            b.iter(|| smith_wilson(black_box(liquid), black_box(&params)))
        });
    }

    group.finish();
}

fn bench_alpha_calibration(c: &mut Criterion) {
    let liquid = liquid_curve(20);
    let q = pricing_matrix(Instrument::Zero, &liquid, 1, 0.0, 0.036f64.ln_1p()).unwrap();

    c.bench_function("calibrate_alpha_20y", |b| {
        b.iter(|| calibrate_alpha(black_box(&q), 1, 60, 0.0001, 0.05, 6))
    });
}

fn bench_alternative(c: &mut Criterion) {
    let swaps: RateTable = [(25, 0.031), (30, 0.032), (40, 0.033), (50, 0.033)]
        .into_iter()
        .collect();
    let par = build_par_curve(&spot_curve(), &swaps, 0.001).unwrap();

    c.bench_function("par_to_forward", |b| {
        b.iter(|| par_to_forward(black_box(&par), 120, 20, 1e-10))
    });

    let forwards = par_to_forward(&par, 120, 20, 1e-10).unwrap();
    c.bench_function("forward_to_term_structure", |b| {
        b.iter(|| forward_to_term_structure(black_box(&forwards)))
    });
}

criterion_group!(benches, bench_smith_wilson, bench_alpha_calibration, bench_alternative);
criterion_main!(benches);
