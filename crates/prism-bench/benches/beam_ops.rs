//! Criterion benchmarks for beam trials and sweeps.

use criterion::{criterion_group, criterion_main, Criterion};
use prism_beam::{EntryPoint, SweepConfig};
use prism_bench::{reference_profile, stress_profile};
use prism_core::Direction;
use prism_test_utils::SAMPLE_CONTRAPTION;
use std::hint::black_box;

/// Benchmark: single trial on the 10x10 sample.
fn bench_trial_sample(c: &mut Criterion) {
    let sim = prism_beam::BeamSimulator::from_text(SAMPLE_CONTRAPTION).unwrap();
    let entry = EntryPoint::new(0, 0, Direction::Right);
    c.bench_function("trial_sample", |b| {
        b.iter(|| black_box(sim.run_trial(black_box(entry)).unwrap().lit));
    });
}

/// Benchmark: single trial on the 110x110 reference profile.
fn bench_trial_reference(c: &mut Criterion) {
    let sim = reference_profile(42).unwrap();
    let entry = EntryPoint::new(0, 0, Direction::Right);
    c.bench_function("trial_reference", |b| {
        b.iter(|| black_box(sim.run_trial(entry).unwrap().lit));
    });
}

/// Benchmark: full boundary sweep, serial vs pooled.
fn bench_sweep_reference(c: &mut Criterion) {
    let sim = reference_profile(42).unwrap();
    let mut group = c.benchmark_group("sweep_reference");
    group.sample_size(10);
    for workers in [1, 4, 8] {
        let config = SweepConfig {
            worker_count: Some(workers),
            entries: None,
        };
        group.bench_function(format!("workers_{workers}"), |b| {
            b.iter(|| black_box(sim.sweep(&config).unwrap().best.lit));
        });
    }
    group.finish();
}

/// Benchmark: sweep of the top edge only on the 256x256 stress profile.
fn bench_sweep_stress_top_edge(c: &mut Criterion) {
    let sim = stress_profile(42).unwrap();
    let entries = (0..sim.width())
        .map(|col| EntryPoint::new(0, col, Direction::Down))
        .collect();
    let config = SweepConfig {
        worker_count: None,
        entries: Some(entries),
    };
    let mut group = c.benchmark_group("sweep_stress");
    group.sample_size(10);
    group.bench_function("top_edge", |b| {
        b.iter(|| black_box(sim.sweep(&config).unwrap().best.lit));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_trial_sample,
    bench_trial_reference,
    bench_sweep_reference,
    bench_sweep_stress_top_edge
);
criterion_main!(benches);
