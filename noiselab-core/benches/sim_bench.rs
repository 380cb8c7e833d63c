//! Criterion benchmarks for NoiseLab hot paths.
//!
//! Benchmarks:
//! 1. Path simulation (a year of synthetic prices per trial)
//! 2. Strategy replay per variant on a fixed synthetic path

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use noiselab_core::{simulate_path, PriceSeries, SeedHierarchy, SimulationRequest, StrategySpec};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_series(n: usize) -> PriceSeries {
    let values: Vec<f64> = (0..n)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0 + i as f64 * 0.05)
        .collect();
    PriceSeries::new(values).expect("bench series is valid")
}

fn bench_simulate(c: &mut Criterion) {
    let source = make_series(252);
    let seeds = SeedHierarchy::new(42);

    let mut group = c.benchmark_group("simulate_path");
    for noise_level in [0.0, 0.1] {
        group.bench_with_input(
            BenchmarkId::from_parameter(noise_level),
            &noise_level,
            |b, &noise_level| {
                let request = SimulationRequest::matching(&source, noise_level);
                let mut trial = 0u64;
                b.iter(|| {
                    let mut rng = seeds.rng_for(noise_level, trial);
                    trial += 1;
                    black_box(simulate_path(&source, request, &mut rng).unwrap())
                });
            },
        );
    }
    group.finish();
}

fn bench_strategies(c: &mut Criterion) {
    let source = make_series(252);
    let seeds = SeedHierarchy::new(42);
    let mut rng = seeds.rng_for(0.05, 0);
    let path = simulate_path(&source, SimulationRequest::matching(&source, 0.05), &mut rng)
        .expect("bench path is valid");

    let mut group = c.benchmark_group("strategy_run");
    for name in StrategySpec::KNOWN_NAMES {
        let strategy = StrategySpec::from_name(name).unwrap().build();
        group.bench_function(name, |b| b.iter(|| black_box(strategy.run(&path))));
    }
    group.finish();
}

criterion_group!(benches, bench_simulate, bench_strategies);
criterion_main!(benches);
