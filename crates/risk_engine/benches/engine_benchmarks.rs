//! Criterion benchmarks for the simulation engine.
//!
//! Run with: cargo bench -p risk_engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use risk_engine::sim::{AssetParameters, PortfolioParameters, SimulationConfig, Simulator};
use risk_models::{CorrelationMatrix, DistributionKind};

fn sample_asset() -> AssetParameters {
    AssetParameters::new("ACME", 100.0, 0.05, 0.2)
}

fn simulator(distribution: DistributionKind, custom: Vec<f64>, workers: usize) -> Simulator {
    let config = SimulationConfig::builder()
        .num_simulations(10_000)
        .distribution(distribution)
        .custom_parameters(custom)
        .workers(workers)
        .seed(42)
        .build()
        .unwrap();
    Simulator::new(config)
}

fn bench_distributions(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_single_asset");
    let cases = [
        ("normal", DistributionKind::Normal, Vec::new()),
        ("student_t", DistributionKind::StudentT, vec![5.0, 0.0, 1.0]),
        ("garch", DistributionKind::Garch, vec![1e-4, 0.1, 0.85]),
    ];
    for (name, distribution, custom) in cases {
        let sim = simulator(distribution, custom, 1);
        let asset = sample_asset();
        group.bench_function(BenchmarkId::new(name, 10_000usize), |b| {
            b.iter(|| sim.simulate_single_asset(black_box(&asset)));
        });
    }
    group.finish();
}

fn bench_antithetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("antithetic_variates");
    for antithetic in [false, true] {
        let config = SimulationConfig::builder()
            .num_simulations(10_000)
            .antithetic(antithetic)
            .seed(42)
            .build()
            .unwrap();
        let sim = Simulator::new(config);
        let asset = sample_asset();
        let label = if antithetic { "paired" } else { "plain" };
        group.bench_function(BenchmarkId::new(label, 10_000usize), |b| {
            b.iter(|| sim.simulate_single_asset(black_box(&asset)));
        });
    }
    group.finish();
}

fn bench_workers(c: &mut Criterion) {
    let mut group = c.benchmark_group("worker_fanout");
    group.sample_size(20);
    for workers in [1usize, 4] {
        let config = SimulationConfig::builder()
            .num_simulations(200_000)
            .workers(workers)
            .seed(42)
            .build()
            .unwrap();
        let sim = Simulator::new(config);
        let asset = sample_asset();
        group.bench_with_input(BenchmarkId::new("normal", workers), &sim, |b, sim| {
            b.iter(|| sim.simulate_single_asset(black_box(&asset)));
        });
    }
    group.finish();
}

fn bench_portfolio(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_portfolio");
    group.sample_size(30);

    let assets = vec![
        AssetParameters::new("AAA", 100.0, 0.05, 0.2),
        AssetParameters::new("BBB", 50.0, 0.03, 0.3),
        AssetParameters::new("CCC", 75.0, 0.06, 0.25),
        AssetParameters::new("DDD", 120.0, 0.04, 0.15),
    ];
    let weights = vec![0.4, 0.3, 0.2, 0.1];
    let correlation = CorrelationMatrix::from_flat(
        4,
        vec![
            1.0, 0.5, 0.3, 0.1, //
            0.5, 1.0, 0.4, 0.2, //
            0.3, 0.4, 1.0, 0.3, //
            0.1, 0.2, 0.3, 1.0,
        ],
    )
    .unwrap();

    let independent = PortfolioParameters::new(assets.clone(), weights.clone());
    let correlated =
        PortfolioParameters::new(assets, weights).with_correlation(correlation);
    let sim = simulator(DistributionKind::Normal, Vec::new(), 1);

    group.bench_function(BenchmarkId::new("independent", 4usize), |b| {
        b.iter(|| sim.simulate_portfolio(black_box(&independent)));
    });
    group.bench_function(BenchmarkId::new("correlated", 4usize), |b| {
        b.iter(|| sim.simulate_portfolio(black_box(&correlated)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_distributions,
    bench_antithetic,
    bench_workers,
    bench_portfolio
);
criterion_main!(benches);
