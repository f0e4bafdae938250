//! Verifies the public module surface stays reachable at its documented
//! paths.

#[test]
fn config_exports() {
    let config = risk_engine::sim::config::SimulationConfig::builder()
        .num_simulations(100)
        .build()
        .unwrap();
    assert_eq!(config.num_simulations(), 100);
    assert_eq!(
        config.confidence_level(),
        risk_engine::sim::DEFAULT_CONFIDENCE_LEVEL
    );

    // Crate-root re-exports
    let _: risk_engine::SimulationConfig = config;
    let err = risk_engine::sim::config::SimulationConfig::builder()
        .confidence_level(1.5)
        .build()
        .unwrap_err();
    let _: risk_engine::ConfigError = err;
}

#[test]
fn rng_exports() {
    use risk_core::RandomSource;

    let mut rng = risk_engine::rng::MonteCarloRng::from_seed(1);
    let _: f64 = rng.next_uniform();
    let _child: risk_engine::MonteCarloRng = rng.spawn_child();

    let mut paired = risk_engine::rng::AntitheticRng::new(&mut rng);
    paired.begin_primary();
    let u = paired.next_uniform();
    paired.begin_mirror();
    assert_eq!(paired.next_uniform(), 1.0 - u);
}

#[test]
fn simulation_exports() {
    let config = risk_engine::SimulationConfig::builder()
        .num_simulations(200)
        .seed(11)
        .build()
        .unwrap();
    let simulator = risk_engine::Simulator::new(config);

    let asset = risk_engine::AssetParameters::new("ACME", 100.0, 0.05, 0.2);
    let result: risk_engine::SimulationResult = simulator.simulate_single_asset(&asset);
    assert!(result.success);

    let portfolio = risk_engine::PortfolioParameters::new(
        vec![risk_engine::AssetParameters::new("ACME", 100.0, 0.05, 0.2)],
        vec![1.0],
    );
    let aggregate: risk_engine::PortfolioSimulationResult =
        simulator.simulate_portfolio(&portfolio);
    assert!(aggregate.success);
}

#[test]
fn allocation_exports() {
    let weights = risk_engine::sim::equal_weights(4);
    assert_eq!(weights, vec![0.25; 4]);

    let normalised = risk_engine::sim::normalise_weights(&[2.0, 2.0]).unwrap();
    assert_eq!(normalised, vec![0.5, 0.5]);
}
