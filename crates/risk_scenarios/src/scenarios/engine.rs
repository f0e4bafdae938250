//! Stress test execution.

use rayon::prelude::*;
use risk_core::RiskError;
use risk_engine::{AssetParameters, SimulationConfig, SimulationResult, Simulator};

use super::stress::StressScenario;

/// Result of one scenario run, tagged with the scenario name.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StressOutcome {
    /// Name of the scenario that produced this result.
    pub scenario: String,
    /// The stressed simulation result.
    pub result: SimulationResult,
}

/// The successful outcome with the largest VaR, if any.
///
/// Failed runs are skipped; ties resolve to the later outcome.
pub fn worst_case(outcomes: &[StressOutcome]) -> Option<&StressOutcome> {
    outcomes
        .iter()
        .filter(|outcome| outcome.result.success)
        .max_by(|a, b| a.result.var.total_cmp(&b.result.var))
}

/// Runs stressed simulations against a fixed base configuration.
///
/// # Examples
///
/// ```
/// use risk_engine::{AssetParameters, SimulationConfig};
/// use risk_scenarios::{StressEngine, StressPreset};
///
/// let config = SimulationConfig::builder()
///     .num_simulations(2_000)
///     .seed(11)
///     .build()
///     .unwrap();
/// let engine = StressEngine::new(config);
/// let asset = AssetParameters::new("ACME", 100.0, 0.05, 0.2);
///
/// let baseline = engine.run(&asset, &[1.0]);
/// let crashed = engine.run_scenario(&asset, &StressPreset::MarketCrash.scenario());
/// assert!(baseline.success && crashed.success);
/// assert!(crashed.var > baseline.var);
/// ```
#[derive(Clone, Debug)]
pub struct StressEngine {
    simulator: Simulator,
}

impl StressEngine {
    /// Create a stress engine over a validated base configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            simulator: Simulator::new(config),
        }
    }

    /// The base configuration every stressed run uses.
    pub fn config(&self) -> &SimulationConfig {
        self.simulator.config()
    }

    /// Run with raw stress factors.
    ///
    /// `factors[0]` multiplies the asset's volatility; `factors[1]`,
    /// when present, multiplies its expected return; further entries
    /// are ignored. An empty slice is invalid. The caller's asset is
    /// never mutated.
    ///
    /// Assets carrying two or more historical returns estimate their
    /// moments from that history, which a parameter shock does not
    /// touch; shocks only bite when the configured
    /// `expected_return`/`volatility` drive the run.
    pub fn run(&self, asset: &AssetParameters, factors: &[f64]) -> SimulationResult {
        if factors.is_empty() {
            return SimulationResult::failure(RiskError::invalid_input(
                "stress factors must not be empty",
            ));
        }
        let mut stressed = asset.clone();
        stressed.volatility *= factors[0];
        if let Some(&return_factor) = factors.get(1) {
            stressed.expected_return *= return_factor;
        }
        self.simulator.simulate_single_asset(&stressed)
    }

    /// Run a named scenario.
    pub fn run_scenario(
        &self,
        asset: &AssetParameters,
        scenario: &StressScenario,
    ) -> SimulationResult {
        self.simulator.simulate_single_asset(&scenario.apply(asset))
    }

    /// Run a batch of scenarios, fanned out across rayon workers.
    ///
    /// Output order matches input order regardless of scheduling, and
    /// with a seeded configuration each outcome equals its standalone
    /// [`run_scenario`](StressEngine::run_scenario) counterpart.
    pub fn run_batch(
        &self,
        asset: &AssetParameters,
        scenarios: &[StressScenario],
    ) -> Vec<StressOutcome> {
        scenarios
            .par_iter()
            .map(|scenario| StressOutcome {
                scenario: scenario.name().to_string(),
                result: self.run_scenario(asset, scenario),
            })
            .collect()
    }
}
