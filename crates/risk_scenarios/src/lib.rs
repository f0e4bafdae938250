//! # risk_scenarios — Stress Testing (L4)
//!
//! Deterministic parameter shocks on top of the simulation engine:
//! define a scenario as a pair of multipliers, apply it to a copy of
//! the asset, and re-run the Monte Carlo simulation to see how the
//! tail moves.
//!
//! ```text
//! AssetParameters ──► StressScenario.apply() ──► stressed copy
//!                                                    │
//!                                                    ▼
//!                              Simulator (risk_engine) ──► SimulationResult
//! ```
//!
//! The catalogue in [`StressPreset`] covers the usual suspects (market
//! crash, volatility spike, bear market, stagflation, flash rally);
//! [`StressEngine`] also accepts raw factor slices and ad-hoc
//! [`StressScenario`] values, and runs batches in parallel with
//! deterministic output order.
//!
//! ## Usage
//!
//! ```
//! use risk_engine::{AssetParameters, SimulationConfig};
//! use risk_scenarios::{worst_case, StressEngine, StressPreset};
//!
//! let config = SimulationConfig::builder()
//!     .num_simulations(2_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let engine = StressEngine::new(config);
//! let asset = AssetParameters::new("ACME", 100.0, 0.05, 0.2);
//!
//! let scenarios: Vec<_> = StressPreset::all()
//!     .into_iter()
//!     .map(|preset| preset.scenario())
//!     .collect();
//! let outcomes = engine.run_batch(&asset, &scenarios);
//!
//! let worst = worst_case(&outcomes).unwrap();
//! assert_eq!(worst.scenario, "Market Crash");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: derive `Serialize`/`Deserialize` on the scenario and
//!   outcome types (pulls in the engine's `serde` support)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod scenarios;

pub use scenarios::{worst_case, StressEngine, StressOutcome, StressPreset, StressScenario};
