//! Monte Carlo simulation pipeline.
//!
//! A run flows through four stages:
//!
//! ```text
//!   SimulationConfig ---> Simulator ---> model draws ---> SimulationResult
//!        (validated)        |           (sequential,        (VaR, CVaR,
//!                           |            antithetic or       moments,
//!                           v            chunked)            percentiles)
//!                   PortfolioParameters
//!                           |
//!                           v
//!               PortfolioSimulationResult
//! ```
//!
//! Configuration is validated once at build time; the simulator itself
//! never panics on bad inputs and reports failures inside the result
//! values.

pub mod allocation;
pub mod config;
pub mod params;
pub mod result;
pub mod simulator;

mod parallel;
mod portfolio;

pub use allocation::{equal_weights, normalise_weights};
pub use config::{
    ConfigError, SimulationConfig, SimulationConfigBuilder, DEFAULT_CONFIDENCE_LEVEL,
    DEFAULT_NUM_SIMULATIONS, DEFAULT_TIME_HORIZON,
};
pub use params::{AssetParameters, PortfolioParameters};
pub use result::{PortfolioSimulationResult, SimulationResult};
pub use simulator::Simulator;
