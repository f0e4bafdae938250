//! Stress scenario definition and execution.
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │                 Stress Engine                  │
//! ├────────────────────────────────────────────────┤
//! │  StressScenario - Named multiplier shock       │
//! │  StressPreset   - Ready-made catalogue         │
//! │  StressEngine   - Single + batch execution     │
//! │  StressOutcome  - Name-tagged result           │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! A scenario scales an asset's volatility and expected return before
//! handing the stressed copy to the simulation engine. Batches fan out
//! over rayon with deterministic output order.

mod engine;
mod presets;
mod stress;

pub use engine::{worst_case, StressEngine, StressOutcome};
pub use presets::StressPreset;
pub use stress::StressScenario;
