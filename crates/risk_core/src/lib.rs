//! # risk_core — Foundation Layer (L1)
//!
//! Foundational building blocks for the tail-risk stack: the error
//! taxonomy shared by every layer, the [`RandomSource`] seam that all
//! samplers draw through, Gaussian density/distribution/quantile math,
//! and the statistical reductions (moments, VaR, CVaR, percentiles,
//! parametric and bootstrap estimators, performance ratios) applied to
//! simulated and historical return series.
//!
//! This crate performs no I/O, no logging, and no serialisation of its
//! own; results are plain values the caller is free to ship anywhere.
//!
//! ## Modules
//!
//! - [`error`]: `RiskError` with `InvalidInput` / `NumericalFailure` /
//!   `InsufficientData` kinds
//! - [`traits`]: the [`RandomSource`] uniform-variate stream
//! - [`math`]: standard normal pdf/cdf and inverse cdf
//! - [`stats`]: moment, tail, parametric, bootstrap, and ratio estimators
//!
//! ## Usage
//!
//! ```
//! use risk_core::stats::{conditional_value_at_risk, value_at_risk};
//!
//! let returns = [0.05, 0.02, -0.03, 0.01, -0.08];
//! let var = value_at_risk(&returns, 0.95);
//! let cvar = conditional_value_at_risk(&returns, 0.95);
//!
//! assert!((var - 0.08).abs() < 1e-12);
//! assert!(cvar >= var);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: derive `Serialize`/`Deserialize` on the value types
//!   (`RiskError`, `RiskSummary`, `TailRisk`, `BootstrapVar`)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod math;
pub mod stats;
pub mod traits;

pub use error::{RiskError, RiskErrorKind};
pub use traits::RandomSource;
