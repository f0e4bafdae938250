//! # risk_models — Distribution Models (L2)
//!
//! The return-generating processes behind the simulation engine, plus
//! the correlation structure used to couple several of them.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                ReturnModel                  │
//! │   Normal │ StudentT │ Garch │ Empirical     │  models/
//! └──────────────────────┬──────────────────────┘
//!                        │ sample(rng)
//!                        ▼
//!            RandomSource (risk_core)
//!
//! ┌─────────────────────────────────────────────┐
//! │  CorrelationMatrix ── cholesky ──► L        │  correlation
//! │  L · z : independent → correlated normals   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Models are plain values with static dispatch through the
//! [`ReturnModel`] enum; stateful models (GARCH) are cloned per
//! simulation run and reset before use, never shared across concurrent
//! runs. All randomness flows through [`risk_core::RandomSource`], so a
//! model never owns a generator.
//!
//! ## Usage
//!
//! ```
//! use risk_core::RandomSource;
//! use risk_models::{DistributionKind, ReturnModel};
//!
//! struct Half;
//! impl RandomSource for Half {
//!     fn next_uniform(&mut self) -> f64 {
//!         0.5
//!     }
//! }
//!
//! let mut model = ReturnModel::from_config(DistributionKind::Normal, &[]).unwrap();
//! assert_eq!(model.model_name(), "Normal");
//!
//! let draw = model.sample(&mut Half);
//! assert!(draw.is_finite());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: derive `Serialize`/`Deserialize` on [`DistributionKind`],
//!   [`CorrelationMatrix`], and the error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod correlation;
pub mod error;
pub mod models;

pub use correlation::{CholeskyFactor, CorrelationError, CorrelationMatrix};
pub use error::ModelError;
pub use models::{
    standard_normal, DistributionKind, EmpiricalModel, GarchModel, NormalModel, ReturnModel,
    StudentTModel,
};
