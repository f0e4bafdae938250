//! Model construction and update errors.

use risk_core::RiskError;
use thiserror::Error;

/// Distribution model errors.
///
/// Raised at construction or parameter update; sampling itself is
/// infallible once a model exists.
///
/// # Variants
/// - `NonStationaryGarch`: `alpha + beta >= 1`, the variance recursion diverges
/// - `InvalidGarchParameter`: non-positive omega or negative alpha/beta
/// - `InvalidDegreesOfFreedom`: Student-t needs at least one degree of freedom
/// - `InvalidScale`: negative scale or standard deviation
/// - `EmptySamplePool`: empirical model with nothing to resample
/// - `MissingParameters`: parameter slice shorter than the model requires
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelError {
    /// The GARCH variance recursion has no finite long-run level.
    #[error("non-stationary garch: alpha {alpha} + beta {beta} must be below 1")]
    NonStationaryGarch {
        /// ARCH coefficient.
        alpha: f64,
        /// Persistence coefficient.
        beta: f64,
    },

    /// GARCH coefficients outside their admissible ranges.
    #[error("invalid garch parameters: omega {omega} must be positive, alpha {alpha} and beta {beta} non-negative")]
    InvalidGarchParameter {
        /// Baseline variance.
        omega: f64,
        /// ARCH coefficient.
        alpha: f64,
        /// Persistence coefficient.
        beta: f64,
    },

    /// Student-t needs at least one degree of freedom.
    #[error("degrees of freedom must be at least 1, got {0}")]
    InvalidDegreesOfFreedom(f64),

    /// Negative dispersion parameter.
    #[error("scale must be non-negative, got {0}")]
    InvalidScale(f64),

    /// Empirical model constructed over an empty sample pool.
    #[error("empirical sample pool is empty")]
    EmptySamplePool,

    /// Parameter slice shorter than the model requires.
    #[error("parameter list too short: got {got}, need {need}")]
    MissingParameters {
        /// Number of parameters provided.
        got: usize,
        /// Number of parameters required.
        need: usize,
    },
}

impl From<ModelError> for RiskError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::NonStationaryGarch { .. } => RiskError::numerical_failure(err.to_string()),
            _ => RiskError::invalid_input(err.to_string()),
        }
    }
}
