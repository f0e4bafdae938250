//! Error types for structured error handling.
//!
//! This module provides:
//! - `RiskErrorKind`: The three failure categories every operation maps into
//! - `RiskError`: A categorised error with an optional detail message
//!
//! Simulation entry points never panic on bad input and never keep global
//! error state: internal code propagates `RiskError` through `Result`, and
//! the outermost call embeds the rendered error in the returned result
//! value.

use std::fmt;
use thiserror::Error;

/// Risk error kind.
///
/// Categorises the type of failure.
///
/// # Variants
/// - `InvalidInput`: Parameters or data violate a documented precondition
/// - `NumericalFailure`: A computation produced no usable value
/// - `InsufficientData`: Not enough observations for the requested estimate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskErrorKind {
    /// Parameters or data violate a documented precondition.
    #[error("invalid input")]
    InvalidInput,

    /// A computation produced no usable value (divergence, non-positive
    /// definite matrix, unstable recursion).
    #[error("numerical failure")]
    NumericalFailure,

    /// Not enough observations for the requested estimate.
    #[error("insufficient data: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of observations provided.
        got: usize,
        /// Minimum required observations.
        need: usize,
    },
}

/// Categorised risk-engine error.
///
/// Carries the failure category plus an optional human-readable detail.
/// Construct through the named helpers rather than the fields.
///
/// # Examples
/// ```
/// use risk_core::error::RiskError;
///
/// let err = RiskError::invalid_input("weights must sum to a non-zero value");
/// assert!(err.is_invalid_input());
/// assert!(format!("{}", err).contains("weights"));
///
/// let err = RiskError::insufficient_data(1, 2);
/// assert!(err.is_insufficient_data());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskError {
    /// The failure category.
    pub kind: RiskErrorKind,

    /// Detail message.
    pub message: Option<String>,
}

impl RiskError {
    /// Create an error from a bare kind with no detail message.
    pub fn new(kind: RiskErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// Create an invalid-input error.
    ///
    /// # Arguments
    /// * `message` - Which precondition was violated
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            kind: RiskErrorKind::InvalidInput,
            message: Some(message.into()),
        }
    }

    /// Create a numerical-failure error.
    ///
    /// # Arguments
    /// * `message` - Which computation failed
    pub fn numerical_failure(message: impl Into<String>) -> Self {
        Self {
            kind: RiskErrorKind::NumericalFailure,
            message: Some(message.into()),
        }
    }

    /// Create an insufficient-data error.
    ///
    /// # Arguments
    /// * `got` - Number of observations provided
    /// * `need` - Minimum required observations
    pub fn insufficient_data(got: usize, need: usize) -> Self {
        Self {
            kind: RiskErrorKind::InsufficientData { got, need },
            message: None,
        }
    }

    /// Attach a detail message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Check whether the error is an invalid-input error.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self.kind, RiskErrorKind::InvalidInput)
    }

    /// Check whether the error is a numerical failure.
    pub fn is_numerical_failure(&self) -> bool {
        matches!(self.kind, RiskErrorKind::NumericalFailure)
    }

    /// Check whether the error is an insufficient-data error.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self.kind, RiskErrorKind::InsufficientData { .. })
    }
}

impl fmt::Display for RiskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(ref msg) = self.message {
            write!(f, ": {}", msg)?;
        }
        Ok(())
    }
}

impl std::error::Error for RiskError {}
