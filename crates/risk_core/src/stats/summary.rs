//! One-shot summary reduction over a return series.

use crate::stats::moments::{excess_kurtosis, mean, skewness, std_dev};
use crate::stats::tail::{conditional_value_at_risk_sorted, value_at_risk_sorted};

/// Moment and tail statistics of a return series in one value.
///
/// Produced by a single pass plus one sort; the embedded VaR and CVaR
/// follow the crate-wide positive-loss convention.
///
/// # Examples
/// ```
/// use risk_core::stats::RiskSummary;
///
/// let summary = RiskSummary::from_returns(&[0.05, 0.02, -0.03, 0.01, -0.08], 0.95);
/// assert_eq!(summary.observations, 5);
/// assert!((summary.var - 0.08).abs() < 1e-12);
/// assert!(summary.cvar >= summary.var);
/// assert_eq!(summary.min, -0.08);
/// assert_eq!(summary.max, 0.05);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskSummary {
    /// Number of observations reduced.
    pub observations: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Bessel-corrected standard deviation.
    pub std_dev: f64,
    /// Population skewness.
    pub skewness: f64,
    /// Excess kurtosis (normal = 0).
    pub excess_kurtosis: f64,
    /// Value at Risk at the requested confidence level.
    pub var: f64,
    /// Conditional Value at Risk at the requested confidence level.
    pub cvar: f64,
    /// Smallest observation (0.0 when empty).
    pub min: f64,
    /// Largest observation (0.0 when empty).
    pub max: f64,
}

impl RiskSummary {
    /// Reduce a return series at one confidence level.
    ///
    /// An empty series yields the all-zero summary; out-of-range
    /// confidence levels zero only the tail measures.
    pub fn from_returns(returns: &[f64], confidence: f64) -> Self {
        let mut sorted = returns.to_vec();
        sorted.sort_by(f64::total_cmp);
        let (min, max) = match (sorted.first(), sorted.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => (0.0, 0.0),
        };
        Self {
            observations: returns.len(),
            mean: mean(returns),
            std_dev: std_dev(returns),
            skewness: skewness(returns),
            excess_kurtosis: excess_kurtosis(returns),
            var: value_at_risk_sorted(&sorted, confidence),
            cvar: conditional_value_at_risk_sorted(&sorted, confidence),
            min,
            max,
        }
    }
}
