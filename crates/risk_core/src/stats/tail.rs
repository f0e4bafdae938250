//! Empirical tail-risk measures over simulated or historical returns.
//!
//! Conventions shared by every function here:
//!
//! - Inputs are per-period returns; losses are negative returns.
//! - VaR and CVaR are reported as positive loss magnitudes.
//! - The tail index at confidence `c` over `n` observations is
//!   `floor((1 - c) * n)` clamped to `[0, n - 1]`; VaR is the negated
//!   sorted return at that index, CVaR the negated average of every
//!   sorted return at or below it (so CVaR >= VaR always holds).
//! - A confidence level outside the open interval (0, 1) or an empty
//!   series yields 0.0 rather than an error.
//! - Inputs are never reordered; sorting happens on a private copy.

use std::collections::BTreeMap;

/// Percentile levels reported in every simulation result.
pub const DEFAULT_PERCENTILES: [u32; 9] = [1, 5, 10, 25, 50, 75, 90, 95, 99];

/// Tail measures at one confidence level.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TailRisk {
    /// Confidence level in (0, 1).
    pub confidence: f64,
    /// Value at Risk as a positive loss.
    pub var: f64,
    /// Conditional Value at Risk (expected shortfall) as a positive loss.
    pub cvar: f64,
}

/// Index of the tail boundary in an ascending sort of `n` observations.
#[inline]
fn tail_index(confidence: f64, n: usize) -> usize {
    let raw = ((1.0 - confidence) * n as f64).floor() as usize;
    raw.min(n - 1)
}

#[inline]
fn confidence_in_range(confidence: f64) -> bool {
    confidence > 0.0 && confidence < 1.0
}

fn sorted_copy(returns: &[f64]) -> Vec<f64> {
    let mut sorted = returns.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Value at Risk of an already ascending-sorted return series.
///
/// Callers that need several tail measures from one series should sort
/// once and use the `_sorted` variants.
pub fn value_at_risk_sorted(sorted: &[f64], confidence: f64) -> f64 {
    if sorted.is_empty() || !confidence_in_range(confidence) {
        return 0.0;
    }
    -sorted[tail_index(confidence, sorted.len())]
}

/// Conditional Value at Risk of an already ascending-sorted return series.
pub fn conditional_value_at_risk_sorted(sorted: &[f64], confidence: f64) -> f64 {
    if sorted.is_empty() || !confidence_in_range(confidence) {
        return 0.0;
    }
    let tail = &sorted[..=tail_index(confidence, sorted.len())];
    -(tail.iter().sum::<f64>() / tail.len() as f64)
}

/// Value at Risk of a return series at the given confidence level.
///
/// # Examples
/// ```
/// use risk_core::stats::value_at_risk;
///
/// let returns = [0.05, 0.02, -0.03, 0.01, -0.08];
/// assert!((value_at_risk(&returns, 0.95) - 0.08).abs() < 1e-12);
/// ```
pub fn value_at_risk(returns: &[f64], confidence: f64) -> f64 {
    if returns.is_empty() || !confidence_in_range(confidence) {
        return 0.0;
    }
    value_at_risk_sorted(&sorted_copy(returns), confidence)
}

/// Conditional Value at Risk (expected shortfall) of a return series.
///
/// Averages every sorted return at or below the VaR index, so the result
/// is never smaller than [`value_at_risk`] at the same level.
pub fn conditional_value_at_risk(returns: &[f64], confidence: f64) -> f64 {
    if returns.is_empty() || !confidence_in_range(confidence) {
        return 0.0;
    }
    conditional_value_at_risk_sorted(&sorted_copy(returns), confidence)
}

/// Nearest-rank percentile of an already ascending-sorted series.
///
/// `fraction` is in [0, 1]; the rank is `round(fraction * (n - 1))`.
/// 0.0 for an empty series.
pub fn percentile_of_sorted(sorted: &[f64], fraction: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let f = fraction.clamp(0.0, 1.0);
    let idx = (f * (sorted.len() - 1) as f64).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

/// The [`DEFAULT_PERCENTILES`] of a return series, keyed by level.
///
/// # Examples
/// ```
/// use risk_core::stats::percentiles;
///
/// let returns: Vec<f64> = (0..101).map(|i| i as f64 / 100.0).collect();
/// let pcts = percentiles(&returns);
/// assert_eq!(pcts[&50], 0.5);
/// assert_eq!(pcts[&99], 0.99);
/// ```
pub fn percentiles(returns: &[f64]) -> BTreeMap<u32, f64> {
    let sorted = sorted_copy(returns);
    DEFAULT_PERCENTILES
        .iter()
        .map(|&p| (p, percentile_of_sorted(&sorted, p as f64 / 100.0)))
        .collect()
}

/// VaR and CVaR at several confidence levels from one sorted pass.
///
/// Levels outside (0, 1) are carried through with 0.0 measures, matching
/// the single-level functions.
pub fn tail_risk_profile(returns: &[f64], confidences: &[f64]) -> Vec<TailRisk> {
    let sorted = sorted_copy(returns);
    confidences
        .iter()
        .map(|&confidence| TailRisk {
            confidence,
            var: value_at_risk_sorted(&sorted, confidence),
            cvar: conditional_value_at_risk_sorted(&sorted, confidence),
        })
        .collect()
}
