//! Resampled VaR estimation.
//!
//! Bootstrapping quantifies how much the empirical VaR itself moves
//! under sampling noise: resample the series with replacement, measure
//! VaR on each resample, and report the spread of those estimates.

use crate::error::RiskError;
use crate::stats::moments::mean;
use crate::stats::tail::{percentile_of_sorted, value_at_risk};
use crate::traits::RandomSource;

/// Bootstrap VaR estimate with a 95% percentile confidence interval.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BootstrapVar {
    /// Mean VaR across resamples.
    pub var: f64,
    /// 2.5th percentile of the resampled VaR estimates.
    pub lower: f64,
    /// 97.5th percentile of the resampled VaR estimates.
    pub upper: f64,
}

/// Bootstrap the VaR of a return series.
///
/// Draws `resamples` same-length resamples with replacement through
/// `rng`, measures VaR at `confidence` on each, and summarises the
/// estimate distribution.
///
/// # Errors
/// - `InsufficientData` when the series has fewer than two observations
/// - `InvalidInput` when `resamples` is zero or `confidence` lies
///   outside (0, 1)
pub fn bootstrap_var<R: RandomSource>(
    returns: &[f64],
    confidence: f64,
    resamples: usize,
    rng: &mut R,
) -> Result<BootstrapVar, RiskError> {
    if returns.len() < 2 {
        return Err(RiskError::insufficient_data(returns.len(), 2));
    }
    if resamples == 0 {
        return Err(RiskError::invalid_input("resamples must be positive"));
    }
    if confidence <= 0.0 || confidence >= 1.0 {
        return Err(RiskError::invalid_input(format!(
            "confidence level {} outside (0, 1)",
            confidence
        )));
    }

    let n = returns.len();
    let mut resample = vec![0.0; n];
    let mut estimates = Vec::with_capacity(resamples);
    for _ in 0..resamples {
        for slot in resample.iter_mut() {
            let idx = ((rng.next_uniform() * n as f64) as usize).min(n - 1);
            *slot = returns[idx];
        }
        estimates.push(value_at_risk(&resample, confidence));
    }
    estimates.sort_by(f64::total_cmp);

    Ok(BootstrapVar {
        var: mean(&estimates),
        lower: percentile_of_sorted(&estimates, 0.025),
        upper: percentile_of_sorted(&estimates, 0.975),
    })
}
