//! Risk-adjusted performance ratios on per-period log-return series.
//!
//! The single-series ratios follow the degenerate-input rule of the rest
//! of the crate (0.0 when undefined); the two-series measures return an
//! error instead, because a length mismatch is a caller bug rather than
//! a degenerate sample.

use crate::error::RiskError;
use crate::stats::moments::{mean, std_dev, variance};

/// Sharpe ratio against a per-period risk-free rate.
///
/// 0.0 when the series has fewer than two observations or zero
/// dispersion.
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64) -> f64 {
    let sigma = std_dev(returns);
    if sigma == 0.0 {
        return 0.0;
    }
    (mean(returns) - risk_free_rate) / sigma
}

/// Sortino ratio: excess return over downside deviation.
///
/// Downside deviation is the root mean square of the shortfalls below
/// the risk-free rate, taken over all observations. 0.0 when the series
/// never dips below the rate.
pub fn sortino_ratio(returns: &[f64], risk_free_rate: f64) -> f64 {
    if returns.len() < 2 {
        return 0.0;
    }
    let downside_ms = returns
        .iter()
        .map(|r| {
            let shortfall = (r - risk_free_rate).min(0.0);
            shortfall * shortfall
        })
        .sum::<f64>()
        / returns.len() as f64;
    let downside = downside_ms.sqrt();
    if downside == 0.0 {
        return 0.0;
    }
    (mean(returns) - risk_free_rate) / downside
}

/// Maximum drawdown of the compounded wealth path, as a positive
/// fraction of the running peak.
///
/// The wealth path compounds the log returns from 1.0; the result lies
/// in [0, 1). 0.0 for an empty or monotonically rising series.
pub fn max_drawdown(returns: &[f64]) -> f64 {
    let mut log_wealth = 0.0;
    let mut log_peak = 0.0;
    let mut worst = 0.0_f64;
    for r in returns {
        log_wealth += r;
        if log_wealth > log_peak {
            log_peak = log_wealth;
        }
        let drawdown = 1.0 - (log_wealth - log_peak).exp();
        if drawdown > worst {
            worst = drawdown;
        }
    }
    worst
}

/// Sample volatility scaled to an annual horizon.
///
/// 0.0 when `periods_per_year` is not positive.
pub fn annualised_volatility(returns: &[f64], periods_per_year: f64) -> f64 {
    if periods_per_year <= 0.0 {
        return 0.0;
    }
    std_dev(returns) * periods_per_year.sqrt()
}

/// Beta of a return series against a benchmark series.
///
/// # Errors
/// - `InvalidInput` when the series lengths differ
/// - `InsufficientData` with fewer than two paired observations
/// - `NumericalFailure` when the benchmark has zero variance
pub fn beta(returns: &[f64], benchmark: &[f64]) -> Result<f64, RiskError> {
    if returns.len() != benchmark.len() {
        return Err(RiskError::invalid_input(format!(
            "series length {} does not match benchmark length {}",
            returns.len(),
            benchmark.len()
        )));
    }
    if returns.len() < 2 {
        return Err(RiskError::insufficient_data(returns.len(), 2));
    }
    let bench_var = variance(benchmark);
    if bench_var == 0.0 {
        return Err(RiskError::numerical_failure("benchmark variance is zero"));
    }
    Ok(covariance(returns, benchmark) / bench_var)
}

/// Information ratio: mean active return over its own dispersion.
///
/// 0.0 when the active returns are constant.
///
/// # Errors
/// - `InvalidInput` when the series lengths differ
/// - `InsufficientData` with fewer than two paired observations
pub fn information_ratio(returns: &[f64], benchmark: &[f64]) -> Result<f64, RiskError> {
    if returns.len() != benchmark.len() {
        return Err(RiskError::invalid_input(format!(
            "series length {} does not match benchmark length {}",
            returns.len(),
            benchmark.len()
        )));
    }
    if returns.len() < 2 {
        return Err(RiskError::insufficient_data(returns.len(), 2));
    }
    let active: Vec<f64> = returns
        .iter()
        .zip(benchmark.iter())
        .map(|(r, b)| r - b)
        .collect();
    let sigma = std_dev(&active);
    if sigma == 0.0 {
        return Ok(0.0);
    }
    Ok(mean(&active) / sigma)
}

/// Bessel-corrected sample covariance of equal-length series.
fn covariance(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 {
        return 0.0;
    }
    let mx = mean(xs);
    let my = mean(ys);
    xs.iter()
        .zip(ys.iter())
        .map(|(x, y)| (x - mx) * (y - my))
        .sum::<f64>()
        / (n - 1) as f64
}
