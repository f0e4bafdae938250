//! Simulation output types.
//!
//! Both result types embed their own success flag and error message
//! instead of being wrapped in `Result`: a failed run still returns a
//! well-formed (zeroed) result object, and callers branch on
//! `success`. Internal code keeps using `Result` and converts at the
//! public boundary via [`SimulationResult::failure`].

use std::collections::BTreeMap;

use risk_core::stats::{
    conditional_value_at_risk_sorted, excess_kurtosis, mean, percentile_of_sorted, skewness,
    std_dev, value_at_risk_sorted, DEFAULT_PERCENTILES,
};
use risk_core::RiskError;

/// Outcome of one single-asset simulation.
///
/// `simulated_returns` are per-period log-returns;
/// `simulated_prices[i]` is `initial_price * exp(simulated_returns[i])`.
/// `var` and `cvar` are positive loss magnitudes at the configured
/// confidence level. `percentiles` maps the fixed levels
/// [1, 5, 10, 25, 50, 75, 90, 95, 99] to nearest-rank return values.
///
/// On failure every statistic is zero, the series are empty, `success`
/// is `false`, and `error_message` says why.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// Simulated per-period log-returns, one per simulation.
    pub simulated_returns: Vec<f64>,
    /// Simulated prices, parallel to `simulated_returns`.
    pub simulated_prices: Vec<f64>,
    /// Value at Risk as a positive loss magnitude.
    pub var: f64,
    /// Conditional Value at Risk; never below `var`.
    pub cvar: f64,
    /// Sample mean of the simulated returns.
    pub expected_value: f64,
    /// Bessel-corrected sample standard deviation.
    pub standard_deviation: f64,
    /// Population skewness of the simulated returns.
    pub skewness: f64,
    /// Population excess kurtosis of the simulated returns.
    pub kurtosis: f64,
    /// Nearest-rank return percentiles keyed by level.
    pub percentiles: BTreeMap<u32, f64>,
    /// Whether the run completed.
    pub success: bool,
    /// Failure description when `success` is `false`.
    pub error_message: Option<String>,
}

impl SimulationResult {
    /// Reduce simulated series into a successful result.
    ///
    /// Sorts once and derives VaR, CVaR, and the percentile table from
    /// the sorted copy; the moment statistics come from the raw series.
    pub fn from_series(returns: Vec<f64>, prices: Vec<f64>, confidence: f64) -> Self {
        let mut sorted = returns.clone();
        sorted.sort_by(f64::total_cmp);

        let percentiles = DEFAULT_PERCENTILES
            .iter()
            .map(|&level| (level, percentile_of_sorted(&sorted, level as f64 / 100.0)))
            .collect();

        Self {
            var: value_at_risk_sorted(&sorted, confidence),
            cvar: conditional_value_at_risk_sorted(&sorted, confidence),
            expected_value: mean(&returns),
            standard_deviation: std_dev(&returns),
            skewness: skewness(&returns),
            kurtosis: excess_kurtosis(&returns),
            percentiles,
            simulated_returns: returns,
            simulated_prices: prices,
            success: true,
            error_message: None,
        }
    }

    /// A zeroed result carrying the failure description.
    pub fn failure(err: RiskError) -> Self {
        Self {
            simulated_returns: Vec::new(),
            simulated_prices: Vec::new(),
            var: 0.0,
            cvar: 0.0,
            expected_value: 0.0,
            standard_deviation: 0.0,
            skewness: 0.0,
            kurtosis: 0.0,
            percentiles: BTreeMap::new(),
            success: false,
            error_message: Some(err.to_string()),
        }
    }
}

/// Outcome of one portfolio simulation.
///
/// `portfolio_returns[i]` is the weight-averaged asset return at
/// simulation `i`; `portfolio_values[i]` is the weight-averaged asset
/// value `Σ w_j · P0_j · exp(r_j[i])`. Per-asset results keep their
/// independent statistics even when a correlation matrix reshapes the
/// portfolio series.
///
/// `var_contributions[j]` is `w_j · VaR_j`, an additive approximation
/// rather than a Euler decomposition; the contributions of a
/// diversified portfolio sum to more than its VaR.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioSimulationResult {
    /// Weighted portfolio log-returns, one per simulation.
    pub portfolio_returns: Vec<f64>,
    /// Weighted portfolio values, parallel to `portfolio_returns`.
    pub portfolio_values: Vec<f64>,
    /// Portfolio Value at Risk as a positive loss magnitude.
    pub portfolio_var: f64,
    /// Portfolio Conditional Value at Risk; never below `portfolio_var`.
    pub portfolio_cvar: f64,
    /// Sample mean of the portfolio returns.
    pub expected_return: f64,
    /// Bessel-corrected standard deviation of the portfolio returns.
    pub portfolio_volatility: f64,
    /// Per-asset results from the independent runs, in asset order.
    pub asset_results: Vec<SimulationResult>,
    /// Weight-scaled per-asset VaR, in asset order.
    pub var_contributions: Vec<f64>,
    /// Whether the run completed.
    pub success: bool,
    /// Failure description when `success` is `false`.
    pub error_message: Option<String>,
}

impl PortfolioSimulationResult {
    /// A zeroed result carrying the failure description.
    pub fn failure(err: RiskError) -> Self {
        Self {
            portfolio_returns: Vec::new(),
            portfolio_values: Vec::new(),
            portfolio_var: 0.0,
            portfolio_cvar: 0.0,
            expected_return: 0.0,
            portfolio_volatility: 0.0,
            asset_results: Vec::new(),
            var_contributions: Vec::new(),
            success: false,
            error_message: Some(err.to_string()),
        }
    }

    /// Sum of the weight-scaled per-asset VaRs: the portfolio VaR a
    /// perfectly correlated book would carry.
    pub fn undiversified_var(&self) -> f64 {
        self.var_contributions.iter().sum()
    }

    /// Undiversified VaR over portfolio VaR.
    ///
    /// Above 1 means diversification is reducing tail risk. Defined as
    /// 1 when the portfolio VaR is not a positive number.
    pub fn diversification_ratio(&self) -> f64 {
        if self.portfolio_var > 0.0 {
            self.undiversified_var() / self.portfolio_var
        } else {
            1.0
        }
    }
}
