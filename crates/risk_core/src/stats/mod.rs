//! Statistical reductions over return series.
//!
//! Layout mirrors the estimation pipeline:
//!
//! ```text
//! stats/
//! ├── moments.rs     — mean, variance, skewness, kurtosis
//! ├── tail.rs        — empirical VaR, CVaR, percentiles, tail profiles
//! ├── parametric.rs  — delta-normal and Cornish-Fisher estimators
//! ├── bootstrap.rs   — resampled VaR with confidence interval
//! ├── ratios.rs      — Sharpe, Sortino, drawdown, beta
//! └── summary.rs     — one-shot RiskSummary reduction
//! ```
//!
//! All functions treat their input as a sample of per-period log returns,
//! never mutate it, and follow one sign convention: VaR and CVaR are
//! reported as positive loss magnitudes.

pub mod bootstrap;
pub mod moments;
pub mod parametric;
pub mod ratios;
pub mod summary;
pub mod tail;

pub use bootstrap::{bootstrap_var, BootstrapVar};
pub use moments::{excess_kurtosis, mean, sample_moments, skewness, std_dev, variance};
pub use parametric::{cornish_fisher_var, parametric_cvar, parametric_var};
pub use ratios::{
    annualised_volatility, beta, information_ratio, max_drawdown, sharpe_ratio, sortino_ratio,
};
pub use summary::RiskSummary;
pub use tail::{
    conditional_value_at_risk, conditional_value_at_risk_sorted, percentile_of_sorted, percentiles,
    tail_risk_profile, value_at_risk, value_at_risk_sorted, TailRisk, DEFAULT_PERCENTILES,
};
