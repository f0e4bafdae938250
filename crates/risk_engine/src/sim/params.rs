//! Asset and portfolio simulation inputs.

use risk_core::RiskError;
use risk_models::correlation::CorrelationMatrix;

/// One asset's simulation inputs.
///
/// `historical_returns` holds log-returns, `r = ln(P_t / P_{t-1})`.
/// When at least two observations are present the simulator estimates
/// the return distribution from their sample moments; otherwise it
/// falls back to `expected_return` and `volatility`.
///
/// `weight` only matters inside a portfolio and defaults to 1.
///
/// # Examples
///
/// ```
/// use risk_engine::sim::AssetParameters;
///
/// let asset = AssetParameters::new("ACME", 100.0, 0.05, 0.2)
///     .with_historical_returns(vec![0.01, -0.02, 0.015])
///     .with_weight(0.6);
/// assert!(asset.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetParameters {
    /// Ticker or identifier; must be non-empty.
    pub symbol: String,
    /// Spot price, strictly positive.
    pub initial_price: f64,
    /// Per-period expected log-return, used when history is too short.
    pub expected_return: f64,
    /// Per-period volatility, non-negative, used when history is too
    /// short.
    pub volatility: f64,
    /// Historical log-returns; may be empty.
    pub historical_returns: Vec<f64>,
    /// Portfolio weight before normalisation.
    pub weight: f64,
}

impl AssetParameters {
    /// Create an asset with no history and unit weight.
    pub fn new(
        symbol: impl Into<String>,
        initial_price: f64,
        expected_return: f64,
        volatility: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            initial_price,
            expected_return,
            volatility,
            historical_returns: Vec::new(),
            weight: 1.0,
        }
    }

    /// Attach a historical log-return series.
    pub fn with_historical_returns(mut self, returns: Vec<f64>) -> Self {
        self.historical_returns = returns;
        self
    }

    /// Set the portfolio weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Check the asset's invariants.
    ///
    /// # Errors
    /// `InvalidInput` naming the violated bound: empty symbol,
    /// non-positive or non-finite price, negative or non-finite
    /// volatility, non-finite expected return.
    pub fn validate(&self) -> Result<(), RiskError> {
        if self.symbol.is_empty() {
            return Err(RiskError::invalid_input("asset symbol must not be empty"));
        }
        if !self.initial_price.is_finite() || self.initial_price <= 0.0 {
            return Err(RiskError::invalid_input(format!(
                "initial price must be positive, got {}",
                self.initial_price
            )));
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(RiskError::invalid_input(format!(
                "volatility must be non-negative, got {}",
                self.volatility
            )));
        }
        if !self.expected_return.is_finite() {
            return Err(RiskError::invalid_input(format!(
                "expected return must be finite, got {}",
                self.expected_return
            )));
        }
        Ok(())
    }
}

/// Multi-asset simulation inputs.
///
/// Weights are renormalised to sum to one before use, so `[2, 2]` and
/// `[0.5, 0.5]` describe the same portfolio. Without a correlation
/// matrix the assets are simulated independently; with one, its
/// dimension must equal the asset count.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioParameters {
    /// Assets in portfolio order.
    pub assets: Vec<AssetParameters>,
    /// Raw weights, same length as `assets`.
    pub weights: Vec<f64>,
    /// Optional asset correlation structure.
    pub correlation: Option<CorrelationMatrix>,
}

impl PortfolioParameters {
    /// Create an uncorrelated portfolio.
    pub fn new(assets: Vec<AssetParameters>, weights: Vec<f64>) -> Self {
        Self {
            assets,
            weights,
            correlation: None,
        }
    }

    /// Attach a correlation matrix.
    pub fn with_correlation(mut self, correlation: CorrelationMatrix) -> Self {
        self.correlation = Some(correlation);
        self
    }
}
