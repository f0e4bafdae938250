//! Multi-asset portfolio simulation.
//!
//! Each asset runs as an independent single-asset simulation on its
//! own child stream. When a correlation matrix is present, the
//! per-asset series are replaced (for aggregation only) by correlated
//! series built from Cholesky-transformed Gaussian shocks rescaled to
//! each asset's sample moments; the per-asset results keep their
//! independent statistics.

use risk_core::stats::{
    conditional_value_at_risk_sorted, mean, sample_moments, std_dev, value_at_risk_sorted,
};
use risk_core::RiskError;
use risk_models::{standard_normal, CorrelationMatrix};

use crate::rng::MonteCarloRng;
use crate::sim::allocation::normalise_weights;
use crate::sim::params::PortfolioParameters;
use crate::sim::result::{PortfolioSimulationResult, SimulationResult};
use crate::sim::simulator::Simulator;

impl Simulator {
    /// Simulate a portfolio's aggregate return and value distribution.
    ///
    /// Weights are normalised to sum to one before aggregation, so
    /// `[2.0, 2.0]` and `[0.5, 0.5]` describe the same portfolio. The
    /// portfolio return of simulation `i` is the weighted sum of asset
    /// returns; the portfolio value is the weighted sum of asset
    /// prices `w_j * initial_price_j * exp(r_j)`.
    ///
    /// `var_contributions[j]` is `w_j * VaR_j` from the independent
    /// per-asset runs, an additive attribution that ignores
    /// diversification (see
    /// [`PortfolioSimulationResult::undiversified_var`]).
    ///
    /// Any failure (empty portfolio, weight/asset count mismatch,
    /// degenerate weights, correlation matrix of the wrong dimension
    /// or not positive definite, or a per-asset model failure) comes
    /// back as a zeroed result with `success == false`; per-asset
    /// errors carry the asset symbol in the message.
    pub fn simulate_portfolio(&self, portfolio: &PortfolioParameters) -> PortfolioSimulationResult {
        match self.run_portfolio(portfolio) {
            Ok(result) => result,
            Err(err) => PortfolioSimulationResult::failure(err),
        }
    }

    fn run_portfolio(
        &self,
        portfolio: &PortfolioParameters,
    ) -> Result<PortfolioSimulationResult, RiskError> {
        let assets = &portfolio.assets;
        if assets.is_empty() {
            return Err(RiskError::invalid_input(
                "portfolio must contain at least one asset",
            ));
        }
        if assets.len() != portfolio.weights.len() {
            return Err(RiskError::invalid_input(format!(
                "asset count ({}) does not match weight count ({})",
                assets.len(),
                portfolio.weights.len()
            )));
        }
        let weights = normalise_weights(&portfolio.weights)?;
        if let Some(matrix) = &portfolio.correlation {
            if matrix.dim() != assets.len() {
                return Err(RiskError::invalid_input(format!(
                    "correlation matrix dimension ({}) does not match asset count ({})",
                    matrix.dim(),
                    assets.len()
                )));
            }
        }

        // One child stream per asset, spawned in asset order, so
        // portfolio runs are reproducible and assets never share
        // randomness.
        let mut parent = self.parent_rng();
        let mut asset_results = Vec::with_capacity(assets.len());
        for asset in assets {
            let mut child = parent.spawn_child();
            let result = self
                .run_single_asset(asset, &mut child)
                .map_err(|err| tag_asset(err, &asset.symbol))?;
            asset_results.push(result);
        }

        let n = self.config().num_simulations();
        let correlated = match &portfolio.correlation {
            Some(matrix) => Some(correlate_returns(matrix, &asset_results, n, &mut parent)?),
            None => None,
        };

        let mut portfolio_returns = Vec::with_capacity(n);
        let mut portfolio_values = Vec::with_capacity(n);
        for i in 0..n {
            let mut ret = 0.0;
            let mut value = 0.0;
            for (j, asset) in assets.iter().enumerate() {
                let r = match &correlated {
                    Some(series) => series[j][i],
                    None => asset_results[j].simulated_returns[i],
                };
                ret += weights[j] * r;
                value += weights[j] * asset.initial_price * r.exp();
            }
            portfolio_returns.push(ret);
            portfolio_values.push(value);
        }

        let confidence = self.config().confidence_level();
        let mut sorted = portfolio_returns.clone();
        sorted.sort_by(f64::total_cmp);

        let var_contributions = weights
            .iter()
            .zip(&asset_results)
            .map(|(w, result)| w * result.var)
            .collect();

        Ok(PortfolioSimulationResult {
            portfolio_var: value_at_risk_sorted(&sorted, confidence),
            portfolio_cvar: conditional_value_at_risk_sorted(&sorted, confidence),
            expected_return: mean(&portfolio_returns),
            portfolio_volatility: std_dev(&portfolio_returns),
            portfolio_returns,
            portfolio_values,
            asset_results,
            var_contributions,
            success: true,
            error_message: None,
        })
    }
}

/// Prefix an asset-level error with the asset symbol, keeping its
/// kind.
fn tag_asset(err: RiskError, symbol: &str) -> RiskError {
    let detail = match &err.message {
        Some(message) => format!("asset {symbol}: {message}"),
        None => format!("asset {symbol}: {}", err.kind),
    };
    RiskError::new(err.kind).with_message(detail)
}

/// Correlated per-asset return series.
///
/// Draws a fresh standard-normal vector per simulation, applies the
/// Cholesky factor, and rescales component `j` by the sample moments
/// of asset `j`'s independent run. Exact for Gaussian marginals; for
/// fat-tailed or path-dependent models this imposes the correlation on
/// matched first and second moments only.
fn correlate_returns(
    matrix: &CorrelationMatrix,
    asset_results: &[SimulationResult],
    n: usize,
    parent: &mut MonteCarloRng,
) -> Result<Vec<Vec<f64>>, RiskError> {
    let factor = matrix.cholesky()?;
    let moments: Vec<(f64, f64)> = asset_results
        .iter()
        .map(|result| sample_moments(&result.simulated_returns))
        .collect();

    let mut rng = parent.spawn_child();
    let mut series: Vec<Vec<f64>> = (0..asset_results.len())
        .map(|_| Vec::with_capacity(n))
        .collect();
    let mut shocks = vec![0.0; asset_results.len()];
    for _ in 0..n {
        for slot in shocks.iter_mut() {
            *slot = standard_normal(&mut rng);
        }
        factor.transform_in_place(&mut shocks);
        for (j, series_j) in series.iter_mut().enumerate() {
            let (mean_j, std_j) = moments[j];
            series_j.push(mean_j + std_j * shocks[j]);
        }
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::config::SimulationConfig;
    use crate::sim::params::AssetParameters;
    use approx::assert_relative_eq;

    fn simulator(n: usize, seed: u64) -> Simulator {
        Simulator::new(
            SimulationConfig::builder()
                .num_simulations(n)
                .seed(seed)
                .build()
                .unwrap(),
        )
    }

    fn two_assets() -> Vec<AssetParameters> {
        vec![
            AssetParameters::new("AAA", 100.0, 0.05, 0.2),
            AssetParameters::new("BBB", 50.0, 0.03, 0.3),
        ]
    }

    #[test]
    fn test_single_asset_portfolio_matches_asset_run() {
        let portfolio = PortfolioParameters::new(
            vec![AssetParameters::new("AAA", 100.0, 0.05, 0.2)],
            vec![2.5],
        );
        let result = simulator(1_000, 7).simulate_portfolio(&portfolio);

        assert!(result.success);
        assert_eq!(
            result.portfolio_returns,
            result.asset_results[0].simulated_returns
        );
        assert_eq!(
            result.portfolio_values,
            result.asset_results[0].simulated_prices
        );
        assert_relative_eq!(
            result.portfolio_var,
            result.asset_results[0].var,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_empty_portfolio_rejected() {
        let portfolio = PortfolioParameters::new(Vec::new(), Vec::new());
        let result = simulator(100, 1).simulate_portfolio(&portfolio);

        assert!(!result.success);
        assert!(result
            .error_message
            .as_deref()
            .unwrap()
            .contains("at least one asset"));
    }

    #[test]
    fn test_weight_count_mismatch_rejected() {
        let portfolio = PortfolioParameters::new(two_assets(), vec![0.5]);
        let result = simulator(100, 1).simulate_portfolio(&portfolio);

        assert!(!result.success);
        assert!(result
            .error_message
            .as_deref()
            .unwrap()
            .contains("does not match weight count"));
    }

    #[test]
    fn test_asset_failure_names_the_asset() {
        let assets = vec![
            AssetParameters::new("GOOD", 100.0, 0.05, 0.2),
            AssetParameters::new("BAD", -1.0, 0.05, 0.2),
        ];
        let portfolio = PortfolioParameters::new(assets, vec![0.5, 0.5]);
        let result = simulator(100, 1).simulate_portfolio(&portfolio);

        assert!(!result.success);
        let message = result.error_message.as_deref().unwrap();
        assert!(message.contains("asset BAD"), "{message}");
    }

    #[test]
    fn test_weight_scaling_is_invariant() {
        let scaled = PortfolioParameters::new(two_assets(), vec![2.0, 2.0]);
        let unit = PortfolioParameters::new(two_assets(), vec![0.5, 0.5]);

        let scaled_result = simulator(2_000, 11).simulate_portfolio(&scaled);
        let unit_result = simulator(2_000, 11).simulate_portfolio(&unit);

        assert!(scaled_result.success && unit_result.success);
        assert_eq!(
            scaled_result.portfolio_returns,
            unit_result.portfolio_returns
        );
        assert_eq!(scaled_result.portfolio_var, unit_result.portfolio_var);
    }

    #[test]
    fn test_var_contributions_use_normalised_weights() {
        let portfolio = PortfolioParameters::new(two_assets(), vec![3.0, 1.0]);
        let result = simulator(1_000, 3).simulate_portfolio(&portfolio);

        assert!(result.success);
        assert_relative_eq!(
            result.var_contributions[0],
            0.75 * result.asset_results[0].var,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            result.var_contributions[1],
            0.25 * result.asset_results[1].var,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_correlation_dimension_mismatch_rejected() {
        let portfolio = PortfolioParameters::new(two_assets(), vec![0.5, 0.5])
            .with_correlation(CorrelationMatrix::identity(3));
        let result = simulator(100, 1).simulate_portfolio(&portfolio);

        assert!(!result.success);
        assert!(result
            .error_message
            .as_deref()
            .unwrap()
            .contains("correlation matrix dimension"));
    }

    #[test]
    fn test_non_positive_definite_matrix_rejected() {
        let matrix = CorrelationMatrix::from_flat(
            3,
            vec![1.0, 0.9, -0.9, 0.9, 1.0, 0.9, -0.9, 0.9, 1.0],
        )
        .unwrap();
        let portfolio = PortfolioParameters::new(
            vec![
                AssetParameters::new("A", 100.0, 0.05, 0.2),
                AssetParameters::new("B", 100.0, 0.05, 0.2),
                AssetParameters::new("C", 100.0, 0.05, 0.2),
            ],
            vec![1.0, 1.0, 1.0],
        )
        .with_correlation(matrix);
        let result = simulator(100, 1).simulate_portfolio(&portfolio);

        assert!(!result.success);
        assert!(result
            .error_message
            .as_deref()
            .unwrap()
            .contains("not positive definite"));
    }

    #[test]
    fn test_positive_correlation_raises_portfolio_volatility() {
        let correlated = PortfolioParameters::new(two_assets(), vec![0.5, 0.5])
            .with_correlation(
                CorrelationMatrix::from_flat(2, vec![1.0, 0.9, 0.9, 1.0]).unwrap(),
            );
        let independent = PortfolioParameters::new(two_assets(), vec![0.5, 0.5]);

        let sim = simulator(20_000, 17);
        let correlated_result = sim.simulate_portfolio(&correlated);
        let independent_result = sim.simulate_portfolio(&independent);

        assert!(correlated_result.success && independent_result.success);
        assert!(
            correlated_result.portfolio_volatility > independent_result.portfolio_volatility,
            "rho = 0.9 should widen the portfolio distribution: {} vs {}",
            correlated_result.portfolio_volatility,
            independent_result.portfolio_volatility
        );
    }

    #[test]
    fn test_identity_correlation_keeps_asset_statistics() {
        // Identity matrix goes down the correlated path but must keep
        // each marginal's sample moments (rescaled fresh shocks).
        let portfolio = PortfolioParameters::new(two_assets(), vec![0.5, 0.5])
            .with_correlation(CorrelationMatrix::identity(2));
        let result = simulator(50_000, 29).simulate_portfolio(&portfolio);

        assert!(result.success);
        let independent_vol = {
            let a = std_dev(&result.asset_results[0].simulated_returns);
            let b = std_dev(&result.asset_results[1].simulated_returns);
            (0.25 * a * a + 0.25 * b * b).sqrt()
        };
        assert_relative_eq!(
            result.portfolio_volatility,
            independent_vol,
            max_relative = 0.05
        );
    }

    #[test]
    fn test_portfolio_expected_return_is_weighted_mean() {
        let portfolio = PortfolioParameters::new(two_assets(), vec![0.5, 0.5]);
        let result = simulator(2_000, 13).simulate_portfolio(&portfolio);

        let want = 0.5 * mean(&result.asset_results[0].simulated_returns)
            + 0.5 * mean(&result.asset_results[1].simulated_returns);
        assert_relative_eq!(result.expected_return, want, epsilon = 1e-12);
    }
}
