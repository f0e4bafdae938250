//! Stress scenario definition.

use risk_engine::AssetParameters;

/// A named deterministic shock to an asset's distribution parameters.
///
/// Both knobs are multipliers, matching the raw stress-factor
/// convention: `1.0` leaves a parameter untouched, `2.0` doubles it,
/// and a negative return multiplier reverses the drift. Applying a
/// scenario never mutates the input asset.
///
/// # Examples
///
/// ```
/// use risk_engine::AssetParameters;
/// use risk_scenarios::StressScenario;
///
/// let crash = StressScenario::new(
///     "Crash",
///     "Volatility triples, drift reverses",
///     3.0,
///     -1.5,
/// );
/// let asset = AssetParameters::new("ACME", 100.0, 0.04, 0.2);
/// let stressed = crash.apply(&asset);
///
/// assert_eq!(stressed.volatility, 0.6);
/// assert_eq!(stressed.expected_return, -0.06);
/// assert_eq!(asset.volatility, 0.2); // original untouched
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StressScenario {
    name: String,
    description: String,
    volatility_multiplier: f64,
    return_multiplier: f64,
}

impl StressScenario {
    /// Create a named scenario with a description.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        volatility_multiplier: f64,
        return_multiplier: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            volatility_multiplier,
            return_multiplier,
        }
    }

    /// Create a scenario whose description is its name.
    pub fn named(
        name: impl Into<String>,
        volatility_multiplier: f64,
        return_multiplier: f64,
    ) -> Self {
        let name = name.into();
        Self {
            description: name.clone(),
            name,
            volatility_multiplier,
            return_multiplier,
        }
    }

    /// Scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scenario description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Multiplier applied to the asset's volatility.
    pub fn volatility_multiplier(&self) -> f64 {
        self.volatility_multiplier
    }

    /// Multiplier applied to the asset's expected return.
    pub fn return_multiplier(&self) -> f64 {
        self.return_multiplier
    }

    /// Produce the stressed copy of an asset.
    ///
    /// Symbol, price, history, and weight carry over unchanged; only
    /// volatility and expected return are scaled.
    pub fn apply(&self, asset: &AssetParameters) -> AssetParameters {
        let mut stressed = asset.clone();
        stressed.volatility *= self.volatility_multiplier;
        stressed.expected_return *= self.return_multiplier;
        stressed
    }
}
