//! Preset scenarios for common stress tests.

use super::stress::StressScenario;

/// Catalogue of ready-made stress scenarios.
///
/// Each preset expands to a [`StressScenario`] with fixed multipliers;
/// the numbers are deliberately round calibration points, not fitted to
/// any historical episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StressPreset {
    /// Volatility triples and the drift reverses hard.
    MarketCrash,
    /// Pure volatility shock, drift untouched.
    VolatilitySpike,
    /// Sustained downturn: drift reverses at moderately elevated
    /// volatility.
    BearMarket,
    /// Drift halves and turns negative while volatility climbs.
    Stagflation,
    /// Sharp upside move: drift and volatility both double.
    FlashRally,
}

impl StressPreset {
    /// Every preset, in catalogue order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::MarketCrash,
            Self::VolatilitySpike,
            Self::BearMarket,
            Self::Stagflation,
            Self::FlashRally,
        ]
    }

    /// The downside presets used for worst-case reporting.
    pub fn severe_presets() -> Vec<Self> {
        vec![Self::MarketCrash, Self::BearMarket, Self::Stagflation]
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MarketCrash => "Market Crash",
            Self::VolatilitySpike => "Volatility Spike",
            Self::BearMarket => "Bear Market",
            Self::Stagflation => "Stagflation",
            Self::FlashRally => "Flash Rally",
        }
    }

    /// Description of the shock.
    pub fn description(&self) -> &'static str {
        match self {
            Self::MarketCrash => "Volatility triples, expected return reverses by 150%",
            Self::VolatilitySpike => "Volatility rises 150%, expected return unchanged",
            Self::BearMarket => "Expected return reverses, volatility up 50%",
            Self::Stagflation => "Expected return halves and reverses, volatility up 80%",
            Self::FlashRally => "Expected return and volatility both double",
        }
    }

    /// Expand to the concrete scenario.
    pub fn scenario(&self) -> StressScenario {
        let (volatility, ret) = match self {
            Self::MarketCrash => (3.0, -1.5),
            Self::VolatilitySpike => (2.5, 1.0),
            Self::BearMarket => (1.5, -1.0),
            Self::Stagflation => (1.8, -0.5),
            Self::FlashRally => (2.0, 2.0),
        };
        StressScenario::new(self.name(), self.description(), volatility, ret)
    }
}
