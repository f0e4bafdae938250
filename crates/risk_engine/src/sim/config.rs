//! Simulation run configuration.

use risk_core::RiskError;
use risk_models::DistributionKind;
use thiserror::Error;

/// Default number of simulated paths.
pub const DEFAULT_NUM_SIMULATIONS: usize = 10_000;

/// Default time horizon in periods.
pub const DEFAULT_TIME_HORIZON: usize = 1;

/// Default confidence level for VaR and CVaR.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Configuration validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Simulation count must be positive.
    #[error("number of simulations must be positive, got {0}")]
    InvalidSimulationCount(usize),

    /// Time horizon must be at least one period.
    #[error("time horizon must be at least 1, got {0}")]
    InvalidTimeHorizon(usize),

    /// Confidence level must lie strictly between 0 and 1.
    #[error("confidence level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),

    /// Worker count must be positive.
    #[error("worker count must be positive, got {0}")]
    InvalidWorkerCount(usize),
}

impl From<ConfigError> for RiskError {
    fn from(err: ConfigError) -> Self {
        RiskError::invalid_input(err.to_string())
    }
}

/// Immutable Monte Carlo simulation configuration.
///
/// Construct through [`builder`](SimulationConfig::builder); every
/// field has a conventional default, so `SimulationConfig::default()`
/// is a valid 10 000-path Normal run.
///
/// A seed of `None` gives a nondeterministic run. An explicit seed of
/// `0` also means nondeterministic and is normalised to `None` at build
/// time, so `seed()` never reports `Some(0)`.
///
/// # Examples
///
/// ```
/// use risk_engine::sim::SimulationConfig;
/// use risk_models::DistributionKind;
///
/// let config = SimulationConfig::builder()
///     .num_simulations(50_000)
///     .confidence_level(0.99)
///     .distribution(DistributionKind::StudentT)
///     .custom_parameters(vec![4.0, 0.0, 0.02])
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.num_simulations(), 50_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Number of simulated paths.
    num_simulations: usize,
    /// Horizon the per-period parameters refer to; carried through to
    /// callers, never used to rescale.
    time_horizon: usize,
    /// Confidence level for VaR and CVaR, strictly in (0, 1).
    confidence_level: f64,
    /// Which return distribution to sample.
    distribution: DistributionKind,
    /// Model-specific parameter payload.
    custom_parameters: Vec<f64>,
    /// Pair simulations with mirrored uniform draws.
    antithetic: bool,
    /// Seed for reproducible runs; `None` means nondeterministic.
    seed: Option<u64>,
    /// Parallel worker count; 1 means sequential.
    workers: usize,
}

impl SimulationConfig {
    /// Create a configuration builder preloaded with the defaults.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Number of simulated paths.
    #[inline]
    pub fn num_simulations(&self) -> usize {
        self.num_simulations
    }

    /// Time horizon in periods.
    #[inline]
    pub fn time_horizon(&self) -> usize {
        self.time_horizon
    }

    /// Confidence level for VaR and CVaR.
    #[inline]
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Selected return distribution.
    #[inline]
    pub fn distribution(&self) -> DistributionKind {
        self.distribution
    }

    /// Model-specific parameter payload.
    #[inline]
    pub fn custom_parameters(&self) -> &[f64] {
        &self.custom_parameters
    }

    /// Whether antithetic variates are enabled.
    #[inline]
    pub fn antithetic(&self) -> bool {
        self.antithetic
    }

    /// Seed for reproducible runs, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Parallel worker count.
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.num_simulations == 0 {
            return Err(ConfigError::InvalidSimulationCount(self.num_simulations));
        }
        if self.time_horizon == 0 {
            return Err(ConfigError::InvalidTimeHorizon(self.time_horizon));
        }
        if !self.confidence_level.is_finite()
            || self.confidence_level <= 0.0
            || self.confidence_level >= 1.0
        {
            return Err(ConfigError::InvalidConfidenceLevel(self.confidence_level));
        }
        if self.workers == 0 {
            return Err(ConfigError::InvalidWorkerCount(self.workers));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_simulations: DEFAULT_NUM_SIMULATIONS,
            time_horizon: DEFAULT_TIME_HORIZON,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            distribution: DistributionKind::Normal,
            custom_parameters: Vec::new(),
            antithetic: false,
            seed: None,
            workers: 1,
        }
    }
}

/// Builder for [`SimulationConfig`].
///
/// Starts from the defaults, so only the values that differ need to be
/// set. Validation happens once at [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    config: SimulationConfig,
}

impl SimulationConfigBuilder {
    /// Set the number of simulated paths.
    #[inline]
    pub fn num_simulations(mut self, num_simulations: usize) -> Self {
        self.config.num_simulations = num_simulations;
        self
    }

    /// Set the time horizon in periods.
    #[inline]
    pub fn time_horizon(mut self, time_horizon: usize) -> Self {
        self.config.time_horizon = time_horizon;
        self
    }

    /// Set the confidence level for VaR and CVaR.
    #[inline]
    pub fn confidence_level(mut self, confidence_level: f64) -> Self {
        self.config.confidence_level = confidence_level;
        self
    }

    /// Select the return distribution.
    #[inline]
    pub fn distribution(mut self, distribution: DistributionKind) -> Self {
        self.config.distribution = distribution;
        self
    }

    /// Supply the model-specific parameter payload.
    #[inline]
    pub fn custom_parameters(mut self, custom_parameters: Vec<f64>) -> Self {
        self.config.custom_parameters = custom_parameters;
        self
    }

    /// Enable or disable antithetic variates.
    #[inline]
    pub fn antithetic(mut self, antithetic: bool) -> Self {
        self.config.antithetic = antithetic;
        self
    }

    /// Set the seed; `0` means nondeterministic.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the parallel worker count; 1 means sequential.
    #[inline]
    pub fn workers(mut self, workers: usize) -> Self {
        self.config.workers = workers;
        self
    }

    /// Validate and produce the configuration.
    ///
    /// # Errors
    /// One [`ConfigError`] variant per violated bound.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let mut config = self.config;
        if config.seed == Some(0) {
            config.seed = None;
        }
        config.validate()?;
        Ok(config)
    }
}
