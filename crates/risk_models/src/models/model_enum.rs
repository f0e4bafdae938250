//! Static dispatch enum for return distribution models.
//!
//! `ReturnModel` gives the engine one concrete type covering every
//! supported distribution, dispatched by `match` instead of
//! `Box<dyn ...>`: cloning a model per simulation run stays a plain
//! memcpy and the sampling loop keeps static call targets.
//!
//! ## Example
//!
//! ```
//! use risk_models::models::model_enum::{DistributionKind, ReturnModel};
//!
//! let model = ReturnModel::from_config(DistributionKind::StudentT, &[]).unwrap();
//! assert_eq!(model.model_name(), "StudentT");
//! assert_eq!(model.kind(), DistributionKind::StudentT);
//! ```

use risk_core::RandomSource;

use crate::error::ModelError;

use super::empirical::EmpiricalModel;
use super::garch::GarchModel;
use super::normal::NormalModel;
use super::student_t::StudentTModel;

/// Which return distribution a simulation draws from.
///
/// `Custom` selects the empirical model resampling caller-supplied
/// observations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionKind {
    /// Normally distributed returns.
    #[default]
    Normal,
    /// Location-scale Student-t returns.
    StudentT,
    /// GARCH(1,1) conditional-variance returns.
    Garch,
    /// Empirical resampling of caller-supplied observations.
    Custom,
}

impl DistributionKind {
    /// Stable display name.
    pub fn name(&self) -> &'static str {
        match self {
            DistributionKind::Normal => "Normal",
            DistributionKind::StudentT => "StudentT",
            DistributionKind::Garch => "Garch",
            DistributionKind::Custom => "Custom",
        }
    }
}

/// Static dispatch enum over the supported return models.
///
/// # Construction defaults
///
/// [`from_config`](ReturnModel::from_config) falls back to conventional
/// parameters when the custom slice is shorter than the model needs:
/// Normal(0, 1), StudentT(df 5, location 0, scale 1),
/// Garch(1e-4, 0.1, 0.85). The `Custom` kind has no default; its slice
/// is the sample pool and must be non-empty.
///
/// # Example
///
/// ```
/// use risk_models::models::model_enum::{DistributionKind, ReturnModel};
///
/// let model = ReturnModel::from_config(DistributionKind::Garch, &[2e-4, 0.12, 0.8]).unwrap();
/// match &model {
///     ReturnModel::Garch(g) => assert_eq!(g.alpha(), 0.12),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ReturnModel {
    /// Normally distributed returns.
    Normal(NormalModel),
    /// Location-scale Student-t returns.
    StudentT(StudentTModel),
    /// GARCH(1,1) conditional-variance returns.
    Garch(GarchModel),
    /// Empirical resampling model.
    Empirical(EmpiricalModel),
}

impl ReturnModel {
    /// Create a normal model.
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self, ModelError> {
        Ok(ReturnModel::Normal(NormalModel::new(mean, std_dev)?))
    }

    /// Create a Student-t model.
    pub fn student_t(
        degrees_of_freedom: usize,
        location: f64,
        scale: f64,
    ) -> Result<Self, ModelError> {
        Ok(ReturnModel::StudentT(StudentTModel::new(
            degrees_of_freedom,
            location,
            scale,
        )?))
    }

    /// Create a GARCH(1,1) model.
    pub fn garch(omega: f64, alpha: f64, beta: f64) -> Result<Self, ModelError> {
        Ok(ReturnModel::Garch(GarchModel::new(omega, alpha, beta)?))
    }

    /// Create an empirical model over a sample pool.
    pub fn empirical(pool: Vec<f64>) -> Result<Self, ModelError> {
        Ok(ReturnModel::Empirical(EmpiricalModel::new(pool)?))
    }

    /// Build a model from a distribution kind and a custom parameter
    /// slice.
    ///
    /// Parameter layout per kind, each position falling back to its
    /// documented default when the slice is shorter:
    ///
    /// - `Normal`: `[mean, std_dev]`
    /// - `StudentT`: `[degrees_of_freedom, location, scale]`
    /// - `Garch`: `[omega, alpha, beta]`
    /// - `Custom`: the whole slice is the empirical sample pool
    ///
    /// # Errors
    /// Whatever the underlying constructor rejects; additionally
    /// `InvalidDegreesOfFreedom` when a Student-t degrees-of-freedom
    /// entry rounds below 1, and `EmptySamplePool` for `Custom` with an
    /// empty slice.
    pub fn from_config(kind: DistributionKind, custom: &[f64]) -> Result<Self, ModelError> {
        let param = |index: usize, default: f64| custom.get(index).copied().unwrap_or(default);
        match kind {
            DistributionKind::Normal => Self::normal(param(0, 0.0), param(1, 1.0)),
            DistributionKind::StudentT => {
                let df_raw = param(0, 5.0).round();
                if !df_raw.is_finite() || df_raw < 1.0 {
                    return Err(ModelError::InvalidDegreesOfFreedom(param(0, 5.0)));
                }
                Self::student_t(df_raw as usize, param(1, 0.0), param(2, 1.0))
            }
            DistributionKind::Garch => Self::garch(param(0, 1e-4), param(1, 0.1), param(2, 0.85)),
            DistributionKind::Custom => Self::empirical(custom.to_vec()),
        }
    }

    /// Stable model name.
    pub fn model_name(&self) -> &'static str {
        self.kind().name()
    }

    /// The distribution kind this model realises.
    pub fn kind(&self) -> DistributionKind {
        match self {
            ReturnModel::Normal(_) => DistributionKind::Normal,
            ReturnModel::StudentT(_) => DistributionKind::StudentT,
            ReturnModel::Garch(_) => DistributionKind::Garch,
            ReturnModel::Empirical(_) => DistributionKind::Custom,
        }
    }

    /// Draw one per-period return.
    ///
    /// Takes `&mut self` because stateful models advance internal state
    /// on every draw; the stateless models simply ignore the mutability.
    #[inline]
    pub fn sample<R: RandomSource>(&mut self, rng: &mut R) -> f64 {
        match self {
            ReturnModel::Normal(m) => m.sample(rng),
            ReturnModel::StudentT(m) => m.sample(rng),
            ReturnModel::Garch(m) => m.sample(rng),
            ReturnModel::Empirical(m) => m.sample(rng),
        }
    }

    /// Feed estimated sample moments `[mean, std_dev]` into the model.
    ///
    /// - `Normal` replaces both of its parameters.
    /// - `StudentT` re-centres location and scale; the tail index stays
    ///   as configured.
    /// - `Garch` and `Empirical` take no moment input and ignore the
    ///   call.
    ///
    /// # Errors
    /// - `MissingParameters` when a moment-driven model receives fewer
    ///   than two values
    /// - `InvalidScale` when the standard deviation entry is negative
    pub fn update_parameters(&mut self, params: &[f64]) -> Result<(), ModelError> {
        match self {
            ReturnModel::Normal(m) => {
                if params.len() < 2 {
                    return Err(ModelError::MissingParameters {
                        got: params.len(),
                        need: 2,
                    });
                }
                m.set_moments(params[0], params[1])
            }
            ReturnModel::StudentT(m) => {
                if params.len() < 2 {
                    return Err(ModelError::MissingParameters {
                        got: params.len(),
                        need: 2,
                    });
                }
                m.set_moments(params[0], params[1])
            }
            ReturnModel::Garch(_) | ReturnModel::Empirical(_) => Ok(()),
        }
    }

    /// Restore any order-dependent state to its initial value.
    ///
    /// Run once before every simulation so results never depend on what
    /// a previous run left behind.
    pub fn reset(&mut self) {
        if let ReturnModel::Garch(m) = self {
            m.reset();
        }
    }
}

impl Default for ReturnModel {
    fn default() -> Self {
        ReturnModel::Normal(NormalModel::standard())
    }
}
