//! Normal return model and the Box-Muller transform behind it.

use risk_core::RandomSource;

use crate::error::ModelError;

/// One standard normal variate via the Box-Muller transform.
///
/// Consumes exactly two uniforms per draw:
///
/// ```text
/// z = sqrt(-2 ln u1) * cos(2 pi u2)
/// ```
///
/// A zero `u1` is replaced by 1e-10 before the logarithm, capping the
/// magnitude of a single draw at about 6.8 standard deviations.
#[inline]
pub fn standard_normal<R: RandomSource>(rng: &mut R) -> f64 {
    let mut u1 = rng.next_uniform();
    if u1 <= 0.0 {
        u1 = 1e-10;
    }
    let u2 = rng.next_uniform();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Normally distributed per-period returns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalModel {
    mean: f64,
    std_dev: f64,
}

impl NormalModel {
    /// Create a normal model.
    ///
    /// # Errors
    /// `InvalidScale` when `std_dev` is negative.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, ModelError> {
        if std_dev < 0.0 {
            return Err(ModelError::InvalidScale(std_dev));
        }
        Ok(Self { mean, std_dev })
    }

    /// The standard normal model (mean 0, unit variance).
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    /// Mean parameter.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation parameter.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Replace both moments.
    ///
    /// # Errors
    /// `InvalidScale` when `std_dev` is negative.
    pub fn set_moments(&mut self, mean: f64, std_dev: f64) -> Result<(), ModelError> {
        if std_dev < 0.0 {
            return Err(ModelError::InvalidScale(std_dev));
        }
        self.mean = mean;
        self.std_dev = std_dev;
        Ok(())
    }

    /// Draw one return.
    #[inline]
    pub fn sample<R: RandomSource>(&self, rng: &mut R) -> f64 {
        self.mean + self.std_dev * standard_normal(rng)
    }
}

impl Default for NormalModel {
    fn default() -> Self {
        Self::standard()
    }
}
