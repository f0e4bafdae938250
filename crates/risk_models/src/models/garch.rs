//! GARCH(1,1) return model with volatility clustering.

use risk_core::RandomSource;

use crate::error::ModelError;
use crate::models::normal::standard_normal;

/// GARCH(1,1) conditional-variance return process.
///
/// ```text
/// r_t   = sqrt(h_t) * z_t,          z_t ~ N(0, 1)
/// h_t+1 = omega + alpha * r_t^2 + beta * h_t
/// ```
///
/// The conditional variance starts at the long-run level
/// `omega / (1 - alpha - beta)` and is advanced by every draw, so the
/// model is order-dependent: one instance must never be shared between
/// concurrently running simulations. `Clone` copies the full state;
/// call [`reset`](GarchModel::reset) on the clone before reuse.
///
/// Returns have zero drift; the process models volatility, not
/// expected return.
#[derive(Clone, Debug, PartialEq)]
pub struct GarchModel {
    omega: f64,
    alpha: f64,
    beta: f64,
    variance: f64,
}

impl GarchModel {
    /// Create a GARCH(1,1) model at its long-run variance.
    ///
    /// # Errors
    /// - `InvalidGarchParameter` when `omega <= 0`, `alpha < 0`, or
    ///   `beta < 0`
    /// - `NonStationaryGarch` when `alpha + beta >= 1`
    pub fn new(omega: f64, alpha: f64, beta: f64) -> Result<Self, ModelError> {
        if omega <= 0.0 || alpha < 0.0 || beta < 0.0 {
            return Err(ModelError::InvalidGarchParameter { omega, alpha, beta });
        }
        if alpha + beta >= 1.0 {
            return Err(ModelError::NonStationaryGarch { alpha, beta });
        }
        let variance = omega / (1.0 - alpha - beta);
        Ok(Self {
            omega,
            alpha,
            beta,
            variance,
        })
    }

    /// Baseline variance parameter.
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// ARCH coefficient.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Persistence coefficient.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Conditional variance the next draw will use.
    pub fn current_variance(&self) -> f64 {
        self.variance
    }

    /// Unconditional long-run variance `omega / (1 - alpha - beta)`.
    pub fn long_run_variance(&self) -> f64 {
        self.omega / (1.0 - self.alpha - self.beta)
    }

    /// Restore the conditional variance to the long-run level.
    pub fn reset(&mut self) {
        self.variance = self.long_run_variance();
    }

    /// Draw one return and advance the variance recursion.
    pub fn sample<R: RandomSource>(&mut self, rng: &mut R) -> f64 {
        let z = standard_normal(rng);
        let r = self.variance.sqrt() * z;
        self.variance = self.omega + self.alpha * r * r + self.beta * self.variance;
        r
    }
}
