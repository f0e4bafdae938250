//! Empirical return model: resampling from observed history.

use risk_core::RandomSource;

use crate::error::ModelError;

/// Resamples uniformly, with replacement, from a fixed pool of observed
/// returns.
///
/// Stateless between draws and deliberately free of distributional
/// assumptions: the pool is the distribution, so moment updates do not
/// apply to it.
#[derive(Clone, Debug, PartialEq)]
pub struct EmpiricalModel {
    pool: Vec<f64>,
}

impl EmpiricalModel {
    /// Create an empirical model over a pool of observed returns.
    ///
    /// # Errors
    /// `EmptySamplePool` when the pool has no observations.
    pub fn new(pool: Vec<f64>) -> Result<Self, ModelError> {
        if pool.is_empty() {
            return Err(ModelError::EmptySamplePool);
        }
        Ok(Self { pool })
    }

    /// Number of observations in the pool.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Whether the pool is empty; always false for a constructed model.
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// The observations backing the model.
    pub fn pool(&self) -> &[f64] {
        &self.pool
    }

    /// Draw one return from the pool.
    #[inline]
    pub fn sample<R: RandomSource>(&self, rng: &mut R) -> f64 {
        let idx = ((rng.next_uniform() * self.pool.len() as f64) as usize).min(self.pool.len() - 1);
        self.pool[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{Constant, SplitMix};

    #[test]
    fn test_empty_pool_rejected() {
        assert!(matches!(
            EmpiricalModel::new(vec![]),
            Err(ModelError::EmptySamplePool)
        ));
    }

    #[test]
    fn test_index_selection() {
        let model = EmpiricalModel::new(vec![-0.02, 0.01, 0.03, 0.05]).unwrap();
        // floor(0.5 * 4) = 2
        assert_eq!(model.sample(&mut Constant(0.5)), 0.03);
        // floor(0.0 * 4) = 0
        assert_eq!(model.sample(&mut Constant(0.0)), -0.02);
        // u close to 1 clamps to the last element
        assert_eq!(model.sample(&mut Constant(0.999_999_999)), 0.05);
    }

    #[test]
    fn test_samples_come_from_pool() {
        let pool = vec![-0.05, -0.01, 0.0, 0.02, 0.04];
        let model = EmpiricalModel::new(pool.clone()).unwrap();
        let mut rng = SplitMix(5);
        for _ in 0..1_000 {
            let draw = model.sample(&mut rng);
            assert!(pool.contains(&draw));
        }
    }

    #[test]
    fn test_single_element_pool() {
        let model = EmpiricalModel::new(vec![0.01]).unwrap();
        let mut rng = SplitMix(8);
        for _ in 0..16 {
            assert_eq!(model.sample(&mut rng), 0.01);
        }
    }
}
