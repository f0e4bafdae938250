//! Portfolio weight helpers.

use risk_core::RiskError;

/// Weights below this magnitude in total are treated as a zero sum.
const MIN_WEIGHT_SUM: f64 = 1e-12;

/// Equal weights for `n` assets. Empty for `n == 0`.
///
/// The mean-variance optimiser this engine feeds is a stub that
/// allocates uniformly; solver internals live outside this workspace.
pub fn equal_weights(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    vec![1.0 / n as f64; n]
}

/// Rescale weights to sum to one.
///
/// Negative weights are legal (short positions) as long as the overall
/// sum is away from zero.
///
/// # Errors
/// `InvalidInput` for an empty slice, any non-finite weight, or a sum
/// within `1e-12` of zero.
pub fn normalise_weights(weights: &[f64]) -> Result<Vec<f64>, RiskError> {
    if weights.is_empty() {
        return Err(RiskError::invalid_input("weights must not be empty"));
    }
    if let Some(bad) = weights.iter().find(|w| !w.is_finite()) {
        return Err(RiskError::invalid_input(format!(
            "weights must be finite, got {bad}"
        )));
    }
    let total: f64 = weights.iter().sum();
    if total.abs() < MIN_WEIGHT_SUM {
        return Err(RiskError::invalid_input(format!(
            "weights sum to {total}, cannot normalise"
        )));
    }
    Ok(weights.iter().map(|w| w / total).collect())
}
