//! Closed-form tail measures under distributional assumptions.
//!
//! Useful as fast cross-checks against the simulated measures and as the
//! delta-normal shortcut when only the first two moments are known. The
//! same sign convention applies: results are positive loss magnitudes,
//! and a confidence level outside (0, 1) yields 0.0.

use crate::math::{norm_inv_cdf, norm_pdf};

/// Delta-normal Value at Risk from the first two moments.
///
/// `z_c * std_dev - mean` with `z_c` the standard normal quantile at the
/// confidence level.
///
/// # Examples
/// ```
/// use risk_core::stats::parametric_var;
///
/// let var = parametric_var(0.0, 1.0, 0.95);
/// assert!((var - 1.6448536).abs() < 1e-6);
/// ```
pub fn parametric_var(mean: f64, std_dev: f64, confidence: f64) -> f64 {
    if confidence <= 0.0 || confidence >= 1.0 {
        return 0.0;
    }
    norm_inv_cdf(confidence) * std_dev - mean
}

/// Closed-form expected shortfall under a normal assumption.
///
/// `std_dev * pdf(z_c) / (1 - c) - mean`; always at least as large as
/// [`parametric_var`] at the same level.
pub fn parametric_cvar(mean: f64, std_dev: f64, confidence: f64) -> f64 {
    if confidence <= 0.0 || confidence >= 1.0 {
        return 0.0;
    }
    let z = norm_inv_cdf(confidence);
    std_dev * norm_pdf(z) / (1.0 - confidence) - mean
}

/// Cornish-Fisher Value at Risk with third- and fourth-moment correction.
///
/// Adjusts the lower-tail normal quantile for skewness `s` and excess
/// kurtosis `k` before scaling:
///
/// ```text
/// z'  = z + (z^2 - 1)s/6 + (z^3 - 3z)k/24 - (2z^3 - 5z)s^2/36
/// VaR = -(mean + z' * std_dev)
/// ```
///
/// Reduces to [`parametric_var`] when `s` and `k` are both zero. The
/// expansion is reliable for moderate departures from normality only;
/// extreme `s`/`k` can make the adjusted quantile non-monotone.
pub fn cornish_fisher_var(
    mean: f64,
    std_dev: f64,
    skewness: f64,
    excess_kurtosis: f64,
    confidence: f64,
) -> f64 {
    if confidence <= 0.0 || confidence >= 1.0 {
        return 0.0;
    }
    let z = norm_inv_cdf(1.0 - confidence);
    let z2 = z * z;
    let z3 = z2 * z;
    let adjusted = z
        + (z2 - 1.0) * skewness / 6.0
        + (z3 - 3.0 * z) * excess_kurtosis / 24.0
        - (2.0 * z3 - 5.0 * z) * skewness * skewness / 36.0;
    -(mean + adjusted * std_dev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parametric_var_standard_normal() {
        assert_relative_eq!(parametric_var(0.0, 1.0, 0.95), 1.6448536, epsilon = 1e-6);
        assert_relative_eq!(parametric_var(0.0, 1.0, 0.99), 2.3263479, epsilon = 1e-6);
    }

    #[test]
    fn test_parametric_var_shifts_and_scales() {
        // Positive drift reduces the loss quantile, volatility scales it
        let base = parametric_var(0.0, 1.0, 0.95);
        assert_relative_eq!(parametric_var(0.1, 1.0, 0.95), base - 0.1, epsilon = 1e-12);
        assert_relative_eq!(parametric_var(0.0, 2.0, 0.95), 2.0 * base, epsilon = 1e-12);
    }

    #[test]
    fn test_parametric_cvar_standard_normal() {
        // phi(1.959964) / 0.025
        assert_relative_eq!(parametric_cvar(0.0, 1.0, 0.975), 2.337799, epsilon = 1e-4);
    }

    #[test]
    fn test_parametric_cvar_dominates_var() {
        for &c in &[0.9, 0.95, 0.975, 0.99] {
            assert!(parametric_cvar(0.01, 0.2, c) >= parametric_var(0.01, 0.2, c));
        }
    }

    #[test]
    fn test_cornish_fisher_reduces_to_normal() {
        for &c in &[0.9, 0.95, 0.99] {
            assert_relative_eq!(
                cornish_fisher_var(0.002, 0.015, 0.0, 0.0, c),
                parametric_var(0.002, 0.015, c),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_cornish_fisher_negative_skew_raises_var() {
        let normal = parametric_var(0.0, 1.0, 0.95);
        let skewed = cornish_fisher_var(0.0, 1.0, -0.5, 0.0, 0.95);
        assert!(skewed > normal);
    }

    #[test]
    fn test_cornish_fisher_fat_tails_raise_deep_var() {
        let normal = parametric_var(0.0, 1.0, 0.99);
        let fat = cornish_fisher_var(0.0, 1.0, 0.0, 1.0, 0.99);
        assert!(fat > normal);
    }

    #[test]
    fn test_out_of_range_confidence_yields_zero() {
        assert_eq!(parametric_var(0.0, 1.0, 0.0), 0.0);
        assert_eq!(parametric_var(0.0, 1.0, 1.0), 0.0);
        assert_eq!(parametric_cvar(0.0, 1.0, -1.0), 0.0);
        assert_eq!(cornish_fisher_var(0.0, 1.0, 0.1, 0.1, 2.0), 0.0);
    }
}
