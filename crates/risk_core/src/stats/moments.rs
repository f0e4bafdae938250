//! Sample moment estimators.
//!
//! Conventions: the mean is over all observations, variance carries the
//! Bessel correction (n - 1), skewness and kurtosis are population
//! moments of the standardised deviations, and kurtosis is reported in
//! excess form (normal = 0). Series with fewer than two observations
//! yield 0.0 across the board rather than NaN so downstream reductions
//! stay total.

/// Arithmetic mean. 0.0 for an empty slice.
#[inline]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Bessel-corrected sample variance. 0.0 with fewer than two observations.
pub fn variance(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mu = mean(values);
    values.iter().map(|v| (v - mu) * (v - mu)).sum::<f64>() / (n - 1) as f64
}

/// Sample standard deviation. 0.0 with fewer than two observations.
#[inline]
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Mean and sample standard deviation in one call.
///
/// The pair used for moment-matching a distribution model to a
/// historical return series.
pub fn sample_moments(values: &[f64]) -> (f64, f64) {
    (mean(values), std_dev(values))
}

/// Population skewness of the standardised deviations.
///
/// 0.0 when the series is degenerate (fewer than two observations or
/// zero dispersion).
pub fn skewness(values: &[f64]) -> f64 {
    standardised_moment(values, 3)
}

/// Excess kurtosis of the standardised deviations (normal = 0).
///
/// 0.0 when the series is degenerate.
pub fn excess_kurtosis(values: &[f64]) -> f64 {
    let m4 = standardised_moment(values, 4);
    if m4 == 0.0 {
        0.0
    } else {
        m4 - 3.0
    }
}

fn standardised_moment(values: &[f64], order: i32) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mu = mean(values);
    let sigma = std_dev(values);
    if sigma == 0.0 {
        return 0.0;
    }
    values
        .iter()
        .map(|v| ((v - mu) / sigma).powi(order))
        .sum::<f64>()
        / n as f64
}
