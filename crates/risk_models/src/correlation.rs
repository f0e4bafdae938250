//! Correlation matrices and their Cholesky factorisation.
//!
//! Portfolio simulation correlates per-asset shocks by multiplying a
//! vector of independent standard normals with the lower-triangular
//! Cholesky factor `L` of the asset correlation matrix, `w = L z`.
//! [`CorrelationMatrix`] validates its entries on construction so a
//! factorisation failure can only mean the matrix is not positive
//! definite.
//!
//! ```
//! use risk_models::correlation::CorrelationMatrix;
//!
//! let matrix = CorrelationMatrix::from_flat(2, vec![1.0, 0.5, 0.5, 1.0]).unwrap();
//! let factor = matrix.cholesky().unwrap();
//! let w = factor.transform(&[1.0, 1.0]);
//! assert!((w[0] - 1.0).abs() < 1e-12);
//! assert!((w[1] - (0.5 + 0.75_f64.sqrt())).abs() < 1e-12);
//! ```

use risk_core::RiskError;
use thiserror::Error;

/// Tolerance for the unit-diagonal and symmetry checks.
const VALIDATION_EPSILON: f64 = 1e-10;

/// Pivots at or below this are treated as a failed factorisation.
const MIN_PIVOT: f64 = 1e-12;

/// Correlation matrix construction, estimation, and factorisation
/// errors.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorrelationError {
    /// Flat data length does not fill a square matrix of the stated
    /// dimension.
    #[error("dimension mismatch: expected {expected} entries, got {got}")]
    DimensionMismatch {
        /// Entries required for the stated dimension.
        expected: usize,
        /// Entries actually supplied.
        got: usize,
    },

    /// A diagonal entry differs from one.
    #[error("diagonal entry {index} is {value}, expected 1")]
    InvalidDiagonal {
        /// Diagonal position.
        index: usize,
        /// Offending value.
        value: f64,
    },

    /// An entry differs from its transpose counterpart.
    #[error("matrix is not symmetric at ({row}, {col})")]
    Asymmetric {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
    },

    /// An entry lies outside [-1, 1].
    #[error("correlation at ({row}, {col}) is {value}, must be in [-1, 1]")]
    OutOfRange {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// Offending value.
        value: f64,
    },

    /// Cholesky factorisation hit a non-positive pivot.
    #[error("matrix is not positive definite: pivot {pivot} at row {index}")]
    NotPositiveDefinite {
        /// Row where the factorisation failed.
        index: usize,
        /// The failing pivot value.
        pivot: f64,
    },

    /// No return series supplied to the estimator.
    #[error("no return series supplied")]
    NoSeries,

    /// Return series of unequal lengths.
    #[error("return series {index} has {len} observations, expected {expected}")]
    RaggedSeries {
        /// Index of the offending series.
        index: usize,
        /// Its length.
        len: usize,
        /// Length of the first series.
        expected: usize,
    },

    /// Too few observations to estimate correlations.
    #[error("insufficient observations: got {got}, need at least {need}")]
    InsufficientObservations {
        /// Observations per series.
        got: usize,
        /// Minimum required.
        need: usize,
    },
}

impl From<CorrelationError> for RiskError {
    fn from(err: CorrelationError) -> Self {
        match err {
            CorrelationError::NotPositiveDefinite { .. } => {
                RiskError::numerical_failure(err.to_string())
            }
            CorrelationError::InsufficientObservations { got, need } => {
                RiskError::insufficient_data(got, need)
            }
            _ => RiskError::invalid_input(err.to_string()),
        }
    }
}

/// Validated asset correlation matrix.
///
/// Square, symmetric, unit diagonal, entries in [-1, 1]. Construction
/// enforces all of that; positive definiteness is checked at
/// factorisation time because it cannot be read off the entries.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrelationMatrix {
    /// Row-major entries, `dim * dim` of them.
    data: Vec<f64>,
    /// Number of assets.
    dim: usize,
}

impl CorrelationMatrix {
    /// Identity matrix: uncorrelated assets.
    pub fn identity(dim: usize) -> Self {
        let mut data = vec![0.0; dim * dim];
        for i in 0..dim {
            data[i * dim + i] = 1.0;
        }
        Self { data, dim }
    }

    /// Build from row-major flat data.
    ///
    /// # Errors
    /// `DimensionMismatch` when `data.len() != dim * dim`, otherwise
    /// whichever of `InvalidDiagonal`, `Asymmetric`, or `OutOfRange`
    /// trips first.
    pub fn from_flat(dim: usize, data: Vec<f64>) -> Result<Self, CorrelationError> {
        let expected = dim * dim;
        if data.len() != expected {
            return Err(CorrelationError::DimensionMismatch {
                expected,
                got: data.len(),
            });
        }
        let matrix = Self { data, dim };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Build from nested rows.
    ///
    /// # Errors
    /// `DimensionMismatch` when a row's length differs from the row
    /// count, plus everything [`from_flat`](Self::from_flat) rejects.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, CorrelationError> {
        let dim = rows.len();
        let mut data = Vec::with_capacity(dim * dim);
        for row in rows {
            if row.len() != dim {
                return Err(CorrelationError::DimensionMismatch {
                    expected: dim,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_flat(dim, data)
    }

    /// Estimate the sample Pearson correlation matrix of equal-length
    /// return series.
    ///
    /// Entries are clamped to [-1, 1] to absorb floating-point
    /// overshoot. A zero-variance series gets zero correlation against
    /// everything else and a unit diagonal entry, so the output is
    /// always a valid (if possibly singular) correlation matrix.
    ///
    /// # Errors
    /// - `NoSeries` for an empty input
    /// - `RaggedSeries` when lengths differ
    /// - `InsufficientObservations` with fewer than two observations
    pub fn from_returns(series: &[Vec<f64>]) -> Result<Self, CorrelationError> {
        if series.is_empty() {
            return Err(CorrelationError::NoSeries);
        }
        let observations = series[0].len();
        for (index, s) in series.iter().enumerate() {
            if s.len() != observations {
                return Err(CorrelationError::RaggedSeries {
                    index,
                    len: s.len(),
                    expected: observations,
                });
            }
        }
        if observations < 2 {
            return Err(CorrelationError::InsufficientObservations {
                got: observations,
                need: 2,
            });
        }

        let dim = series.len();
        let means: Vec<f64> = series
            .iter()
            .map(|s| s.iter().sum::<f64>() / observations as f64)
            .collect();
        let sq_sums: Vec<f64> = series
            .iter()
            .zip(&means)
            .map(|(s, &m)| s.iter().map(|&x| (x - m) * (x - m)).sum::<f64>())
            .collect();

        let mut data = vec![0.0; dim * dim];
        for i in 0..dim {
            data[i * dim + i] = 1.0;
            for j in (i + 1)..dim {
                let cross: f64 = series[i]
                    .iter()
                    .zip(&series[j])
                    .map(|(&x, &y)| (x - means[i]) * (y - means[j]))
                    .sum();
                let denom = (sq_sums[i] * sq_sums[j]).sqrt();
                let rho = if denom > 0.0 {
                    (cross / denom).clamp(-1.0, 1.0)
                } else {
                    0.0
                };
                data[i * dim + j] = rho;
                data[j * dim + i] = rho;
            }
        }
        Ok(Self { data, dim })
    }

    /// Number of assets the matrix covers.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry at `(row, col)`. Panics when either index is out of
    /// bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.dim && col < self.dim, "index out of bounds");
        self.data[row * self.dim + col]
    }

    /// Lower-triangular Cholesky factor `L` with `L Lᵀ` equal to the
    /// matrix.
    ///
    /// # Errors
    /// `NotPositiveDefinite` carrying the failing pivot and its row.
    pub fn cholesky(&self) -> Result<CholeskyFactor, CorrelationError> {
        let n = self.dim;
        let mut lower = vec![0.0; n * n];

        for i in 0..n {
            for j in 0..=i {
                let mut sum = 0.0;
                for k in 0..j {
                    sum += lower[i * n + k] * lower[j * n + k];
                }
                if i == j {
                    let pivot = self.data[i * n + i] - sum;
                    if pivot <= MIN_PIVOT {
                        return Err(CorrelationError::NotPositiveDefinite { index: i, pivot });
                    }
                    lower[i * n + i] = pivot.sqrt();
                } else {
                    lower[i * n + j] = (self.data[i * n + j] - sum) / lower[j * n + j];
                }
            }
        }

        Ok(CholeskyFactor { data: lower, dim: n })
    }

    fn validate(&self) -> Result<(), CorrelationError> {
        for i in 0..self.dim {
            let diag = self.data[i * self.dim + i];
            if (diag - 1.0).abs() > VALIDATION_EPSILON {
                return Err(CorrelationError::InvalidDiagonal {
                    index: i,
                    value: diag,
                });
            }
        }
        for i in 0..self.dim {
            for j in (i + 1)..self.dim {
                let upper = self.data[i * self.dim + j];
                let lower = self.data[j * self.dim + i];
                if (upper - lower).abs() > VALIDATION_EPSILON {
                    return Err(CorrelationError::Asymmetric { row: i, col: j });
                }
                if !(-1.0..=1.0).contains(&upper) {
                    return Err(CorrelationError::OutOfRange {
                        row: i,
                        col: j,
                        value: upper,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Lower-triangular Cholesky factor of a correlation matrix.
///
/// Applies `w = L z` to turn independent standard normals into
/// correlated ones with the factored correlation structure.
#[derive(Clone, Debug, PartialEq)]
pub struct CholeskyFactor {
    /// Row-major entries; positions above the diagonal stay zero.
    data: Vec<f64>,
    /// Matrix dimension.
    dim: usize,
}

impl CholeskyFactor {
    /// Matrix dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry at `(row, col)`; zero above the diagonal. Panics when
    /// either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.dim && col < self.dim, "index out of bounds");
        if col > row {
            0.0
        } else {
            self.data[row * self.dim + col]
        }
    }

    /// Correlate a vector of independent standard normals.
    ///
    /// Panics when `z.len()` differs from the factor's dimension.
    pub fn transform(&self, z: &[f64]) -> Vec<f64> {
        assert_eq!(
            z.len(),
            self.dim,
            "shock vector length {} does not match dimension {}",
            z.len(),
            self.dim
        );
        let n = self.dim;
        let mut w = Vec::with_capacity(n);
        for i in 0..n {
            let mut sum = 0.0;
            for j in 0..=i {
                sum += self.data[i * n + j] * z[j];
            }
            w.push(sum);
        }
        w
    }

    /// Correlate in place, reusing the input buffer.
    ///
    /// Rows are processed bottom-up: row `i` only reads positions
    /// `0..=i`, which later (smaller) rows have not yet overwritten, so
    /// no scratch allocation is needed.
    ///
    /// Panics when `z.len()` differs from the factor's dimension.
    pub fn transform_in_place(&self, z: &mut [f64]) {
        assert_eq!(
            z.len(),
            self.dim,
            "shock vector length {} does not match dimension {}",
            z.len(),
            self.dim
        );
        let n = self.dim;
        for i in (0..n).rev() {
            let mut sum = 0.0;
            for j in 0..=i {
                sum += self.data[i * n + j] * z[j];
            }
            z[i] = sum;
        }
    }
}
