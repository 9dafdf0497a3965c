//! Unified error handling for tuning-parameter selection.
//!
//! This module defines `TuningError`, the error type returned by the
//! criterion evaluator and the λ selector. It groups input-validation
//! failures (unknown criterion, bad grid, inconsistent shapes) with the
//! opaque failures raised by an external ridge estimator. An alias
//! `TuningResult<T>` standardizes the return type across selection code.
//!
//! Numeric degeneracy of a score (±∞, NaN) is never an error; it is a
//! legitimate value in the score space. Ties are reported through the
//! selection outcome, not through this type.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Unified error type for criterion evaluation and λ selection.
///
/// Covers malformed requests detected before any estimator call and
/// failures surfaced by the estimator itself. Integrates with
/// `anyhow::Error` via `From`, so estimator closures can use `?` freely.
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    // ---- Criterion ----
    /// Criterion name outside the supported set.
    UnknownCriterion { name: String },

    // ---- Grid ----
    /// The λ grid contains no values.
    EmptyGrid,

    /// A grid value is non-finite or not strictly positive.
    InvalidLambda { index: usize, value: f64 },

    // ---- Shapes ----
    /// The response vector has no observations.
    EmptyResponse,

    /// The design matrix row count differs from the response length.
    DesignRows { expected: usize, found: usize },

    /// A kernel matrix is not `n×n`.
    KernelShape { index: usize, expected: usize, found: (usize, usize) },

    /// The estimator returned a smoother matrix that is not `n×n`.
    SmootherShape { expected: usize, found: (usize, usize) },

    // ---- Estimator ----
    /// The external ridge estimator failed.
    Estimator(String),
}

pub type TuningResult<T> = Result<T, TuningError>;

impl From<anyhow::Error> for TuningError {
    fn from(err: anyhow::Error) -> Self {
        TuningError::Estimator(format!("{err:#}"))
    }
}

impl std::error::Error for TuningError {}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Criterion ----
            TuningError::UnknownCriterion { name } => write!(
                f,
                "Unknown criterion {name:?} (expected 'loocv', 'aic', 'aicc', 'bic', 'gcv', \
                 'gcvc', or 'gmpml')."
            ),

            // ---- Grid ----
            TuningError::EmptyGrid => write!(f, "Lambda grid must contain at least one value."),
            TuningError::InvalidLambda { index, value } => {
                write!(f, "Lambda at index {index} must be finite and > 0; got: {value}")
            }

            // ---- Shapes ----
            TuningError::EmptyResponse => {
                write!(f, "Response must contain at least one observation.")
            }
            TuningError::DesignRows { expected, found } => write!(
                f,
                "Design matrix must have one row per observation; expected {expected}, got {found}."
            ),
            TuningError::KernelShape { index, expected, found } => write!(
                f,
                "Kernel matrix {index} must be {expected}x{expected}; got {}x{}.",
                found.0, found.1
            ),
            TuningError::SmootherShape { expected, found } => write!(
                f,
                "Estimator returned a {}x{} smoother; expected {expected}x{expected}.",
                found.0, found.1
            ),

            // ---- Estimator ----
            TuningError::Estimator(msg) => write!(f, "Ridge estimator failed: {msg}"),
        }
    }
}

/// Convert a [`TuningError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl From<TuningError> for PyErr {
    fn from(err: TuningError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
