//! selection::validation — input checks shared by criteria and the selector.
//!
//! Purpose
//! -------
//! Reject malformed selection problems before any estimator call, so that
//! estimator time is never spent on a request that cannot produce a valid
//! outcome, and check the one piece of estimator output the criteria rely
//! on (the smoother shape).
//!
//! Conventions
//! -----------
//! - `n` is the response length; the design matrix must have `n` rows and
//!   every kernel matrix must be `n×n`.
//! - λ values must be finite and strictly positive.
//! - Checks run in a fixed order and return the first failure.
use crate::selection::errors::{TuningError, TuningResult};
use ndarray::{Array1, Array2};

/// Validate the data side of a selection problem and return `n`.
///
/// Errors
/// ------
/// - `TuningError::EmptyResponse` when `y` is empty.
/// - `TuningError::DesignRows` when `x.nrows() != n`.
/// - `TuningError::KernelShape` for the first kernel that is not `n×n`.
pub fn validate_problem(
    y: &Array1<f64>, x: &Array2<f64>, kernels: &[Array2<f64>],
) -> TuningResult<usize> {
    let n = y.len();
    if n == 0 {
        return Err(TuningError::EmptyResponse);
    }
    if x.nrows() != n {
        return Err(TuningError::DesignRows { expected: n, found: x.nrows() });
    }
    for (index, kernel) in kernels.iter().enumerate() {
        if kernel.dim() != (n, n) {
            return Err(TuningError::KernelShape { index, expected: n, found: kernel.dim() });
        }
    }
    Ok(n)
}

/// Validate a single λ at grid position `index`.
pub fn validate_lambda(index: usize, lambda: f64) -> TuningResult<()> {
    if !lambda.is_finite() || lambda <= 0.0 {
        return Err(TuningError::InvalidLambda { index, value: lambda });
    }
    Ok(())
}

/// Validate a whole λ grid: non-empty, every value finite and `> 0`.
pub fn validate_grid(grid: &[f64]) -> TuningResult<()> {
    if grid.is_empty() {
        return Err(TuningError::EmptyGrid);
    }
    grid.iter().enumerate().try_for_each(|(index, &lambda)| validate_lambda(index, lambda))
}

/// Validate that an estimator returned an `n×n` smoother.
pub fn validate_smoother(a: &Array2<f64>, n: usize) -> TuningResult<()> {
    if a.dim() != (n, n) {
        return Err(TuningError::SmootherShape { expected: n, found: a.dim() });
    }
    Ok(())
}
