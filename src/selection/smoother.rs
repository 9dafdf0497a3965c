//! selection::smoother — scalar statistics of a smoother matrix.
//!
//! Purpose
//! -------
//! Reduce a total smoother `A` and a response `y` to the quantities the
//! model-selection criteria are built from: the residual operator
//! `M = I − A`, the effective degrees of freedom `tr(A)`, the residual
//! quadratic forms, and `det(M)`.
//!
//! Conventions
//! -----------
//! - `M` is formed explicitly as a dense `n×n` matrix; no symmetry of `A`
//!   is assumed, and the products below are taken literally
//!   (`yᵗ·M·(M·y)`, not `‖M·y‖²`).
//! - The determinant is computed by LU decomposition in `nalgebra` after a
//!   copy out of `ndarray`.
use nalgebra::DMatrix;
use ndarray::{Array1, Array2};

/// `M = I − A`.
pub fn residual_operator(a: &Array2<f64>) -> Array2<f64> {
    Array2::<f64>::eye(a.nrows()) - a
}

/// Effective degrees of freedom `tr(A)`.
pub fn trace(a: &Array2<f64>) -> f64 {
    a.diag().sum()
}

/// Residual sum of squares `yᵗ·M·M·y`.
pub fn residual_sum_of_squares(m: &Array2<f64>, y: &Array1<f64>) -> f64 {
    let my = m.dot(y);
    y.dot(&m.dot(&my))
}

/// Quadratic form `yᵗ·M·y`.
pub fn quadratic_form(m: &Array2<f64>, y: &Array1<f64>) -> f64 {
    y.dot(&m.dot(y))
}

/// `det(M)` via LU decomposition of the full matrix.
///
/// Notes
/// -----
/// - May be zero, negative, or non-finite; callers take its logarithm and
///   let degeneracy flow into the score.
pub fn determinant(m: &Array2<f64>) -> f64 {
    to_dmatrix(m).lu().determinant()
}

// ---- Helper methods ----

/// Copy an `ndarray` matrix into a column-major `nalgebra::DMatrix`.
pub(crate) fn to_dmatrix(mat: &Array2<f64>) -> DMatrix<f64> {
    let (nrows, ncols) = mat.dim();
    let mut out = DMatrix::<f64>::zeros(nrows, ncols);
    for j in 0..ncols {
        for i in 0..nrows {
            out[(i, j)] = mat[[i, j]];
        }
    }
    out
}
