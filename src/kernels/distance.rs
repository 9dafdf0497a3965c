//! kernels::distance — pairwise squared Euclidean distances.
//!
//! Purpose
//! -------
//! Compute the `n1×n2` matrix of squared Euclidean distances between the rows
//! of two feature matrices, optionally rescaled by a length-scale. Most
//! stationary kernels (RBF, Matérn, rational quadratic) are thin transforms of
//! this matrix.
//!
//! Key behaviors
//! -------------
//! - Use the expansion `‖a − b‖² = ‖a‖² + ‖b‖² − 2a·b`: one matrix product
//!   plus broadcast row norms, with no per-pair loop.
//! - Snap entries with magnitude below [`ZERO_SNAP_TOL`] to exactly `0.0`,
//!   removing cancellation residue before it reaches square roots or logs.
//! - When the second matrix is omitted, distances are taken within the first
//!   matrix and the diagonal is exactly zero.
//!
//! Invariants & assumptions
//! ------------------------
//! - Both matrices must have the same number of columns.
//! - The length-scale must be finite and strictly positive.
//!
//! Conventions
//! -----------
//! - Rows index observations, columns index features.
//! - Rescaling divides the features by `l` *before* the distance is formed,
//!   so the result equals `‖a − b‖² / l²`.
use crate::{
    kernels::errors::{KernelError, KernelResult},
    numerical_stability::tolerances::{ZERO_SNAP_TOL, snap_to_zero},
};
use ndarray::{Array1, Array2, Axis};

/// Squared Euclidean distances between rows of `x1 / l` and `x2 / l`.
///
/// Parameters
/// ----------
/// - `x1`: `&Array2<f64>`
///   `n1×p` feature matrix.
/// - `x2`: `Option<&Array2<f64>>`
///   Optional `n2×p` feature matrix; `None` means "use `x1`".
/// - `l`: `f64`
///   Length-scale. Must be finite and `> 0`.
///
/// Returns
/// -------
/// `KernelResult<Array2<f64>>`
///   The `n1×n2` matrix of squared distances with sub-[`ZERO_SNAP_TOL`]
///   magnitudes snapped to `0.0`.
///
/// Errors
/// ------
/// - `KernelError::DimensionMismatch`
///   Returned when `x1` and `x2` have different column counts.
/// - `KernelError::InvalidLengthScale`
///   Returned when `l` is non-finite or not strictly positive.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use kernel_tuning::kernels::distance::square_dist;
/// let x1 = array![[0.0, 0.0], [3.0, 4.0]];
/// let d = square_dist(&x1, None, 1.0).unwrap();
/// assert_eq!(d[[0, 1]], 25.0);
/// assert_eq!(d[[1, 1]], 0.0);
/// ```
pub fn square_dist(
    x1: &Array2<f64>, x2: Option<&Array2<f64>>, l: f64,
) -> KernelResult<Array2<f64>> {
    square_dist_with_tol(x1, x2, l, ZERO_SNAP_TOL)
}

/// [`square_dist`] with an explicit snapping tolerance.
///
/// `tol = 0.0` disables snapping entirely, which is occasionally useful when
/// inspecting raw cancellation error.
pub fn square_dist_with_tol(
    x1: &Array2<f64>, x2: Option<&Array2<f64>>, l: f64, tol: f64,
) -> KernelResult<Array2<f64>> {
    validate_length_scale(l)?;
    let other = x2.unwrap_or(x1);
    check_columns(x1, other)?;

    let x1_scaled = x1 / l;
    let x2_scaled = other / l;
    let x1_norms = row_norms_sq(&x1_scaled);
    let x2_norms = row_norms_sq(&x2_scaled);

    let mut dist = x1_scaled.dot(&x2_scaled.t()) * -2.0;
    dist += &x1_norms.insert_axis(Axis(1));
    dist += &x2_norms.insert_axis(Axis(0));

    if x2.is_none() {
        dist.diag_mut().fill(0.0);
    }
    snap_to_zero(&mut dist, tol);
    Ok(dist)
}

// ---- Helper methods ----

/// Squared Euclidean norm of every row.
pub(crate) fn row_norms_sq(x: &Array2<f64>) -> Array1<f64> {
    x.map_axis(Axis(1), |row| row.dot(&row))
}

/// Reject feature matrices with different column counts.
pub(crate) fn check_columns(x1: &Array2<f64>, x2: &Array2<f64>) -> KernelResult<()> {
    if x1.ncols() != x2.ncols() {
        return Err(KernelError::DimensionMismatch { left: x1.ncols(), right: x2.ncols() });
    }
    Ok(())
}

/// Length-scales must be finite and strictly positive.
pub(crate) fn validate_length_scale(l: f64) -> KernelResult<()> {
    if !l.is_finite() || l <= 0.0 {
        return Err(KernelError::InvalidLengthScale { value: l });
    }
    Ok(())
}
