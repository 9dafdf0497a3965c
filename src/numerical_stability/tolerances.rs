//! Numerical tolerances for distance and kernel computations.
//!
//! Squared distances are computed through the expansion
//! `‖a − b‖² = ‖a‖² + ‖b‖² − 2a·b`, which suffers from cancellation when `a`
//! and `b` are close. The residue can be a tiny negative number, which would
//! turn into `NaN` once a kernel takes its square root. The helpers here clean
//! up such residue with a single, explicitly named threshold.
//!
//! # Provided items
//! - [`ZERO_SNAP_TOL`]: magnitude below which entries are set to exactly 0.
//! - [`snap_to_zero`]: apply a threshold in place to a matrix.
use ndarray::Array2;

/// Snapping threshold for squared-distance matrices.
///
/// Entries with `|v| < ZERO_SNAP_TOL` are replaced with `0.0`. The value is
/// tight enough to leave any genuine squared distance between distinct,
/// reasonably scaled feature vectors untouched.
pub const ZERO_SNAP_TOL: f64 = 1e-12;

/// Replace every entry with magnitude below `tol` by an exact `0.0`.
///
/// Parameters
/// ----------
/// - `mat`: `&mut Array2<f64>`
///   Matrix updated in place.
/// - `tol`: `f64`
///   Non-negative threshold. A `tol` of `0.0` leaves the matrix unchanged.
///
/// Notes
/// -----
/// - `NaN` entries compare false against the threshold and are preserved.
/// - `-0.0` residue is normalized to `+0.0`.
pub fn snap_to_zero(mat: &mut Array2<f64>, tol: f64) {
    mat.mapv_inplace(|v| if v.abs() < tol { 0.0 } else { v });
}
