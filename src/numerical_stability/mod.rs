//! numerical_stability — shared tolerances and in-place numeric guards.
//!
//! Purpose
//! -------
//! Centralize the small numeric tolerances used by the kernel and selection
//! layers so that every call site agrees on what "numerically zero" means.
//!
//! Key behaviors
//! -------------
//! - Expose [`ZERO_SNAP_TOL`], the magnitude below which squared distances
//!   are replaced by an exact `0.0`.
//! - Provide [`snap_to_zero`], an in-place pass that applies that threshold
//!   to an `ndarray` matrix.
//!
//! Invariants & assumptions
//! ------------------------
//! - Tolerances are non-negative and finite.
//! - Snapping only ever replaces values by `0.0`; it never changes the sign
//!   or magnitude of entries at or above the threshold.
//!
//! Conventions
//! -----------
//! - This module never logs, performs I/O, or touches global state.
//!
//! Downstream usage
//! ----------------
//! - `kernels::distance` snaps every squared-distance matrix before it feeds
//!   square roots (Matérn, rational quadratic) or exponentials (RBF).
//!
//! Testing notes
//! -------------
//! - Unit tests in [`tolerances`] cover the threshold boundary and the
//!   sign handling of tiny negative residues.

pub mod tolerances;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::tolerances::{ZERO_SNAP_TOL, snap_to_zero};
