//! selection::estimator — the seam to an external ridge estimator.
//!
//! Purpose
//! -------
//! Define the interface the λ selector consumes: something that, for a
//! given λ, fits a kernel ridge regression and returns its smoother
//! matrices. Fitting itself lives outside this crate.
//!
//! Key behaviors
//! -------------
//! - [`RidgeEstimator::estimate`] maps `(y, x, kernels, λ)` to a
//!   [`RidgeFit`]. Only [`RidgeFit::total`] is read by the criteria.
//! - Any `Fn(&Array1<f64>, &Array2<f64>, &[Array2<f64>], f64) ->
//!   anyhow::Result<RidgeFit>` closure that is `Sync` implements the trait,
//!   so ad-hoc estimators need no wrapper type.
//!
//! Invariants & assumptions
//! ------------------------
//! - Implementations are pure with respect to their inputs: the selector
//!   may call them in any order, and concurrently under the `parallel`
//!   feature.
//! - The total smoother must be `n×n` where `n = y.len()`; the selector
//!   checks this and fails with `TuningError::SmootherShape` otherwise.
use ndarray::{Array1, Array2};

/// RidgeFit — smoother matrices returned by a ridge estimator for one λ.
///
/// Fields
/// ------
/// - `terms`: `Vec<Array2<f64>>`
///   Per-term smoother matrices, one per kernel term (may be empty when the
///   estimator does not decompose the fit).
/// - `total`: `Array2<f64>`
///   Total smoother `A_λ` with `ŷ = A_λ·y`.
#[derive(Debug, Clone, PartialEq)]
pub struct RidgeFit {
    pub terms: Vec<Array2<f64>>,
    pub total: Array2<f64>,
}

impl RidgeFit {
    pub fn new(terms: Vec<Array2<f64>>, total: Array2<f64>) -> Self {
        RidgeFit { terms, total }
    }

    /// A fit that only reports the total smoother.
    pub fn from_total(total: Array2<f64>) -> Self {
        RidgeFit { terms: Vec::new(), total }
    }
}

/// External ridge estimator interface.
///
/// Required:
/// - `estimate(&y, &x, kernels, λ) -> anyhow::Result<RidgeFit>`: fit the
///   model for a single λ and return its smoother matrices.
///   - Errors: any failure is propagated unchanged and surfaces as
///     `TuningError::Estimator`; the selector never retries.
pub trait RidgeEstimator: Sync {
    fn estimate(
        &self, y: &Array1<f64>, x: &Array2<f64>, kernels: &[Array2<f64>], lambda: f64,
    ) -> anyhow::Result<RidgeFit>;
}

impl<F> RidgeEstimator for F
where
    F: Fn(&Array1<f64>, &Array2<f64>, &[Array2<f64>], f64) -> anyhow::Result<RidgeFit> + Sync,
{
    fn estimate(
        &self, y: &Array1<f64>, x: &Array2<f64>, kernels: &[Array2<f64>], lambda: f64,
    ) -> anyhow::Result<RidgeFit> {
        self(y, x, kernels, lambda)
    }
}
