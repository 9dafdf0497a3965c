//! selection — choosing the ridge parameter λ for kernel ridge regression.
//!
//! Purpose
//! -------
//! Score candidate λ values with classical model-selection criteria computed
//! from the smoother matrix of a fitted model, and pick the best grid point.
//! Model fitting itself is delegated to an external [`RidgeEstimator`].
//!
//! Key behaviors
//! -------------
//! - [`estimator`]: the [`RidgeEstimator`] seam and the [`RidgeFit`] it
//!   returns.
//! - [`smoother`]: residual operator, trace, quadratic forms, determinant.
//! - [`criteria`]: the closed [`Criterion`] enum (LOOCV, AIC, AICc, BIC,
//!   GCV, GCVc, GMPML) and one free function per criterion.
//! - [`validation`]: request checks run before any estimator call.
//! - [`tuning`](mod@tuning): grid search returning a [`TuningOutcome`].
//! - [`errors`]: [`TuningError`] and the [`TuningResult`] alias.
//!
//! Invariants & assumptions
//! ------------------------
//! - Scores are "lower is better"; non-finite scores are values, not errors.
//! - The selected λ is always a grid element.
pub mod criteria;
pub mod errors;
pub mod estimator;
pub mod smoother;
pub mod tuning;
pub mod validation;

pub use self::{
    criteria::{Criterion, aic, aicc, bic, gcv, gcvc, gmpml, loocv},
    errors::{TuningError, TuningResult},
    estimator::{RidgeEstimator, RidgeFit},
    tuning::{TieDiagnostic, TuningOptions, TuningOutcome, tuning, tuning_with},
};

pub mod prelude {
    pub use super::{
        Criterion, RidgeEstimator, RidgeFit, TieDiagnostic, TuningError, TuningOptions,
        TuningOutcome, TuningResult, tuning, tuning_with,
    };
}
