//! selection::criteria — model-selection criteria for kernel ridge regression.
//!
//! Purpose
//! -------
//! Score a fitted kernel ridge regression at a single λ. Each criterion
//! calls the external estimator once, takes the total smoother `A`, and
//! reduces it (with the response) to a scalar where lower is better.
//!
//! Key behaviors
//! -------------
//! - [`Criterion`] is a closed enum resolved once from its name.
//! - [`Criterion::score`] is the pure reduction from `(y, A)`; it needs no
//!   estimator and rejects a smoother that is not `n×n`.
//! - [`Criterion::evaluate`] validates the request, calls the estimator,
//!   checks the smoother shape, and scores.
//! - Free functions [`loocv`], [`aic`], [`aicc`], [`bic`], [`gcv`], [`gcvc`],
//!   and [`gmpml`] are shorthands for `Criterion::X.evaluate(..)`.
//!
//! Conventions
//! -----------
//! With `n = len(y)`, `M = I − A`, `rss = yᵗ·M·M·y`, and `tr = tr(A)`:
//!
//! | criterion | score                                             |
//! |-----------|---------------------------------------------------|
//! | AIC       | `ln(rss) + 2(tr + 2)/n`                           |
//! | AICc      | `ln(rss) + 2(tr + 2)/(n − tr − 3)`                |
//! | BIC       | `ln(rss) + ln(n)(tr + 2)/n`                       |
//! | GCV       | `ln(rss) − 2·ln(1 − tr/n − 1/n)`                  |
//! | GCVc      | `ln(rss) − 2·ln(max(0, 1 − tr/n − 2/n))`          |
//! | GMPML     | `ln(yᵗ·M·y) − ln(det M)/(n − 1)`                  |
//! | LOOCV     | `Σᵢ ((M·y)ᵢ / Mᵢᵢ)²`                              |
//!
//! - GCV is left unclamped, so it turns NaN once
//!   `tr/n + 1/n > 1`; GCVc clamps its argument at zero and scores `+∞`
//!   instead.
//! - Non-finite scores are values, not errors.
use crate::selection::{
    errors::{TuningError, TuningResult},
    estimator::RidgeEstimator,
    smoother::{determinant, quadratic_form, residual_operator, residual_sum_of_squares, trace},
    validation::{validate_lambda, validate_problem, validate_smoother},
};
use ndarray::{Array1, Array2, Zip};
use std::{fmt, str::FromStr};

/// Model-selection criterion.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"loocv"`, `"aic"`, `"aicc"`, `"bic"`, `"gcv"`, `"gcvc"`, `"gmpml"`).
/// Unknown names return `TuningError::UnknownCriterion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Loocv,
    Aic,
    Aicc,
    Bic,
    Gcv,
    Gcvc,
    Gmpml,
}

impl Criterion {
    pub const ALL: [Criterion; 7] = [
        Criterion::Loocv,
        Criterion::Aic,
        Criterion::Aicc,
        Criterion::Bic,
        Criterion::Gcv,
        Criterion::Gcvc,
        Criterion::Gmpml,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Criterion::Loocv => "loocv",
            Criterion::Aic => "aic",
            Criterion::Aicc => "aicc",
            Criterion::Bic => "bic",
            Criterion::Gcv => "gcv",
            Criterion::Gcvc => "gcvc",
            Criterion::Gmpml => "gmpml",
        }
    }

    /// Reduce a response and total smoother to a criterion score.
    ///
    /// Parameters
    /// ----------
    /// - `y`: `&Array1<f64>`
    ///   Response of length `n`.
    /// - `a`: `&Array2<f64>`
    ///   Total smoother, `n×n`.
    ///
    /// Returns
    /// -------
    /// `TuningResult<f64>`
    ///   The score; lower is better. May be `±∞` or NaN on numeric
    ///   degeneracy (e.g. `rss ≤ 0`, `det M ≤ 0`, a zero diagonal of `M`).
    ///
    /// Errors
    /// ------
    /// - `TuningError::SmootherShape` if `a` is not `n×n`.
    pub fn score(&self, y: &Array1<f64>, a: &Array2<f64>) -> TuningResult<f64> {
        validate_smoother(a, y.len())?;
        let n = y.len() as f64;
        let m = residual_operator(a);
        let tr = trace(a);
        let log_rss = || residual_sum_of_squares(&m, y).ln();
        let score = match self {
            Criterion::Aic => log_rss() + 2.0 * (tr + 2.0) / n,
            Criterion::Aicc => log_rss() + 2.0 * (tr + 2.0) / (n - tr - 3.0),
            Criterion::Bic => log_rss() + n.ln() * (tr + 2.0) / n,
            Criterion::Gcv => log_rss() - 2.0 * (1.0 - tr / n - 1.0 / n).ln(),
            Criterion::Gcvc => log_rss() - 2.0 * f64::max(0.0, 1.0 - tr / n - 2.0 / n).ln(),
            Criterion::Gmpml => quadratic_form(&m, y).ln() - determinant(&m).ln() / (n - 1.0),
            Criterion::Loocv => {
                let my = m.dot(y);
                Zip::from(&my).and(m.diag()).fold(0.0, |acc, &r, &d| acc + (r / d).powi(2))
            }
        };
        Ok(score)
    }

    /// Fit at `lambda` through `estimator` and score the resulting smoother.
    ///
    /// Parameters
    /// ----------
    /// - `y`: `&Array1<f64>`
    ///   Response of length `n ≥ 1`.
    /// - `x`: `&Array2<f64>`
    ///   Fixed-effects design, `n×d`.
    /// - `kernels`: `&[Array2<f64>]`
    ///   Kernel Gram matrices, each `n×n`.
    /// - `lambda`: `f64`
    ///   Ridge parameter, finite and `> 0`.
    /// - `estimator`: `&E`
    ///   External ridge estimator.
    ///
    /// Errors
    /// ------
    /// - Validation errors from [`validate_problem`] and [`validate_lambda`].
    /// - `TuningError::Estimator` when the estimator fails.
    /// - `TuningError::SmootherShape` when the smoother is not `n×n`.
    pub fn evaluate<E: RidgeEstimator + ?Sized>(
        &self, y: &Array1<f64>, x: &Array2<f64>, kernels: &[Array2<f64>], lambda: f64,
        estimator: &E,
    ) -> TuningResult<f64> {
        validate_problem(y, x, kernels)?;
        validate_lambda(0, lambda)?;
        self.evaluate_validated(y, x, kernels, lambda, estimator)
    }

    /// [`Criterion::evaluate`] for inputs already checked by the caller.
    pub(crate) fn evaluate_validated<E: RidgeEstimator + ?Sized>(
        &self, y: &Array1<f64>, x: &Array2<f64>, kernels: &[Array2<f64>], lambda: f64,
        estimator: &E,
    ) -> TuningResult<f64> {
        let fit = estimator.estimate(y, x, kernels, lambda)?;
        self.score(y, &fit.total)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Criterion {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "loocv" => Ok(Criterion::Loocv),
            "aic" => Ok(Criterion::Aic),
            "aicc" => Ok(Criterion::Aicc),
            "bic" => Ok(Criterion::Bic),
            "gcv" => Ok(Criterion::Gcv),
            "gcvc" => Ok(Criterion::Gcvc),
            "gmpml" => Ok(Criterion::Gmpml),
            _ => Err(TuningError::UnknownCriterion { name: s.to_string() }),
        }
    }
}

/// Leave-one-out cross-validation score at `lambda`.
pub fn loocv<E: RidgeEstimator + ?Sized>(
    y: &Array1<f64>, x: &Array2<f64>, kernels: &[Array2<f64>], lambda: f64, estimator: &E,
) -> TuningResult<f64> {
    Criterion::Loocv.evaluate(y, x, kernels, lambda, estimator)
}

/// Akaike information criterion at `lambda`.
pub fn aic<E: RidgeEstimator + ?Sized>(
    y: &Array1<f64>, x: &Array2<f64>, kernels: &[Array2<f64>], lambda: f64, estimator: &E,
) -> TuningResult<f64> {
    Criterion::Aic.evaluate(y, x, kernels, lambda, estimator)
}

/// Small-sample corrected AIC at `lambda`.
pub fn aicc<E: RidgeEstimator + ?Sized>(
    y: &Array1<f64>, x: &Array2<f64>, kernels: &[Array2<f64>], lambda: f64, estimator: &E,
) -> TuningResult<f64> {
    Criterion::Aicc.evaluate(y, x, kernels, lambda, estimator)
}

/// Bayesian information criterion at `lambda`.
pub fn bic<E: RidgeEstimator + ?Sized>(
    y: &Array1<f64>, x: &Array2<f64>, kernels: &[Array2<f64>], lambda: f64, estimator: &E,
) -> TuningResult<f64> {
    Criterion::Bic.evaluate(y, x, kernels, lambda, estimator)
}

/// Generalized cross-validation at `lambda` (unclamped).
pub fn gcv<E: RidgeEstimator + ?Sized>(
    y: &Array1<f64>, x: &Array2<f64>, kernels: &[Array2<f64>], lambda: f64, estimator: &E,
) -> TuningResult<f64> {
    Criterion::Gcv.evaluate(y, x, kernels, lambda, estimator)
}

/// Corrected generalized cross-validation at `lambda` (clamped at zero).
pub fn gcvc<E: RidgeEstimator + ?Sized>(
    y: &Array1<f64>, x: &Array2<f64>, kernels: &[Array2<f64>], lambda: f64, estimator: &E,
) -> TuningResult<f64> {
    Criterion::Gcvc.evaluate(y, x, kernels, lambda, estimator)
}

/// Generalized maximum profile marginal likelihood at `lambda`.
pub fn gmpml<E: RidgeEstimator + ?Sized>(
    y: &Array1<f64>, x: &Array2<f64>, kernels: &[Array2<f64>], lambda: f64, estimator: &E,
) -> TuningResult<f64> {
    Criterion::Gmpml.evaluate(y, x, kernels, lambda, estimator)
}
