//! selection::tuning — grid search for the ridge parameter λ.
//!
//! Purpose
//! -------
//! Choose λ for kernel ridge regression by evaluating one model-selection
//! criterion at every point of a caller-supplied grid and returning the
//! grid point with the lowest score.
//!
//! Key behaviors
//! -------------
//! - Resolve the criterion name first, then validate the problem and the
//!   grid; no estimator call happens until every check has passed.
//! - Evaluate each λ independently (sequentially, or with `rayon` under the
//!   `parallel` feature) and keep the full score vector in grid order.
//! - Reduce with a total order on scores: numbers ascend, `+∞` after every
//!   finite value, NaN after everything. Exactly equal best scores are a
//!   tie; the smallest tied λ wins and a [`TieDiagnostic`] is attached.
//!
//! Invariants & assumptions
//! ------------------------
//! - The selected λ is always an element of the grid; nothing is
//!   interpolated or extrapolated.
//! - The reduction depends only on `(grid, scores)`, so sequential and
//!   parallel evaluation select the same λ.
//! - A single-point grid always returns that point, whatever its score.
//!
//! Conventions
//! -----------
//! - Logging goes through the `log` facade: one `debug!` per evaluated λ
//!   and a `warn!` when the minimum is tied. The crate never installs a
//!   logger.
//! - Estimator failures abort the search; there are no retries. When several
//!   grid points fail, the error of the earliest one in grid order is
//!   returned on both evaluation paths.
//!
//! Downstream usage
//! ----------------
//! - String-driven callers (bindings, config files) use [`tuning`]; typed
//!   Rust callers use [`tuning_with`] and [`TuningOptions`].
use crate::selection::{
    criteria::Criterion,
    errors::TuningResult,
    estimator::RidgeEstimator,
    validation::{validate_grid, validate_problem},
};
use ndarray::{Array1, Array2};
use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// TuningOptions — configuration for the λ grid search.
///
/// Fields
/// ------
/// - `parallel`: `bool`
///   Evaluate grid points with `rayon`. Defaults to `true` when the crate is
///   built with the `parallel` feature and is ignored without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuningOptions {
    pub parallel: bool,
}

impl Default for TuningOptions {
    fn default() -> Self {
        TuningOptions { parallel: cfg!(feature = "parallel") }
    }
}

impl TuningOptions {
    /// Options that force one-at-a-time evaluation in grid order.
    pub fn sequential() -> Self {
        TuningOptions { parallel: false }
    }
}

/// TieDiagnostic — several grid points attained the minimal score.
///
/// Fields
/// ------
/// - `count`: `usize`
///   Number of grid points whose score equals the minimum (always ≥ 2).
/// - `lambdas`: `Vec<f64>`
///   The tied λ values, in grid order.
#[derive(Debug, Clone, PartialEq)]
pub struct TieDiagnostic {
    pub count: usize,
    pub lambdas: Vec<f64>,
}

/// TuningOutcome — result of a λ grid search.
///
/// Fields
/// ------
/// - `criterion`: [`Criterion`]
///   Criterion that was minimized.
/// - `lambda`: `f64`
///   Selected grid value.
/// - `score`: `f64`
///   Score at `lambda`; may be non-finite (see [`TuningOutcome::is_degenerate`]).
/// - `scores`: `Vec<f64>`
///   Score at every grid point, in grid order.
/// - `ties`: `Option<TieDiagnostic>`
///   Present when more than one grid point attained the minimal score.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningOutcome {
    pub criterion: Criterion,
    pub lambda: f64,
    pub score: f64,
    pub scores: Vec<f64>,
    pub ties: Option<TieDiagnostic>,
}

impl TuningOutcome {
    /// `true` when no grid point produced a finite score.
    ///
    /// A best score of `−∞` next to finite scores is not degenerate; it is
    /// simply the smallest value on the grid.
    pub fn is_degenerate(&self) -> bool {
        !self.scores.iter().any(|score| score.is_finite())
    }

    /// `true` when the minimum was attained by more than one grid point.
    pub fn is_tied(&self) -> bool {
        self.ties.is_some()
    }
}

/// Select λ from `grid` by minimizing the criterion named `criterion`.
///
/// Parameters
/// ----------
/// - `y`: `&Array1<f64>`
///   Response of length `n ≥ 1`.
/// - `x`: `&Array2<f64>`
///   Fixed-effects design, `n×d`.
/// - `kernels`: `&[Array2<f64>]`
///   Kernel Gram matrices, each `n×n`.
/// - `criterion`: `&str`
///   One of `loocv`, `aic`, `aicc`, `bic`, `gcv`, `gcvc`, `gmpml`
///   (case-insensitive).
/// - `grid`: `&[f64]`
///   Candidate λ values; non-empty, each finite and `> 0`.
/// - `estimator`: `&E`
///   External ridge estimator.
///
/// Returns
/// -------
/// `TuningResult<TuningOutcome>`
///   The selected λ together with its score, all scores, and any tie.
///
/// Errors
/// ------
/// - `TuningError::UnknownCriterion` before any other check.
/// - Validation errors (`EmptyResponse`, `DesignRows`, `KernelShape`,
///   `EmptyGrid`, `InvalidLambda`) before any estimator call.
/// - `TuningError::Estimator` / `TuningError::SmootherShape` from the first
///   failing grid point in grid order. Parallel evaluation reports the same
///   error as sequential evaluation.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::{Array1, Array2, array};
/// # use kernel_tuning::selection::{RidgeFit, tuning};
/// let y = array![1.0, 2.0, 4.0];
/// let x = Array2::<f64>::ones((3, 1));
/// let shrink = |y: &Array1<f64>,
///               _: &Array2<f64>,
///               _: &[Array2<f64>],
///               lambda: f64|
///  -> anyhow::Result<RidgeFit> {
///     Ok(RidgeFit::from_total(Array2::<f64>::eye(y.len()) / (1.0 + lambda)))
/// };
/// let outcome = tuning(&y, &x, &[], "loocv", &[2.0], &shrink).unwrap();
/// assert_eq!(outcome.lambda, 2.0);
/// ```
pub fn tuning<E: RidgeEstimator + ?Sized>(
    y: &Array1<f64>, x: &Array2<f64>, kernels: &[Array2<f64>], criterion: &str, grid: &[f64],
    estimator: &E,
) -> TuningResult<TuningOutcome> {
    let criterion: Criterion = criterion.parse()?;
    tuning_with(criterion, y, x, kernels, grid, estimator, &TuningOptions::default())
}

/// Typed variant of [`tuning`] with explicit [`TuningOptions`].
///
/// Errors
/// ------
/// - As [`tuning`], minus `UnknownCriterion`.
pub fn tuning_with<E: RidgeEstimator + ?Sized>(
    criterion: Criterion, y: &Array1<f64>, x: &Array2<f64>, kernels: &[Array2<f64>],
    grid: &[f64], estimator: &E, options: &TuningOptions,
) -> TuningResult<TuningOutcome> {
    validate_problem(y, x, kernels)?;
    validate_grid(grid)?;

    let evaluate = |lambda: f64| -> TuningResult<f64> {
        let score = criterion.evaluate_validated(y, x, kernels, lambda, estimator)?;
        log::debug!("{criterion} at lambda = {lambda}: score = {score}");
        Ok(score)
    };

    let scores = if options.parallel {
        evaluate_grid_parallel(grid, &evaluate)?
    } else {
        grid.iter().map(|&lambda| evaluate(lambda)).collect::<TuningResult<Vec<f64>>>()?
    };

    Ok(select_minimum(criterion, grid, scores))
}

// ---- Helper methods ----

#[cfg(feature = "parallel")]
fn evaluate_grid_parallel<F>(grid: &[f64], evaluate: &F) -> TuningResult<Vec<f64>>
where
    F: Fn(f64) -> TuningResult<f64> + Sync,
{
    // The first error in grid order wins, whichever worker hit it first.
    let results: Vec<TuningResult<f64>> =
        grid.par_iter().map(|&lambda| evaluate(lambda)).collect();
    results.into_iter().collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_grid_parallel<F>(grid: &[f64], evaluate: &F) -> TuningResult<Vec<f64>>
where
    F: Fn(f64) -> TuningResult<f64>,
{
    grid.iter().map(|&lambda| evaluate(lambda)).collect()
}

/// Total order on scores: ascending numbers, then NaN. Two NaNs are equal.
fn compare_scores(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Pick the smallest-scoring grid point, breaking exact ties by smallest λ.
///
/// `grid` is non-empty and `scores` has the same length.
fn select_minimum(criterion: Criterion, grid: &[f64], scores: Vec<f64>) -> TuningOutcome {
    let mut best = 0;
    for idx in 1..grid.len() {
        let ordering = compare_scores(scores[idx], scores[best])
            .then_with(|| grid[idx].partial_cmp(&grid[best]).unwrap_or(Ordering::Equal));
        if ordering == Ordering::Less {
            best = idx;
        }
    }
    let best_score = scores[best];

    let tied: Vec<f64> = grid
        .iter()
        .zip(&scores)
        .filter(|&(_, &score)| compare_scores(score, best_score) == Ordering::Equal)
        .map(|(&lambda, _)| lambda)
        .collect();
    let ties = if tied.len() > 1 {
        log::warn!(
            "{criterion}: {} grid points share the minimal score {best_score}; selecting the \
             smallest lambda = {}",
            tied.len(),
            grid[best]
        );
        Some(TieDiagnostic { count: tied.len(), lambdas: tied })
    } else {
        None
    };

    TuningOutcome { criterion, lambda: grid[best], score: best_score, scores, ties }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{errors::TuningError, estimator::RidgeFit};
    use approx::assert_relative_eq;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Single-point grids for every criterion.
    // - Exact ties resolved to the smallest λ with a diagnostic.
    // - Criterion-name and grid validation before any estimator call.
    // - The NaN / +∞ ordering used by the reduction.
    // - Agreement of sequential and parallel evaluation.
    //
    // They intentionally DO NOT cover:
    // - Criterion formulas; see `selection::criteria`.
    // -------------------------------------------------------------------------

    type EstimatorFn =
        fn(&Array1<f64>, &Array2<f64>, &[Array2<f64>], f64) -> anyhow::Result<RidgeFit>;

    fn problem() -> (Array1<f64>, Array2<f64>, Vec<Array2<f64>>) {
        let y = Array1::from(vec![0.3, -1.2, 2.5, 0.8, -0.4, 1.7]);
        let x = Array2::<f64>::ones((6, 1));
        let k = Array2::<f64>::eye(6);
        (y, x, vec![k])
    }

    /// Shrinks towards zero with a smoother `I / (1 + λ)`.
    fn shrinkage(
        y: &Array1<f64>, _x: &Array2<f64>, _k: &[Array2<f64>], lambda: f64,
    ) -> anyhow::Result<RidgeFit> {
        Ok(RidgeFit::from_total(Array2::<f64>::eye(y.len()) / (1.0 + lambda)))
    }

    /// Ignores λ entirely, so every grid point scores the same.
    fn constant_smoother(
        y: &Array1<f64>, _x: &Array2<f64>, _k: &[Array2<f64>], _lambda: f64,
    ) -> anyhow::Result<RidgeFit> {
        Ok(RidgeFit::from_total(Array2::<f64>::eye(y.len()) * 0.25))
    }

    /// Counts calls so tests can assert that none happened.
    struct CountingEstimator {
        calls: AtomicUsize,
    }

    impl RidgeEstimator for CountingEstimator {
        fn estimate(
            &self, y: &Array1<f64>, x: &Array2<f64>, kernels: &[Array2<f64>], lambda: f64,
        ) -> anyhow::Result<RidgeFit> {
            self.calls.fetch_add(1, AtomicOrdering::SeqCst);
            shrinkage(y, x, kernels, lambda)
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a single-point grid returns that point for every
    // criterion, including criteria that degenerate on it.
    //
    // Given
    // -----
    // - Grid [0.7] and the shrinkage estimator.
    //
    // Expect
    // ------
    // - `lambda == 0.7`, one score, no tie.
    fn single_point_grid_returns_that_point() {
        // Arrange
        let (y, x, k) = problem();

        for criterion in Criterion::ALL {
            // Act
            let estimator = shrinkage as EstimatorFn;
            let outcome = tuning(&y, &x, &k, criterion.name(), &[0.7], &estimator).unwrap();

            // Assert
            assert_eq!(outcome.lambda, 0.7, "criterion {criterion}");
            assert_eq!(outcome.scores.len(), 1);
            assert!(outcome.ties.is_none());
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure an exact tie returns the smaller λ and reports the tie, even
    // when the grid is not sorted.
    //
    // Given
    // -----
    // - An estimator that ignores λ and the grid [3.0, 0.5].
    //
    // Expect
    // ------
    // - `lambda == 0.5` with `TieDiagnostic { count: 2, lambdas: [3.0, 0.5] }`.
    fn exact_tie_returns_smallest_lambda_with_diagnostic() {
        // Arrange
        let (y, x, k) = problem();

        // Act
        let outcome =
            tuning(&y, &x, &k, "aic", &[3.0, 0.5], &(constant_smoother as EstimatorFn)).unwrap();

        // Assert
        assert_eq!(outcome.lambda, 0.5);
        assert_eq!(outcome.ties, Some(TieDiagnostic { count: 2, lambdas: vec![3.0, 0.5] }));
        assert!(outcome.is_tied());
        assert!(!outcome.is_degenerate());
    }

    #[test]
    // Purpose
    // -------
    // Ensure an unknown criterion fails before the estimator is called.
    //
    // Given
    // -----
    // - Criterion "mallows" and a call-counting estimator.
    //
    // Expect
    // ------
    // - `UnknownCriterion` and zero estimator calls.
    fn unknown_criterion_fails_before_any_estimator_call() {
        // Arrange
        let (y, x, k) = problem();
        let estimator = CountingEstimator { calls: AtomicUsize::new(0) };

        // Act
        let result = tuning(&y, &x, &k, "mallows", &[0.1, 1.0], &estimator);

        // Assert
        assert_eq!(result, Err(TuningError::UnknownCriterion { name: "mallows".to_string() }));
        assert_eq!(estimator.calls.load(AtomicOrdering::SeqCst), 0);
    }

    #[test]
    // Purpose
    // -------
    // Ensure grid and shape validation also happen before any estimator
    // call, and that a valid grid calls the estimator once per point.
    //
    // Given
    // -----
    // - An empty grid, a grid containing 0, a 5-row design, then a valid
    //   three-point grid.
    //
    // Expect
    // ------
    // - `EmptyGrid`, `InvalidLambda`, `DesignRows` with zero calls, then
    //   exactly three calls.
    fn validation_precedes_estimator_calls() {
        // Arrange
        let (y, x, k) = problem();
        let estimator = CountingEstimator { calls: AtomicUsize::new(0) };

        // Act / Assert
        assert_eq!(tuning(&y, &x, &k, "gcv", &[], &estimator), Err(TuningError::EmptyGrid));
        assert_eq!(
            tuning(&y, &x, &k, "gcv", &[1.0, 0.0], &estimator),
            Err(TuningError::InvalidLambda { index: 1, value: 0.0 })
        );
        let short_x = Array2::<f64>::ones((5, 1));
        assert_eq!(
            tuning(&y, &short_x, &k, "gcv", &[1.0], &estimator),
            Err(TuningError::DesignRows { expected: 6, found: 5 })
        );
        assert_eq!(estimator.calls.load(AtomicOrdering::SeqCst), 0);

        tuning(&y, &x, &k, "gcv", &[0.1, 1.0, 10.0], &estimator).unwrap();
        assert_eq!(estimator.calls.load(AtomicOrdering::SeqCst), 3);
    }

    #[test]
    // Purpose
    // -------
    // Check the score ordering: finite < +∞ < NaN, NaN ties with NaN.
    //
    // Given
    // -----
    // - Hand-built score vectors passed straight to the reduction.
    //
    // Expect
    // ------
    // - Finite scores beat +∞ and NaN; +∞ beats NaN; all-NaN grids tie and
    //   return the smallest λ as a degenerate outcome.
    fn reduction_orders_infinity_and_nan_last() {
        let grid = [1.0, 2.0, 3.0];

        let finite_wins =
            select_minimum(Criterion::Gcv, &grid, vec![f64::NAN, 4.0, f64::INFINITY]);
        assert_eq!(finite_wins.lambda, 2.0);
        assert!(finite_wins.ties.is_none());

        let inf_beats_nan =
            select_minimum(Criterion::Gcv, &grid, vec![f64::NAN, f64::INFINITY, f64::NAN]);
        assert_eq!(inf_beats_nan.lambda, 2.0);
        assert!(inf_beats_nan.is_degenerate());

        let all_nan = select_minimum(Criterion::Gcv, &[5.0, 0.5, 2.0], vec![f64::NAN; 3]);
        assert_eq!(all_nan.lambda, 0.5);
        assert!(all_nan.is_degenerate());
        assert_eq!(all_nan.ties.map(|t| t.count), Some(3));
    }

    #[test]
    // Purpose
    // -------
    // Ensure a best score of −∞ next to finite scores is a regular
    // selection, not a degenerate one.
    //
    // Given
    // -----
    // - Scores [−∞, 4.79] passed to the reduction.
    // - An estimator returning A = I at λ = 0.1 (rss = 0, so AIC = −∞) and
    //   A = ½I at λ = 1.
    //
    // Expect
    // ------
    // - λ = 0.1 selected with score −∞ and `is_degenerate() == false`.
    // - All-infinite grids are still degenerate.
    fn negative_infinity_best_score_is_not_degenerate() {
        // Arrange
        let (y, x, k) = problem();
        let interpolating = |y: &Array1<f64>,
                             _: &Array2<f64>,
                             _: &[Array2<f64>],
                             lambda: f64|
         -> anyhow::Result<RidgeFit> {
            let scale = if lambda < 0.5 { 1.0 } else { 0.5 };
            Ok(RidgeFit::from_total(Array2::<f64>::eye(y.len()) * scale))
        };

        // Act
        let reduced = select_minimum(Criterion::Aic, &[0.1, 1.0], vec![f64::NEG_INFINITY, 4.79]);
        let searched = tuning(&y, &x, &k, "aic", &[0.1, 1.0], &interpolating).unwrap();
        let all_infinite =
            select_minimum(Criterion::Aic, &[0.1, 1.0], vec![f64::INFINITY, f64::NEG_INFINITY]);

        // Assert
        assert_eq!(reduced.lambda, 0.1);
        assert!(!reduced.is_degenerate());
        assert_eq!(searched.lambda, 0.1);
        assert_eq!(searched.score, f64::NEG_INFINITY);
        assert!(searched.scores[1].is_finite());
        assert!(!searched.is_degenerate());
        assert_eq!(all_infinite.lambda, 1.0);
        assert!(all_infinite.is_degenerate());
    }

    #[test]
    // Purpose
    // -------
    // Ensure LOOCV at an interpolating smoother (M = 0, so 0/0) does not win
    // the search over a finite LOOCV score.
    //
    // Given
    // -----
    // - A = I at λ = 0.1 and A = ½I at λ = 1, under "loocv".
    //
    // Expect
    // ------
    // - λ = 1 selected; the score recorded at λ = 0.1 is NaN.
    fn loocv_interpolating_smoother_loses_to_finite_score() {
        // Arrange
        let (y, x, k) = problem();
        let interpolating = |y: &Array1<f64>,
                             _: &Array2<f64>,
                             _: &[Array2<f64>],
                             lambda: f64|
         -> anyhow::Result<RidgeFit> {
            let scale = if lambda < 0.5 { 1.0 } else { 0.5 };
            Ok(RidgeFit::from_total(Array2::<f64>::eye(y.len()) * scale))
        };

        // Act
        let outcome = tuning(&y, &x, &k, "loocv", &[0.1, 1.0], &interpolating).unwrap();

        // Assert
        assert_eq!(outcome.lambda, 1.0);
        assert!(outcome.scores[0].is_nan());
        assert_relative_eq!(outcome.score, y.dot(&y), max_relative = 1e-12);
        assert!(!outcome.is_degenerate());
    }

    #[test]
    // Purpose
    // -------
    // Ensure that, when several grid points fail, both evaluation paths
    // report the failure of the earliest one in grid order.
    //
    // Given
    // -----
    // - An estimator failing with a λ-specific message for λ ≥ 1 and the
    //   grid [0.1, 1.0, 10.0, 100.0].
    //
    // Expect
    // ------
    // - The same `Estimator` error, naming λ = 1, for `parallel = false` and
    //   `parallel = true`.
    fn first_failure_in_grid_order_is_reported() {
        // Arrange
        let (y, x, k) = problem();
        let grid = [0.1, 1.0, 10.0, 100.0];
        let failing = |y: &Array1<f64>,
                       x: &Array2<f64>,
                       k: &[Array2<f64>],
                       lambda: f64|
         -> anyhow::Result<RidgeFit> {
            if lambda >= 1.0 {
                anyhow::bail!("solver failed at lambda = {lambda}");
            }
            shrinkage(y, x, k, lambda)
        };

        for parallel in [false, true] {
            // Act
            let result = tuning_with(
                Criterion::Gcv,
                &y,
                &x,
                &k,
                &grid,
                &failing,
                &TuningOptions { parallel },
            );

            // Assert
            assert_eq!(
                result,
                Err(TuningError::Estimator("solver failed at lambda = 1".to_string())),
                "parallel = {parallel}"
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that the selected λ carries the minimal recorded score and that
    // scores are reported in grid order.
    //
    // Given
    // -----
    // - A = I/(1+λ), so M = λ/(1+λ)·I and LOOCV = Σ yᵢ² (up to round-off)
    //   at every grid point.
    // - AIC, whose penalty 2(tr + 2)/n falls with λ while ln(rss) rises.
    //
    // Expect
    // ------
    // - LOOCV scores all ≈ Σ yᵢ².
    // - For both criteria, the score at the selected λ is the grid minimum.
    fn selected_lambda_has_minimal_recorded_score() {
        // Arrange
        let (y, x, k) = problem();
        let grid = [0.05, 0.5, 5.0, 50.0];
        let estimator = shrinkage as EstimatorFn;
        let sum_sq = y.dot(&y);

        for name in ["loocv", "aic"] {
            // Act
            let outcome = tuning(&y, &x, &k, name, &grid, &estimator).unwrap();

            // Assert
            assert_eq!(outcome.scores.len(), grid.len());
            let min_score = outcome.scores.iter().cloned().fold(f64::INFINITY, f64::min);
            assert_eq!(outcome.score, min_score, "criterion {name}");
            let idx = grid.iter().position(|&l| l == outcome.lambda).unwrap();
            assert_eq!(outcome.scores[idx], min_score);
            if name == "loocv" {
                for &score in &outcome.scores {
                    assert_relative_eq!(score, sum_sq, max_relative = 1e-12);
                }
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure sequential and parallel options select the same λ and record
    // bit-identical scores.
    //
    // Given
    // -----
    // - The shrinkage estimator and a five-point grid under BIC.
    //
    // Expect
    // ------
    // - Identical outcomes for `parallel = false` and `parallel = true`.
    fn sequential_and_parallel_evaluation_agree() {
        // Arrange
        let (y, x, k) = problem();
        let grid = [0.01, 0.1, 1.0, 10.0, 100.0];
        let estimator = shrinkage as EstimatorFn;

        // Act
        let seq = tuning_with(
            Criterion::Bic,
            &y,
            &x,
            &k,
            &grid,
            &estimator,
            &TuningOptions::sequential(),
        )
        .unwrap();
        let par = tuning_with(
            Criterion::Bic,
            &y,
            &x,
            &k,
            &grid,
            &estimator,
            &TuningOptions { parallel: true },
        )
        .unwrap();

        // Assert
        assert_eq!(seq, par);
    }
}
