//! kernel_tuning — kernels and ridge-parameter selection for kernel ridge
//! regression, with optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the kernel library and the λ selector to Python via the `_kernel_tuning`
//! extension module. When the `python-bindings` feature is enabled, this
//! module defines the Python-facing classes and submodules.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules: [`kernels`] (distance utility, kernel
//!   families, descriptors, libraries), [`selection`] (estimator seam,
//!   criteria, grid search), and [`numerical_stability`] (shared tolerances).
//! - Re-export the three everyday entry points [`generate_kernel`],
//!   [`square_dist`], and [`tuning`] at the crate root.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_kernel_tuning` Python extension, with `kernels` and `selection`
//!   submodules registered in `sys.modules` for dotted imports.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs only
//!   FFI glue and error mapping.
//! - Python-visible types mirror the invariants of their Rust counterparts.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are rich enums internally and are converted to
//!   `ValueError` at the PyO3 boundary.
//! - Python-driven λ searches evaluate grid points sequentially because the
//!   Python estimator needs the GIL for every call.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by the
//!   integration test under `tests/`, which drives the full pipeline with a
//!   reference ridge estimator.

pub mod kernels;
pub mod numerical_stability;
pub mod selection;
pub mod utils;

pub use crate::{
    kernels::{generate_kernel, square_dist},
    selection::tuning,
};

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    kernels::{Kernel, KernelFamily},
    selection::{Criterion, TuningOptions, TuningOutcome, tuning_with},
    utils::{PyRidgeEstimator, extract_f64_matrices, extract_f64_matrix, extract_f64_vector},
};

/// Kernel — Python-facing wrapper for a kernel descriptor.
///
/// Purpose
/// -------
/// Build a kernel once from a family name and hyperparameters, then evaluate
/// Gram matrices by calling the object as `k(x1, x2=None, l=None, p=None,
/// sigma=None)`. Hyperparameters given at call time override the bound ones.
///
/// Parameters
/// ----------
/// Constructed from Python via `Kernel(family, l=1.0, p=2, sigma=1.0)`:
/// - `family`: `str`
///   One of `intercept`, `linear`, `polynomial`, `rbf`, `matern`,
///   `rational`, `nn`.
/// - `l`: `float`
///   Length-scale (RBF, Matérn, rational); must be finite and `> 0` there.
/// - `p`: `int`
///   Order/power (polynomial, Matérn, rational).
/// - `sigma`: `float`
///   NN covariance coefficient.
///
/// Notes
/// -----
/// - Native Rust code should use [`generate_kernel`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "Kernel", module = "kernel_tuning.kernels")]
pub struct PyKernel {
    inner: Kernel,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyKernel {
    #[new]
    #[pyo3(
        text_signature = "(family, /, l=1.0, p=2, sigma=1.0)",
        signature = (family, l = 1.0, p = 2, sigma = 1.0)
    )]
    pub fn new(family: &str, l: f64, p: u32, sigma: f64) -> PyResult<Self> {
        let family: KernelFamily = family.parse()?;
        Ok(PyKernel { inner: generate_kernel(family, l, p, sigma)? })
    }

    /// Gram matrix between the rows of `x1` and `x2` (or `x1` with itself).
    ///
    /// `l`, `p`, and `sigma` may be passed positionally or by keyword to
    /// replace the bound hyperparameters for this call.
    #[pyo3(signature = (x1, x2 = None, l = None, p = None, sigma = None))]
    pub fn __call__<'py>(
        &self, py: Python<'py>, x1: &Bound<'py, PyAny>, x2: Option<&Bound<'py, PyAny>>,
        l: Option<f64>, p: Option<u32>, sigma: Option<f64>,
    ) -> PyResult<Bound<'py, PyArray2<f64>>> {
        let x1 = extract_f64_matrix(x1)?;
        let x2 = x2.map(extract_f64_matrix).transpose()?;
        let gram = self.inner.evaluate_overriding(&x1, x2.as_ref(), l, p, sigma)?;
        Ok(gram.into_pyarray(py))
    }

    #[getter]
    pub fn family(&self) -> String {
        self.inner.family().to_string()
    }

    #[getter]
    pub fn length_scale(&self) -> f64 {
        self.inner.length_scale()
    }

    #[getter]
    pub fn order(&self) -> u32 {
        self.inner.order()
    }

    #[getter]
    pub fn sigma(&self) -> f64 {
        self.inner.sigma()
    }

    pub fn __repr__(&self) -> String {
        format!(
            "Kernel(family='{}', l={}, p={}, sigma={})",
            self.inner.family(),
            self.inner.length_scale(),
            self.inner.order(),
            self.inner.sigma()
        )
    }
}

/// square_dist — squared Euclidean distances between rows of `x1 / l` and
/// `x2 / l`, exposed to Python.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "square_dist")]
#[pyo3(signature = (x1, x2 = None, l = 1.0))]
fn py_square_dist<'py>(
    py: Python<'py>, x1: &Bound<'py, PyAny>, x2: Option<&Bound<'py, PyAny>>, l: f64,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let x1 = extract_f64_matrix(x1)?;
    let x2 = x2.map(extract_f64_matrix).transpose()?;
    let dist = square_dist(&x1, x2.as_ref(), l)?;
    Ok(dist.into_pyarray(py))
}

/// TuningOutcome — result of a λ grid search exposed to Python.
///
/// Fields
/// ------
/// - `inner`: [`TuningOutcome`]
///   Rust-side outcome backing the read-only properties.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "TuningOutcome", module = "kernel_tuning.selection")]
pub struct PyTuningOutcome {
    inner: TuningOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyTuningOutcome {
    #[getter]
    pub fn criterion(&self) -> String {
        self.inner.criterion.to_string()
    }

    #[getter]
    pub fn lam(&self) -> f64 {
        self.inner.lambda
    }

    #[getter]
    pub fn score(&self) -> f64 {
        self.inner.score
    }

    #[getter]
    pub fn scores(&self) -> Vec<f64> {
        self.inner.scores.clone()
    }

    /// Number of grid points sharing the minimal score, or `None`.
    #[getter]
    pub fn ties(&self) -> Option<usize> {
        self.inner.ties.as_ref().map(|tie| tie.count)
    }

    #[getter]
    pub fn degenerate(&self) -> bool {
        self.inner.is_degenerate()
    }

    pub fn __repr__(&self) -> String {
        format!(
            "TuningOutcome(criterion='{}', lam={}, score={}, ties={:?})",
            self.inner.criterion,
            self.inner.lambda,
            self.inner.score,
            self.ties()
        )
    }
}

/// tuning — select λ from `grid` by minimizing `criterion`, exposed to Python.
///
/// Parameters
/// ----------
/// - `y`: 1-D float array of length `n`.
/// - `x`: `n×d` design matrix.
/// - `kernels`: sequence of `n×n` kernel matrices.
/// - `criterion`: `str`, one of `loocv`, `aic`, `aicc`, `bic`, `gcv`,
///   `gcvc`, `gmpml`.
/// - `grid`: 1-D float array of candidate λ values.
/// - `estimator`: callable `(y, x, kernels, lam) -> A`, returning the total
///   `n×n` smoother.
///
/// Errors
/// ------
/// - `ValueError` for an unknown criterion (raised before the estimator is
///   touched), invalid shapes or grid values, and estimator failures.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "tuning")]
#[pyo3(signature = (y, x, kernels, criterion, grid, estimator))]
fn py_tuning<'py>(
    y: &Bound<'py, PyAny>, x: &Bound<'py, PyAny>, kernels: &Bound<'py, PyAny>, criterion: &str,
    grid: &Bound<'py, PyAny>, estimator: &Bound<'py, PyAny>,
) -> PyResult<PyTuningOutcome> {
    let criterion: Criterion = criterion.parse()?;
    let y = extract_f64_vector(y)?;
    let x = extract_f64_matrix(x)?;
    let kernels = extract_f64_matrices(kernels)?;
    let grid = extract_f64_vector(grid)?.to_vec();
    let estimator = PyRidgeEstimator::new(estimator)?;

    let outcome = tuning_with(
        criterion,
        &y,
        &x,
        &kernels,
        &grid,
        &estimator,
        &TuningOptions::sequential(),
    )?;
    Ok(PyTuningOutcome { inner: outcome })
}

/// _kernel_tuning — PyO3 module initializer for the Python extension.
///
/// Key behaviors
/// -------------
/// - Create `kernels` and `selection` submodules and attach them to the
///   parent `_kernel_tuning` module.
/// - Register the submodules in `sys.modules` so they are importable via
///   dotted paths from Python.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating submodules or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _kernel_tuning<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let kernels_mod = PyModule::new(_py, "kernels")?;
    let selection_mod = PyModule::new(_py, "selection")?;
    kernels_module(_py, m, &kernels_mod)?;
    selection_module(_py, m, &selection_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("kernel_tuning.kernels", kernels_mod)?;

    _py.import("sys")?.getattr("modules")?.set_item("kernel_tuning.selection", selection_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn kernels_module<'py>(
    _py: Python, kernel_tuning: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyKernel>()?;
    m.add_function(wrap_pyfunction!(py_square_dist, m)?)?;
    kernel_tuning.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn selection_module<'py>(
    _py: Python, kernel_tuning: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyTuningOutcome>()?;
    m.add_function(wrap_pyfunction!(py_tuning, m)?)?;
    kernel_tuning.add_submodule(m)?;
    Ok(())
}
