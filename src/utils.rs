//! utils — conversion helpers for the Python bindings.
//!
//! Purpose
//! -------
//! Turn Python inputs (numpy arrays, pandas objects, nested sequences) into
//! owned `ndarray` values, and adapt a Python callable into a
//! [`RidgeEstimator`] so the λ selector can drive it.
//!
//! Conventions
//! -----------
//! - Every helper here is compiled only with the `python-bindings` feature.
//! - Inputs are copied into owned arrays; nothing borrows Python memory past
//!   the call that produced it.
//! - Conversion failures are `TypeError`s; shape problems are `ValueError`s.

#[cfg(feature = "python-bindings")]
use ndarray::{Array1, Array2};

#[cfg(feature = "python-bindings")]
use numpy::{PyReadonlyArray1, PyReadonlyArray2, ToPyArray};

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::{PyAny, PyList},
};

#[cfg(feature = "python-bindings")]
use crate::selection::estimator::{RidgeEstimator, RidgeFit};

/// Extract a 1-D float64 vector from a numpy array, pandas Series, or
/// sequence of floats.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_vector<'py>(raw: &Bound<'py, PyAny>) -> PyResult<Array1<f64>> {
    if let Ok(arr_ro) = raw.extract::<PyReadonlyArray1<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }

    if let Ok(obj) = raw.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            return Ok(series_ro.as_array().to_owned());
        }
    }

    let vec: Vec<f64> = raw.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(Array1::from(vec))
}

/// Extract a 2-D float64 matrix from a numpy array, pandas DataFrame, or
/// sequence of equal-length rows.
///
/// Errors
/// ------
/// - `TypeError` when the object is none of the accepted kinds.
/// - `ValueError` when nested rows have different lengths.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(raw: &Bound<'py, PyAny>) -> PyResult<Array2<f64>> {
    if let Ok(arr_ro) = raw.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }

    if let Ok(obj) = raw.call_method("to_numpy", (), None) {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(frame_ro.as_array().to_owned());
        }
    }

    let rows: Vec<Vec<f64>> = raw.extract().map_err(|_| {
        PyTypeError::new_err(
            "expected a 2-D numpy.ndarray, pandas.DataFrame, or sequence of float64 rows",
        )
    })?;
    rows_to_matrix(rows)
}

/// Extract a list of 2-D float64 matrices (one per kernel term).
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrices<'py>(raw: &Bound<'py, PyAny>) -> PyResult<Vec<Array2<f64>>> {
    let items: Vec<Bound<'py, PyAny>> = raw
        .extract()
        .map_err(|_| PyTypeError::new_err("expected a sequence of 2-D float64 matrices"))?;
    items.iter().map(extract_f64_matrix).collect()
}

#[cfg(feature = "python-bindings")]
fn rows_to_matrix(rows: Vec<Vec<f64>>) -> PyResult<Array2<f64>> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != ncols) {
        return Err(PyValueError::new_err("all rows must have the same length"));
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((nrows, ncols), flat)
        .map_err(|err| PyValueError::new_err(format!("invalid matrix shape: {err}")))
}

/// PyRidgeEstimator — a Python callable used as a [`RidgeEstimator`].
///
/// Purpose
/// -------
/// Let Python code supply the ridge fit. The callable is invoked as
/// `estimator(y, x, kernels, lam)` with numpy arrays (and a list of numpy
/// arrays for `kernels`) and must return the total `n×n` smoother as
/// anything [`extract_f64_matrix`] accepts.
///
/// Notes
/// -----
/// - Each call re-acquires the GIL, so Python-driven searches always run
///   one grid point at a time.
/// - Python exceptions propagate as `TuningError::Estimator`.
#[cfg(feature = "python-bindings")]
pub struct PyRidgeEstimator {
    callable: Py<PyAny>,
}

#[cfg(feature = "python-bindings")]
impl PyRidgeEstimator {
    pub fn new(callable: &Bound<'_, PyAny>) -> PyResult<Self> {
        if !callable.is_callable() {
            return Err(PyTypeError::new_err("estimator must be callable"));
        }
        Ok(PyRidgeEstimator { callable: callable.clone().unbind() })
    }
}

#[cfg(feature = "python-bindings")]
impl RidgeEstimator for PyRidgeEstimator {
    fn estimate(
        &self, y: &Array1<f64>, x: &Array2<f64>, kernels: &[Array2<f64>], lambda: f64,
    ) -> anyhow::Result<RidgeFit> {
        Python::with_gil(|py| {
            let kernel_list = PyList::new(py, kernels.iter().map(|k| k.to_pyarray(py)))?;
            let result =
                self.callable.call1(py, (y.to_pyarray(py), x.to_pyarray(py), kernel_list, lambda))?;
            let total = extract_f64_matrix(result.bind(py))?;
            Ok(RidgeFit::from_total(total))
        })
    }
}
