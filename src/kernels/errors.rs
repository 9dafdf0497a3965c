//! kernels::errors — error type for distance and Gram-matrix construction.
//!
//! Purpose
//! -------
//! Provide [`KernelError`] and the [`KernelResult`] alias used by the
//! distance utility, the kernel factory, and kernel evaluation. Failures here
//! are structural (bad shapes, unknown names, invalid hyperparameters); they
//! abort the call immediately and are never retried.
//!
//! Conventions
//! -----------
//! - Messages name the offending value so they are useful without a
//!   backtrace.
//! - Numeric degeneracy inside a kernel (e.g. overflow in a high-order
//!   polynomial) is *not* an error; it shows up as non-finite Gram entries.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for kernel and distance operations.
pub type KernelResult<T> = Result<T, KernelError>;

/// KernelError — failures raised while building or evaluating kernels.
///
/// Variants
/// --------
/// - `DimensionMismatch { left, right }`
///   The two feature matrices have different column counts.
/// - `UnknownKernelFamily { name }`
///   A family name outside the supported set was supplied.
/// - `InvalidLengthScale { value }`
///   The length-scale is non-finite or not strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    // ---- Shapes ----
    DimensionMismatch { left: usize, right: usize },

    // ---- Factory ----
    UnknownKernelFamily { name: String },

    // ---- Hyperparameters ----
    InvalidLengthScale { value: f64 },
}

impl std::error::Error for KernelError {}

impl std::fmt::Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::DimensionMismatch { left, right } => {
                write!(
                    f,
                    "Feature matrices must have the same number of columns; got {left} and {right}."
                )
            }
            KernelError::UnknownKernelFamily { name } => {
                write!(
                    f,
                    "Unknown kernel family {name:?} (expected 'intercept', 'linear', \
                     'polynomial', 'rbf', 'matern', 'rational', or 'nn')."
                )
            }
            KernelError::InvalidLengthScale { value } => {
                write!(f, "Length-scale must be finite and > 0; got: {value}")
            }
        }
    }
}

/// Convert a [`KernelError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl From<KernelError> for PyErr {
    fn from(err: KernelError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` messages embedding their payloads.
    //
    // They intentionally DO NOT cover:
    // - The `From<KernelError> for PyErr` conversion, which needs the Python
    //   C API and is exercised from Python.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `DimensionMismatch` reports both column counts.
    //
    // Given
    // -----
    // - A mismatch between 3 and 5 columns.
    //
    // Expect
    // ------
    // - The message contains "3" and "5".
    fn dimension_mismatch_reports_both_column_counts() {
        // Arrange
        let err = KernelError::DimensionMismatch { left: 3, right: 5 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('3') && msg.contains('5'), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `UnknownKernelFamily` echoes the rejected name.
    //
    // Given
    // -----
    // - The name "laplace".
    //
    // Expect
    // ------
    // - The message contains "laplace".
    fn unknown_family_echoes_rejected_name() {
        // Arrange
        let err = KernelError::UnknownKernelFamily { name: "laplace".to_string() };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("laplace"), "Got: {msg}");
    }
}
