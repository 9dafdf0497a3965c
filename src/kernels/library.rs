//! kernels::library — ordered collections of kernels, one per model term.
//!
//! Purpose
//! -------
//! Build a [`KernelLibrary`] from kernel-table rows (family plus hyperparameters) and
//! evaluate every member on the same pair of feature matrices, producing the
//! list of Gram matrices a ridge estimator consumes (one per term).
//!
//! Invariants & assumptions
//! ------------------------
//! - Order is significant and preserved: the i-th Gram matrix belongs to the
//!   i-th kernel.
//! - Entries are independent; evaluating one never affects another.
use crate::kernels::{
    errors::KernelResult,
    family::KernelFamily,
    kernel::{Kernel, generate_kernel},
};
use ndarray::Array2;

/// KernelSpec — one row of a kernel table: `(family, l, p, σ)`.
///
/// Notes
/// -----
/// - Families ignore hyperparameters they do not read, so rows for linear
///   or intercept terms may carry placeholder values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelSpec {
    pub family: KernelFamily,
    pub length_scale: f64,
    pub order: u32,
    pub sigma: f64,
}

impl KernelSpec {
    pub fn new(family: KernelFamily, length_scale: f64, order: u32, sigma: f64) -> Self {
        KernelSpec { family, length_scale, order, sigma }
    }

    /// Parse the family from its name and keep the hyperparameters as given.
    ///
    /// Errors
    /// ------
    /// - `KernelError::UnknownKernelFamily` for unsupported names.
    pub fn from_name(name: &str, length_scale: f64, order: u32, sigma: f64) -> KernelResult<Self> {
        Ok(KernelSpec::new(name.parse()?, length_scale, order, sigma))
    }
}

/// KernelLibrary — ordered list of kernels, one per additive model term.
///
/// Key behaviors
/// -------------
/// - [`KernelLibrary::from_specs`] validates every row through
///   [`generate_kernel`] and fails on the first invalid row.
/// - [`KernelLibrary::gram_matrices`] returns one Gram matrix per kernel, in
///   library order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KernelLibrary {
    kernels: Vec<Kernel>,
}

impl KernelLibrary {
    pub fn new(kernels: Vec<Kernel>) -> Self {
        KernelLibrary { kernels }
    }

    /// Build one kernel per table row, preserving row order.
    ///
    /// Errors
    /// ------
    /// - `KernelError::InvalidLengthScale` from the first row whose family
    ///   reads `l` and whose `l` is invalid.
    pub fn from_specs(specs: &[KernelSpec]) -> KernelResult<Self> {
        let kernels = specs
            .iter()
            .map(|spec| generate_kernel(spec.family, spec.length_scale, spec.order, spec.sigma))
            .collect::<KernelResult<Vec<_>>>()?;
        Ok(KernelLibrary { kernels })
    }

    /// Append a kernel as the next term.
    pub fn push(&mut self, kernel: Kernel) {
        self.kernels.push(kernel);
    }

    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Kernel> {
        self.kernels.iter()
    }

    pub fn kernels(&self) -> &[Kernel] {
        &self.kernels
    }

    /// Evaluate every kernel on `(x1, x2)`; `x2 = None` evaluates `x1`
    /// against itself.
    ///
    /// Errors
    /// ------
    /// - `KernelError::DimensionMismatch` when column counts differ.
    pub fn gram_matrices(
        &self, x1: &Array2<f64>, x2: Option<&Array2<f64>>,
    ) -> KernelResult<Vec<Array2<f64>>> {
        self.kernels.iter().map(|kernel| kernel.evaluate(x1, x2)).collect()
    }
}

impl<'a> IntoIterator for &'a KernelLibrary {
    type Item = &'a Kernel;
    type IntoIter = std::slice::Iter<'a, Kernel>;

    fn into_iter(self) -> Self::IntoIter {
        self.kernels.iter()
    }
}
