//! Kernel library for kernel ridge regression.
//!
//! This module provides:
//! - `distance`: pairwise squared Euclidean distances with optional
//!   length-scale rescaling and zero snapping.
//! - `family`: the closed set of supported kernel families.
//! - `kernel`: immutable kernel descriptors, the [`generate_kernel`] factory,
//!   and Gram-matrix evaluation.
//! - `library`: ordered kernel collections built from kernel-table rows.
//! - `errors`: [`KernelError`] and the [`KernelResult`] alias.
//!
//! Conventions:
//! - Feature matrices are `n×p` with observations in rows.
//! - Gram matrices on identical inputs are symmetric positive semi-definite
//!   for valid hyperparameters.
pub mod distance;
pub mod errors;
pub mod family;
pub mod kernel;
pub mod library;

pub use self::{
    distance::{square_dist, square_dist_with_tol},
    errors::{KernelError, KernelResult},
    family::KernelFamily,
    kernel::{Kernel, generate_kernel},
    library::{KernelLibrary, KernelSpec},
};

pub mod prelude {
    pub use super::{
        Kernel, KernelError, KernelFamily, KernelLibrary, KernelResult, KernelSpec,
        generate_kernel, square_dist,
    };
}
