//! kernels::kernel — kernel descriptors and Gram-matrix evaluation.
//!
//! Purpose
//! -------
//! Represent a kernel as a small immutable value object (family tag plus
//! hyperparameters) with a pure evaluation method that maps two feature
//! matrices to a Gram matrix. The factory [`generate_kernel`] binds the
//! hyperparameters once; evaluation never re-binds them.
//!
//! Key behaviors
//! -------------
//! - [`Kernel::evaluate`] computes `K[i, j] = k(x1_i, x2_j)` for the bound
//!   hyperparameters.
//! - [`Kernel::evaluate_with`] accepts `(l, p, σ)` positionally for callers
//!   that re-supply hyperparameters; `evaluate` delegates to it, so the two
//!   paths always agree. [`Kernel::evaluate_overriding`] replaces only the
//!   hyperparameters that are given.
//! - Stationary families (RBF, Matérn, rational) are transforms of
//!   [`square_dist`]; linear, polynomial, and NN kernels use inner products.
//!
//! Invariants & assumptions
//! ------------------------
//! - Evaluation is pure: identical inputs yield bit-identical output.
//! - With `x1 == x2` and valid hyperparameters the Gram matrix is symmetric
//!   and positive semi-definite.
//! - The length-scale is validated only for families that read it.
//!
//! Conventions
//! -----------
//! - `l` is the length-scale, `p` the order/power, `σ` the NN covariance
//!   coefficient. Families ignore hyperparameters they do not use.
//! - Distances inside Matérn and rational kernels are unscaled (`l = 1`);
//!   the length-scale enters through each family's own formula.
//!
//! Testing notes
//! -------------
//! - Unit tests pin each family to a closed form on small inputs, check the
//!   unit diagonal of stationary kernels, PSD-ness of a Gram matrix, and the
//!   agreement of the bound and positional evaluation paths.
use crate::kernels::{
    distance::{check_columns, row_norms_sq, square_dist, validate_length_scale},
    errors::KernelResult,
    family::KernelFamily,
};
use ndarray::{Array2, s};
use statrs::function::{factorial::ln_factorial, gamma::ln_gamma};
use std::f64::consts::{FRAC_2_PI, SQRT_2};

/// Kernel — an immutable kernel descriptor.
///
/// Fields
/// ------
/// - `family`: [`KernelFamily`]
///   Which transform to apply.
/// - `length_scale`: `f64`
///   Length-scale `l` (RBF, Matérn, rational).
/// - `order`: `u32`
///   Order/power `p` (polynomial degree, Matérn smoothness `v = p + ½`,
///   rational-quadratic shape).
/// - `sigma`: `f64`
///   Covariance coefficient `σ` (NN kernel).
///
/// Notes
/// -----
/// - `Copy` and cheap to pass by value; a kernel library is simply a
///   `Vec<Kernel>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    family: KernelFamily,
    length_scale: f64,
    order: u32,
    sigma: f64,
}

/// Build a kernel descriptor for `family` with bound hyperparameters.
///
/// Parameters
/// ----------
/// - `family`: [`KernelFamily`]
///   Kernel family. Parse from a name with `"rbf".parse::<KernelFamily>()`,
///   which fails with `UnknownKernelFamily` for unsupported names.
/// - `l`: `f64`
///   Length-scale; must be finite and `> 0` for families that use it.
/// - `p`: `u32`
///   Order/power.
/// - `sigma`: `f64`
///   NN covariance coefficient.
///
/// Errors
/// ------
/// - `KernelError::InvalidLengthScale` when `family` uses `l` and `l` is not
///   finite and strictly positive.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use kernel_tuning::kernels::{KernelFamily, generate_kernel};
/// let kernel = generate_kernel(KernelFamily::Polynomial, 1.0, 2, 0.0).unwrap();
/// let x = array![[1.0, 2.0], [3.0, 4.0]];
/// let k = kernel.evaluate(&x, None).unwrap();
/// assert_eq!(k[[0, 1]], 144.0);
/// ```
pub fn generate_kernel(family: KernelFamily, l: f64, p: u32, sigma: f64) -> KernelResult<Kernel> {
    Kernel::new(family, l, p, sigma)
}

impl Kernel {
    /// Construct a descriptor; see [`generate_kernel`].
    pub fn new(family: KernelFamily, l: f64, p: u32, sigma: f64) -> KernelResult<Self> {
        if family.uses_length_scale() {
            validate_length_scale(l)?;
        }
        Ok(Kernel { family, length_scale: l, order: p, sigma })
    }

    pub fn family(&self) -> KernelFamily {
        self.family
    }

    pub fn length_scale(&self) -> f64 {
        self.length_scale
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Gram matrix between the rows of `x1` and `x2` under the bound
    /// hyperparameters. `x2 = None` evaluates `x1` against itself.
    ///
    /// Errors
    /// ------
    /// - `KernelError::DimensionMismatch` when column counts differ.
    pub fn evaluate(&self, x1: &Array2<f64>, x2: Option<&Array2<f64>>) -> KernelResult<Array2<f64>> {
        self.evaluate_with(x1, x2, self.length_scale, self.order, self.sigma)
    }

    /// Gram matrix where each `Some` hyperparameter replaces the bound value
    /// for this call; `None` keeps the bound one.
    ///
    /// Errors
    /// ------
    /// - As [`Kernel::evaluate_with`].
    pub fn evaluate_overriding(
        &self, x1: &Array2<f64>, x2: Option<&Array2<f64>>, l: Option<f64>, p: Option<u32>,
        sigma: Option<f64>,
    ) -> KernelResult<Array2<f64>> {
        self.evaluate_with(
            x1,
            x2,
            l.unwrap_or(self.length_scale),
            p.unwrap_or(self.order),
            sigma.unwrap_or(self.sigma),
        )
    }

    /// Gram matrix with hyperparameters supplied positionally.
    ///
    /// The family is fixed by the descriptor; `(l, p, sigma)` override the
    /// bound values for this call only.
    ///
    /// Errors
    /// ------
    /// - `KernelError::DimensionMismatch` when column counts differ.
    /// - `KernelError::InvalidLengthScale` when the family uses `l` and it
    ///   is not finite and strictly positive.
    pub fn evaluate_with(
        &self, x1: &Array2<f64>, x2: Option<&Array2<f64>>, l: f64, p: u32, sigma: f64,
    ) -> KernelResult<Array2<f64>> {
        if self.family.uses_length_scale() {
            validate_length_scale(l)?;
        }
        let other = x2.unwrap_or(x1);
        check_columns(x1, other)?;

        let gram = match self.family {
            KernelFamily::Intercept => Array2::ones((x1.nrows(), other.nrows())),
            KernelFamily::Linear => x1.dot(&other.t()),
            KernelFamily::Polynomial => x1.dot(&other.t()).mapv(|v| powu(v + 1.0, p)),
            KernelFamily::Rbf => square_dist(x1, x2, SQRT_2 * l)?.mapv(|d| (-d).exp()),
            KernelFamily::Matern => matern(&square_dist(x1, x2, 1.0)?, l, p),
            KernelFamily::Rational => {
                let shape = p as f64;
                square_dist(x1, x2, 1.0)?
                    .mapv(|d| (1.0 + d / (2.0 * shape * l * l)).powf(-shape))
            }
            KernelFamily::NeuralNetwork => neural_network(x1, other, sigma),
        };
        Ok(gram)
    }
}

// ---- Helper methods ----

/// Matérn transform of a squared-distance matrix with `v = p + ½`.
///
/// Uses the closed form for half-integer smoothness
/// `exp(−√(2v)·r/l) · Γ(p+1)/Γ(2p+1) · Σᵢ (p+i)!/(i!(p−i)!) · (√(8v)·r/l)^{p−i}`,
/// which equals 1 at `r = 0` for every `p`. Each term is assembled in log
/// space; the factorials overflow `f64` from `p ≈ 86` on.
fn matern(sq_dist: &Array2<f64>, l: f64, p: u32) -> Array2<f64> {
    let order = u64::from(p);
    let v = p as f64 + 0.5;
    let log_norm = ln_gamma(p as f64 + 1.0) - ln_gamma(2.0 * p as f64 + 1.0);
    // (log coefficient, power of z) for i = 0..=p.
    let terms: Vec<(f64, f64)> = (0..=order)
        .map(|i| {
            let log_coeff = log_norm + ln_factorial(order + i)
                - ln_factorial(i)
                - ln_factorial(order - i);
            (log_coeff, (order - i) as f64)
        })
        .collect();
    let decay = (2.0 * v).sqrt() / l;
    let poly_scale = (8.0 * v).sqrt() / l;

    sq_dist.mapv(|d| {
        // Residue above the snap threshold can still be slightly negative.
        let r = d.max(0.0).sqrt();
        let log_z = (poly_scale * r).ln();
        terms
            .iter()
            .map(|&(log_coeff, power)| {
                // z^0 = 1 also at z = 0, where 0·ln 0 would be NaN.
                let log_pow = if power == 0.0 { 0.0 } else { power * log_z };
                (log_coeff + log_pow - decay * r).exp()
            })
            .sum()
    })
}

/// `base^exp` for an unsigned exponent; `powi` past `i32::MAX` would wrap.
fn powu(base: f64, exp: u32) -> f64 {
    match i32::try_from(exp) {
        Ok(exp) => base.powi(exp),
        Err(_) => base.powf(f64::from(exp)),
    }
}

/// Arc-sine (neural-network) kernel on inputs augmented with a leading 1.
fn neural_network(x1: &Array2<f64>, x2: &Array2<f64>, sigma: f64) -> Array2<f64> {
    let x1_aug = augment_with_bias(x1);
    let x2_aug = augment_with_bias(x2);
    let x1_norms = row_norms_sq(&x1_aug).mapv(|s| 1.0 + 2.0 * sigma * s);
    let x2_norms = row_norms_sq(&x2_aug).mapv(|s| 1.0 + 2.0 * sigma * s);

    let mut gram = x1_aug.dot(&x2_aug.t()) * (2.0 * sigma);
    for ((i, j), value) in gram.indexed_iter_mut() {
        *value = FRAC_2_PI * (*value / (x1_norms[i] * x2_norms[j]).sqrt()).asin();
    }
    gram
}

/// Prepend a column of ones.
fn augment_with_bias(x: &Array2<f64>) -> Array2<f64> {
    let mut aug = Array2::<f64>::ones((x.nrows(), x.ncols() + 1));
    aug.slice_mut(s![.., 1..]).assign(x);
    aug
}
