//! Kernel families and their canonical names.
//!
//! This module provides:
//! - A closed `KernelFamily` enum, one variant per supported Gram-matrix
//!   transform.
//! - Parsing from the lowercase names used in kernel tables
//!   (`"intercept"`, `"linear"`, `"polynomial"`, `"rbf"`, `"matern"`,
//!   `"rational"`, `"nn"`), resolved once at construction time.
//! - Flags describing which hyperparameters each family actually reads.
//!
//! Conventions:
//! - Names are matched case-insensitively after trimming whitespace.
//! - A few common aliases are accepted (`"gaussian"` for RBF,
//!   `"rational_quadratic"`, `"neural_network"`); `Display` always prints the
//!   canonical name.
use crate::kernels::errors::{KernelError, KernelResult};
use std::{fmt, str::FromStr};

/// Kernel family tag.
///
/// - `Intercept`: constant matrix of ones.
/// - `Linear`: inner product `X1·X2ᵗ`.
/// - `Polynomial`: `(X1·X2ᵗ + 1)^p`.
/// - `Rbf`: Gaussian `exp(−‖a − b‖² / (2l²))`.
/// - `Matern`: Matérn kernel with half-integer smoothness `v = p + ½`.
/// - `Rational`: rational quadratic `(1 + r²/(2pl²))^(−p)`.
/// - `NeuralNetwork`: arc-sine kernel of an infinitely wide sigmoid network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelFamily {
    Intercept,
    Linear,
    Polynomial,
    Rbf,
    Matern,
    Rational,
    NeuralNetwork,
}

impl KernelFamily {
    /// All families in canonical order.
    pub const ALL: [KernelFamily; 7] = [
        KernelFamily::Intercept,
        KernelFamily::Linear,
        KernelFamily::Polynomial,
        KernelFamily::Rbf,
        KernelFamily::Matern,
        KernelFamily::Rational,
        KernelFamily::NeuralNetwork,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            KernelFamily::Intercept => "intercept",
            KernelFamily::Linear => "linear",
            KernelFamily::Polynomial => "polynomial",
            KernelFamily::Rbf => "rbf",
            KernelFamily::Matern => "matern",
            KernelFamily::Rational => "rational",
            KernelFamily::NeuralNetwork => "nn",
        }
    }

    /// Whether the family reads the length-scale `l`.
    pub fn uses_length_scale(&self) -> bool {
        matches!(self, KernelFamily::Rbf | KernelFamily::Matern | KernelFamily::Rational)
    }

    /// Whether the family reads the order/power `p`.
    pub fn uses_order(&self) -> bool {
        matches!(self, KernelFamily::Polynomial | KernelFamily::Matern | KernelFamily::Rational)
    }

    /// Whether the family reads the covariance coefficient `σ`.
    pub fn uses_sigma(&self) -> bool {
        matches!(self, KernelFamily::NeuralNetwork)
    }

    /// Whether the family is stationary (depends on `X1`, `X2` only through
    /// pairwise distances). Stationary kernels have a unit diagonal on
    /// identical inputs.
    pub fn is_stationary(&self) -> bool {
        matches!(self, KernelFamily::Rbf | KernelFamily::Matern | KernelFamily::Rational)
    }
}

impl fmt::Display for KernelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelFamily {
    type Err = KernelError;

    fn from_str(s: &str) -> KernelResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "intercept" => Ok(KernelFamily::Intercept),
            "linear" => Ok(KernelFamily::Linear),
            "polynomial" | "poly" => Ok(KernelFamily::Polynomial),
            "rbf" | "gaussian" => Ok(KernelFamily::Rbf),
            "matern" => Ok(KernelFamily::Matern),
            "rational" | "rational_quadratic" => Ok(KernelFamily::Rational),
            "nn" | "neural_network" => Ok(KernelFamily::NeuralNetwork),
            _ => Err(KernelError::UnknownKernelFamily { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::kernel::generate_kernel;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Verify that every canonical name parses back to its own variant.
    //
    // Given
    // -----
    // - `KernelFamily::ALL`.
    //
    // Expect
    // ------
    // - `name()` followed by `from_str` is the identity.
    fn canonical_names_parse_back_to_same_family() {
        for family in KernelFamily::ALL {
            assert_eq!(family.name().parse::<KernelFamily>(), Ok(family));
            assert_eq!(family.to_string(), family.name());
        }
    }

    #[test]
    // Purpose
    // -------
    // Check case-insensitive parsing and aliases.
    //
    // Given
    // -----
    // - Mixed-case and alias spellings.
    //
    // Expect
    // ------
    // - Each maps to the intended variant.
    fn parsing_is_case_insensitive_and_accepts_aliases() {
        assert_eq!(" RBF ".parse::<KernelFamily>(), Ok(KernelFamily::Rbf));
        assert_eq!("Gaussian".parse::<KernelFamily>(), Ok(KernelFamily::Rbf));
        assert_eq!("neural_network".parse::<KernelFamily>(), Ok(KernelFamily::NeuralNetwork));
        assert_eq!("Matern".parse::<KernelFamily>(), Ok(KernelFamily::Matern));
    }

    #[test]
    // Purpose
    // -------
    // Ensure unsupported names fail with `UnknownKernelFamily`.
    //
    // Given
    // -----
    // - The name "laplacian".
    //
    // Expect
    // ------
    // - An error carrying the rejected name.
    fn unknown_name_is_rejected() {
        let err = "laplacian".parse::<KernelFamily>().unwrap_err();
        assert_eq!(err, KernelError::UnknownKernelFamily { name: "laplacian".to_string() });
    }

    #[test]
    // Purpose
    // -------
    // Check the hyperparameter flags against what evaluation actually reads.
    //
    // Given
    // -----
    // - Every family evaluated twice on the same inputs, changing only `p`
    //   (2 vs 3) or only `σ` (0.2 vs 0.9).
    //
    // Expect
    // ------
    // - The Gram matrix changes with `p` exactly when `uses_order()`, and
    //   with `σ` exactly when `uses_sigma()`.
    fn order_and_sigma_flags_match_evaluation() {
        // Arrange
        let x = array![[0.5, -1.0], [1.5, 0.25], [-0.75, 2.0]];

        for family in KernelFamily::ALL {
            // Act
            let base = generate_kernel(family, 1.2, 2, 0.2).unwrap().evaluate(&x, None).unwrap();
            let other_order =
                generate_kernel(family, 1.2, 3, 0.2).unwrap().evaluate(&x, None).unwrap();
            let other_sigma =
                generate_kernel(family, 1.2, 2, 0.9).unwrap().evaluate(&x, None).unwrap();

            // Assert
            assert_eq!(base != other_order, family.uses_order(), "family {family}");
            assert_eq!(base != other_sigma, family.uses_sigma(), "family {family}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that stationary families yield a unit diagonal on identical
    // inputs, and that exactly RBF, Matérn and rational are stationary.
    //
    // Given
    // -----
    // - Inputs with large norms, where the inner-product kernels have a
    //   diagonal far from 1.
    //
    // Expect
    // ------
    // - Unit diagonal for every family with `is_stationary()`.
    // - The stationary families are exactly those that read `l`.
    fn stationary_families_have_unit_diagonal() {
        // Arrange
        let x = array![[3.0, -4.0], [10.0, 2.5], [-6.0, 7.0]];

        for family in KernelFamily::ALL {
            assert_eq!(family.is_stationary(), family.uses_length_scale(), "family {family}");
            if !family.is_stationary() {
                continue;
            }

            // Act
            let k = generate_kernel(family, 0.9, 2, 0.0).unwrap().evaluate(&x, None).unwrap();

            // Assert
            for &value in k.diag() {
                assert_relative_eq!(value, 1.0, epsilon = 1e-12);
            }
        }
    }
}
