//! Polynomial coefficient containers.
//!
//! Polynomials in the Laplace variable `s` are stored as coefficient vectors
//! in **descending** powers:
//!
//! `[c_n, c_{n-1}, ..., c_1, c_0]` represents `c_n*s^n + ... + c_1*s + c_0`.
//!
//! A `Polynomial` is constructed once and never mutated; all evaluation is
//! by Horner's rule.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::numeric::{Real, ensure_finite};

/// An immutable real polynomial, coefficients in descending powers of `s`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    coefficients: Vec<Real>,
}

impl Polynomial {
    /// Create a polynomial from descending-power coefficients.
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficient sequence is empty or contains a
    /// non-finite value.
    pub fn new(coefficients: Vec<Real>) -> CoreResult<Self> {
        if coefficients.is_empty() {
            return Err(CoreError::InvalidArg {
                what: "polynomial must have at least one coefficient",
            });
        }
        for &c in &coefficients {
            ensure_finite(c, "polynomial coefficient")?;
        }
        Ok(Self { coefficients })
    }

    /// Degree of the polynomial (number of coefficients minus one).
    ///
    /// The leading coefficient is not stripped: `[0.0, 1.0]` has degree 1.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Number of stored coefficients.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Always false; construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Leading (highest-power) coefficient.
    pub fn leading(&self) -> Real {
        self.coefficients[0]
    }

    /// Constant term (coefficient of `s^0`), i.e. the value at `s = 0`.
    pub fn constant(&self) -> Real {
        *self.coefficients.last().expect("non-empty by construction")
    }

    /// Coefficient of the i-th entry in descending order, if present.
    pub fn coefficient(&self, i: usize) -> Option<Real> {
        self.coefficients.get(i).copied()
    }

    /// Coefficients as a slice, descending powers.
    pub fn as_slice(&self) -> &[Real] {
        &self.coefficients
    }

    /// Evaluate at a real point by Horner's rule.
    pub fn eval(&self, x: Real) -> Real {
        self.coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Evaluate at a complex point by Horner's rule.
    pub fn eval_complex(&self, z: Complex64) -> Complex64 {
        self.coefficients
            .iter()
            .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z + c)
    }
}

impl std::fmt::Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let degree = self.degree();
        for (i, &c) in self.coefficients.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", if c < 0.0 { "-" } else { "+" })?;
            }
            let magnitude = if i > 0 { c.abs() } else { c };
            match degree - i {
                0 => write!(f, "{magnitude}")?,
                1 => write!(f, "{magnitude}*s")?,
                p => write!(f, "{magnitude}*s^{p}")?,
            }
        }
        Ok(())
    }
}
