//! Transfer function construction.

use ls_core::{Polynomial, Real};
use serde::{Deserialize, Serialize};

use crate::error::AnalysisResult;
use crate::order::{SystemOrder, classify_order, validate_denominator};

/// A rational transfer function of order 1 or 2.
///
/// Coefficients are stored in descending powers of `s`, exactly as given.
/// The denominator is validated and the order classified at construction;
/// the value is immutable afterwards.
///
/// # Example
///
/// ```
/// use ls_analysis::{SystemOrder, TransferFunction};
///
/// // H(s) = 25 / (s^2 + 4s + 25)
/// let tf = TransferFunction::from_coefficients(vec![25.0], vec![1.0, 4.0, 25.0]).unwrap();
/// assert_eq!(tf.order(), SystemOrder::Second);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferFunction {
    numerator: Polynomial,
    denominator: Polynomial,
    order: SystemOrder,
}

impl TransferFunction {
    /// Build a transfer function from numerator and denominator polynomials.
    ///
    /// # Errors
    ///
    /// Fails when the denominator does not pass [`validate_denominator`]
    /// (sum, maximum, and minimum of the coefficients must each be nonzero)
    /// or when its length is not 2 or 3.
    pub fn new(numerator: Polynomial, denominator: Polynomial) -> AnalysisResult<Self> {
        validate_denominator(&denominator)?;
        let order = classify_order(&denominator)?;
        tracing::debug!(%order, "classified transfer function");
        Ok(Self {
            numerator,
            denominator,
            order,
        })
    }

    /// Convenience constructor from raw coefficient vectors.
    pub fn from_coefficients(numerator: Vec<Real>, denominator: Vec<Real>) -> AnalysisResult<Self> {
        let numerator = Polynomial::new(numerator)?;
        let denominator = Polynomial::new(denominator)?;
        Self::new(numerator, denominator)
    }

    pub fn numerator(&self) -> &Polynomial {
        &self.numerator
    }

    pub fn denominator(&self) -> &Polynomial {
        &self.denominator
    }

    pub fn order(&self) -> SystemOrder {
        self.order
    }
}

impl std::fmt::Display for TransferFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) / ({})", self.numerator, self.denominator)
    }
}
