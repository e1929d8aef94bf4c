//! Order classification and denominator validation.
//!
//! The toolkit supports exactly two system orders, determined by the length
//! of the denominator coefficient sequence: two coefficients is first order,
//! three is second order. Anything else is rejected.

use ls_core::{Polynomial, Real};
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Order of a supported system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemOrder {
    First,
    Second,
}

impl SystemOrder {
    /// Degree of the denominator polynomial for this order.
    pub fn degree(&self) -> usize {
        match self {
            SystemOrder::First => 1,
            SystemOrder::Second => 2,
        }
    }
}

impl std::fmt::Display for SystemOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemOrder::First => write!(f, "first order"),
            SystemOrder::Second => write!(f, "second order"),
        }
    }
}

/// Classify a denominator by coefficient count.
///
/// Two coefficients is a first-order system, three is second-order. Any
/// other length fails with [`AnalysisError::UnsupportedOrder`].
pub fn classify_order(denominator: &Polynomial) -> AnalysisResult<SystemOrder> {
    match denominator.len() {
        2 => Ok(SystemOrder::First),
        3 => Ok(SystemOrder::Second),
        n => Err(AnalysisError::UnsupportedOrder { coefficients: n }),
    }
}

/// Validate a denominator with the aggregate non-zero check.
///
/// Fails when the sum of all coefficients is zero, or the maximum
/// coefficient is zero, or the minimum coefficient is zero. This is a
/// coarse aggregate condition, not a per-element check: `[1, -1, 0]` is
/// rejected because its sum is zero, while `[1, -4, 0]` is accepted even
/// though it contains a zero coefficient.
pub fn validate_denominator(denominator: &Polynomial) -> AnalysisResult<()> {
    let coefficients = denominator.as_slice();
    let sum: Real = coefficients.iter().sum();
    let max = coefficients.iter().fold(Real::NEG_INFINITY, |m, &c| m.max(c));
    let min = coefficients.iter().fold(Real::INFINITY, |m, &c| m.min(c));

    if sum == 0.0 {
        return Err(AnalysisError::InvalidDenominator {
            what: "coefficients sum to zero",
        });
    }
    if max == 0.0 {
        return Err(AnalysisError::InvalidDenominator {
            what: "maximum coefficient is zero",
        });
    }
    if min == 0.0 {
        return Err(AnalysisError::InvalidDenominator {
            what: "minimum coefficient is zero",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coefficients: &[Real]) -> Polynomial {
        Polynomial::new(coefficients.to_vec()).unwrap()
    }

    #[test]
    fn two_coefficients_is_first_order() {
        assert_eq!(classify_order(&poly(&[1.0, 2.0])).unwrap(), SystemOrder::First);
    }

    #[test]
    fn three_coefficients_is_second_order() {
        assert_eq!(
            classify_order(&poly(&[1.0, 4.0, 25.0])).unwrap(),
            SystemOrder::Second
        );
    }

    #[test]
    fn other_lengths_are_unsupported() {
        let err = classify_order(&poly(&[1.0])).unwrap_err();
        assert_eq!(err, AnalysisError::UnsupportedOrder { coefficients: 1 });

        let err = classify_order(&poly(&[1.0, 2.0, 3.0, 4.0])).unwrap_err();
        assert_eq!(err, AnalysisError::UnsupportedOrder { coefficients: 4 });
    }

    #[test]
    fn plain_denominator_passes() {
        assert!(validate_denominator(&poly(&[1.0, 2.0])).is_ok());
        assert!(validate_denominator(&poly(&[1.0, 4.0, 25.0])).is_ok());
    }

    #[test]
    fn zero_sum_is_rejected() {
        // No positional coefficient is singled out: the aggregate fails.
        let err = validate_denominator(&poly(&[1.0, -1.0, 0.0])).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidDenominator { .. }));
    }

    #[test]
    fn zero_max_is_rejected() {
        assert!(validate_denominator(&poly(&[0.0, -1.0, -2.0])).is_err());
    }

    #[test]
    fn zero_min_is_rejected() {
        assert!(validate_denominator(&poly(&[1.0, 2.0, 0.0])).is_err());
    }

    #[test]
    fn interior_zero_with_negative_min_passes() {
        // Zero is neither the min nor the max and the sum is nonzero.
        assert!(validate_denominator(&poly(&[1.0, -4.0, 0.0])).is_ok());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn triple_aggregate_condition(coefficients in prop::collection::vec(-10.0_f64..10.0, 2..4)) {
                let den = Polynomial::new(coefficients.clone()).unwrap();
                let sum: f64 = coefficients.iter().sum();
                let max = coefficients.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                let min = coefficients.iter().cloned().fold(f64::INFINITY, f64::min);
                let expect_ok = sum != 0.0 && max != 0.0 && min != 0.0;
                prop_assert_eq!(validate_denominator(&den).is_ok(), expect_ok);
            }
        }
    }
}
