//! Pole/zero extraction for display.
//!
//! Supported systems have denominators of degree at most 2, so roots come
//! from the linear and quadratic formulas directly; complex pairs appear
//! for negative discriminants.

use ls_analysis::TransferFunction;
use ls_core::{Polynomial, Real};
use num_complex::Complex64;

use crate::error::{ResponseError, ResponseResult};

/// Pole and zero locations of a transfer function.
#[derive(Debug, Clone, PartialEq)]
pub struct PoleZeroMap {
    /// Roots of the denominator, sorted by real then imaginary part.
    pub poles: Vec<Complex64>,
    /// Roots of the numerator, sorted the same way.
    pub zeros: Vec<Complex64>,
}

/// Extract poles and zeros.
///
/// # Errors
///
/// Fails when the numerator degree exceeds 2 after stripping leading zero
/// coefficients (the denominator cannot, by construction).
pub fn pole_zero_map(tf: &TransferFunction) -> ResponseResult<PoleZeroMap> {
    Ok(PoleZeroMap {
        poles: polynomial_roots(tf.denominator())?,
        zeros: polynomial_roots(tf.numerator())?,
    })
}

fn polynomial_roots(p: &Polynomial) -> ResponseResult<Vec<Complex64>> {
    // Leading zeros lower the effective degree.
    let coefficients: &[Real] = {
        let all = p.as_slice();
        let nonzero = all.iter().position(|&c| c != 0.0).unwrap_or(all.len());
        &all[nonzero..]
    };

    let mut roots = match coefficients {
        [] | [_] => Vec::new(),
        &[a, b] => vec![Complex64::new(-b / a, 0.0)],
        &[a, b, c] => {
            let disc = b * b - 4.0 * a * c;
            if disc >= 0.0 {
                let sq = disc.sqrt();
                vec![
                    Complex64::new((-b - sq) / (2.0 * a), 0.0),
                    Complex64::new((-b + sq) / (2.0 * a), 0.0),
                ]
            } else {
                let sq = (-disc).sqrt();
                vec![
                    Complex64::new(-b / (2.0 * a), -sq / (2.0 * a)),
                    Complex64::new(-b / (2.0 * a), sq / (2.0 * a)),
                ]
            }
        }
        _ => {
            return Err(ResponseError::UnsupportedDegree {
                degree: coefficients.len() - 1,
            });
        }
    };

    roots.sort_by(|p, q| {
        (p.re, p.im)
            .partial_cmp(&(q.re, q.im))
            .expect("roots of finite coefficients are finite")
    });
    Ok(roots)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tf(num: &[Real], den: &[Real]) -> TransferFunction {
        TransferFunction::from_coefficients(num.to_vec(), den.to_vec()).unwrap()
    }

    #[test]
    fn first_order_pole() {
        let map = pole_zero_map(&tf(&[1.0], &[1.0, 2.0])).unwrap();
        assert_eq!(map.poles, vec![Complex64::new(-2.0, 0.0)]);
        assert!(map.zeros.is_empty());
    }

    #[test]
    fn underdamped_complex_pair() {
        // s^2 + 4s + 25: poles at -2 +/- j*sqrt(21).
        let map = pole_zero_map(&tf(&[25.0], &[1.0, 4.0, 25.0])).unwrap();
        assert_eq!(map.poles.len(), 2);
        let expected_im = 21.0_f64.sqrt();
        assert!((map.poles[0].re - -2.0).abs() < 1e-12);
        assert!((map.poles[0].im - -expected_im).abs() < 1e-12);
        assert!((map.poles[1].im - expected_im).abs() < 1e-12);
    }

    #[test]
    fn overdamped_real_pair_sorted() {
        // s^2 + 3s + 2 = (s + 1)(s + 2).
        let map = pole_zero_map(&tf(&[2.0], &[1.0, 3.0, 2.0])).unwrap();
        assert_eq!(
            map.poles,
            vec![Complex64::new(-2.0, 0.0), Complex64::new(-1.0, 0.0)]
        );
    }

    #[test]
    fn numerator_zero_location() {
        // (s + 3)/(s + 2) has a zero at -3.
        let map = pole_zero_map(&tf(&[1.0, 3.0], &[1.0, 2.0])).unwrap();
        assert_eq!(map.zeros, vec![Complex64::new(-3.0, 0.0)]);
    }

    #[test]
    fn leading_zero_coefficients_are_stripped() {
        // Numerator [0, 1, 3] is really s + 3.
        let map = pole_zero_map(&tf(&[0.0, 1.0, 3.0], &[1.0, 2.0])).unwrap();
        assert_eq!(map.zeros, vec![Complex64::new(-3.0, 0.0)]);
    }

    #[test]
    fn cubic_numerator_is_rejected() {
        let err = pole_zero_map(&tf(&[1.0, 0.0, 0.0, 1.0], &[1.0, 2.0])).unwrap_err();
        assert!(matches!(err, ResponseError::UnsupportedDegree { degree: 3 }));
    }
}
