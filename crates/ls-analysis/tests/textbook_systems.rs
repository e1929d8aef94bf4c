//! End-to-end checks of classification and parameter derivation against
//! worked textbook systems.

use ls_analysis::{
    AnalysisError, DerivedParameters, Metric, StepInput, SystemOrder, TransferFunction,
    classify_order, derive_parameters, validate_denominator,
};
use ls_core::Polynomial;

fn poly(coefficients: &[f64]) -> Polynomial {
    Polynomial::new(coefficients.to_vec()).unwrap()
}

#[test]
fn order_classification_by_length() {
    assert_eq!(classify_order(&poly(&[1.0, 2.0])).unwrap(), SystemOrder::First);
    assert_eq!(
        classify_order(&poly(&[1.0, 4.0, 25.0])).unwrap(),
        SystemOrder::Second
    );
    for coefficients in [&[1.0][..], &[1.0, 2.0, 3.0, 4.0][..]] {
        assert!(matches!(
            classify_order(&poly(coefficients)).unwrap_err(),
            AnalysisError::UnsupportedOrder { .. }
        ));
    }
}

#[test]
fn denominator_validation_is_aggregate_not_positional() {
    assert!(validate_denominator(&poly(&[1.0, 2.0])).is_ok());
    // Sum is zero even though no single coefficient is "the leading one".
    assert!(validate_denominator(&poly(&[1.0, -1.0, 0.0])).is_err());
}

#[test]
fn first_order_worked_example() {
    // H(s) = 1/(s + 2), step of 4.
    let tf = TransferFunction::from_coefficients(vec![1.0], vec![1.0, 2.0]).unwrap();
    let input = StepInput::new(4.0).unwrap();
    let DerivedParameters::First(p) = derive_parameters(&tf, &input).unwrap() else {
        panic!("expected first-order parameters");
    };
    assert_eq!(p.time_constant, 0.5);
    assert_eq!(p.dc_gain, 0.5);
    assert_eq!(p.steady_state_response, 2.0);
    assert_eq!(p.steady_state_error, 2.0);
}

#[test]
fn second_order_worked_example() {
    // H(s) = 25/(s^2 + 4s + 25), unit step.
    let tf = TransferFunction::from_coefficients(vec![25.0], vec![1.0, 4.0, 25.0]).unwrap();
    let input = StepInput::new(1.0).unwrap();
    let DerivedParameters::Second(p) = derive_parameters(&tf, &input).unwrap() else {
        panic!("expected second-order parameters");
    };
    assert_eq!(p.natural_frequency, 5.0);
    assert_eq!(p.damping_ratio, 0.4);
    assert_eq!(p.dc_gain, 1.0);
    assert_eq!(p.steady_state_response, 1.0);
    assert_eq!(p.steady_state_error, 0.0);
    assert!((p.peak_time.value().unwrap() - 0.6862).abs() < 1e-3);
    assert!((p.percent_overshoot.value().unwrap() - 25.38).abs() < 1e-2);
}

#[test]
fn critically_damped_reports_not_applicable() {
    // den [1, 10, 25]: zeta = 1 exactly.
    let tf = TransferFunction::from_coefficients(vec![25.0], vec![1.0, 10.0, 25.0]).unwrap();
    let input = StepInput::new(1.0).unwrap();
    let DerivedParameters::Second(p) = derive_parameters(&tf, &input).unwrap() else {
        panic!("expected second-order parameters");
    };
    assert_eq!(p.peak_time, Metric::NotApplicable);
    assert_eq!(p.percent_overshoot, Metric::NotApplicable);
}

#[test]
fn zero_wn_squared_is_an_error_not_a_nan() {
    // [1, -4, 0] survives the aggregate denominator check; the derivation
    // must still refuse the zero under the square root.
    let tf = TransferFunction::from_coefficients(vec![1.0], vec![1.0, -4.0, 0.0]).unwrap();
    let input = StepInput::new(1.0).unwrap();
    assert!(matches!(
        derive_parameters(&tf, &input).unwrap_err(),
        AnalysisError::InvalidParameters { .. }
    ));
}

#[test]
fn repeated_derivation_is_stable() {
    let tf = TransferFunction::from_coefficients(vec![1.0], vec![1.0, 2.0]).unwrap();
    let input = StepInput::new(4.0).unwrap();
    let a = derive_parameters(&tf, &input).unwrap();
    let b = derive_parameters(&tf, &input).unwrap();
    assert_eq!(a, b);
}
