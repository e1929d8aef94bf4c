//! Simulated responses checked against the closed-form parameters they
//! should reproduce.

use ls_analysis::{
    DerivedParameters, MassSpringDamper, StepInput, TransferFunction, derive_parameters,
};
use ls_response::{TimeGrid, forced_response, pole_zero_map, step_response};

fn tf(num: &[f64], den: &[f64]) -> TransferFunction {
    TransferFunction::from_coefficients(num.to_vec(), den.to_vec()).unwrap()
}

#[test]
fn first_order_step_hits_the_time_constant_landmarks() {
    // H(s) = 1/(s + 2): tau = 0.5 s, DC gain 0.5, step of 4.
    let system = tf(&[1.0], &[1.0, 2.0]);
    let grid = TimeGrid::new(3.0, 0.005).unwrap();
    let series = step_response(&system, &grid, 4.0).unwrap();

    let final_value = 2.0;
    // At t = tau the response sits at 63.2% of the final value.
    let at_tau = series.iter().find(|p| (p.time - 0.5).abs() < 1e-9).unwrap();
    assert!((at_tau.value - final_value * (1.0 - (-1.0_f64).exp())).abs() < 1e-4);
    // By five time constants it is within 1%.
    let at_5tau = series.iter().find(|p| (p.time - 2.5).abs() < 1e-9).unwrap();
    assert!((at_5tau.value - final_value).abs() < 0.01 * final_value.abs());
}

#[test]
fn second_order_step_peaks_where_the_formula_says() {
    // H(s) = 25/(s^2 + 4s + 25): Tp ~ 0.686 s, PO ~ 25.38%.
    let system = tf(&[25.0], &[1.0, 4.0, 25.0]);
    let input = StepInput::new(1.0).unwrap();
    let DerivedParameters::Second(params) = derive_parameters(&system, &input).unwrap() else {
        panic!("expected second-order parameters");
    };

    let grid = TimeGrid::new(3.0, 0.001).unwrap();
    let series = step_response(&system, &grid, 1.0).unwrap();
    let peak = series
        .iter()
        .max_by(|p, q| p.value.partial_cmp(&q.value).unwrap())
        .unwrap();

    let peak_time = params.peak_time.value().unwrap();
    let overshoot = params.percent_overshoot.value().unwrap();
    assert!((peak.time - peak_time).abs() < 2e-3);
    let simulated_overshoot = 100.0 * (peak.value - 1.0) / 1.0;
    assert!((simulated_overshoot - overshoot).abs() < 0.1);
}

#[test]
fn forced_mass_spring_damper_settles_at_force_over_stiffness() {
    // The 61.48 kg / 535.8 damping / 40 kN/m system under a constant
    // 1000 N force settles at F/k = 0.025 m.
    let msd = MassSpringDamper::new(61.48, 40_000.0, 535.8).unwrap();
    let system = msd.transfer_function().unwrap();
    let grid = TimeGrid::new(1.4, 0.001).unwrap();
    let force = vec![1000.0; grid.len()];
    let series = forced_response(&system, &grid, &force).unwrap();

    let settle = 1000.0 / 40_000.0;
    let tail = series.last().unwrap();
    assert!((tail.value - settle).abs() < 1e-3);
    // The underdamped trajectory overshoots the settle point on the way.
    let peak = series
        .iter()
        .max_by(|p, q| p.value.partial_cmp(&q.value).unwrap())
        .unwrap();
    assert!(peak.value > settle);
}

#[test]
fn simulation_respects_non_monic_denominators() {
    // 2/(2s + 4) and 1/(s + 2) are the same system; the simulation
    // normalizes where the closed-form parameter path refuses.
    let grid = TimeGrid::new(2.0, 0.01).unwrap();
    let a = step_response(&tf(&[2.0], &[2.0, 4.0]), &grid, 1.0).unwrap();
    let b = step_response(&tf(&[1.0], &[1.0, 2.0]), &grid, 1.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn poles_agree_with_damping_parameters() {
    // Poles of s^2 + 4s + 25 sit at -zeta*wn +/- j*wd.
    let system = tf(&[25.0], &[1.0, 4.0, 25.0]);
    let input = StepInput::new(1.0).unwrap();
    let DerivedParameters::Second(params) = derive_parameters(&system, &input).unwrap() else {
        panic!("expected second-order parameters");
    };
    let map = pole_zero_map(&system).unwrap();

    let sigma = params.damping_ratio * params.natural_frequency;
    let wd = params.natural_frequency * (1.0 - params.damping_ratio.powi(2)).sqrt();
    assert!((map.poles[0].re + sigma).abs() < 1e-12);
    assert!((map.poles[1].im - wd).abs() < 1e-12);
}
