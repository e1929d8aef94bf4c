//! Closed-form step-response parameter derivation.
//!
//! First-order systems `n0 / (d0*s + d1)` yield a time constant and
//! steady-state figures. Second-order systems `n0 / (s^2 + d1*s + d2)` yield
//! natural frequency, damping ratio, peak time, percent overshoot, and four
//! settling-time bands. The second-order formulas read `d2` as wn^2 and `d1`
//! as 2*zeta*wn, which is only correct for a monic denominator; a non-monic
//! denominator is rejected rather than silently mis-computed.
//!
//! Peak time and percent overshoot are textbook formulas for the underdamped
//! regime (0 <= zeta < 1) and are reported as [`Metric::NotApplicable`]
//! elsewhere. Settling times diverge as zeta*wn approaches zero and are
//! reported as [`Metric::Unbounded`] at exactly zero.

use std::f64::consts::PI;

use ls_core::{Real, ensure_finite};
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::order::SystemOrder;
use crate::transfer::TransferFunction;

/// A step input applied at t = 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepInput {
    /// Magnitude of the step.
    pub amplitude: Real,
}

impl StepInput {
    /// Create a step input of the given amplitude.
    ///
    /// # Errors
    ///
    /// Fails when the amplitude is not finite.
    pub fn new(amplitude: Real) -> AnalysisResult<Self> {
        let amplitude = ensure_finite(amplitude, "step amplitude")?;
        Ok(Self { amplitude })
    }
}

/// A response figure that may fall outside its formula's regime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Metric {
    /// The formula applies; here is the number.
    Value(Real),
    /// The formula does not apply in this regime.
    NotApplicable,
    /// The figure diverges (an undamped response never settles).
    Unbounded,
}

impl Metric {
    /// Numeric value, if the formula applied.
    pub fn value(&self) -> Option<Real> {
        match self {
            Metric::Value(v) => Some(*v),
            _ => None,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Value(v) => write!(f, "{v:.2}"),
            Metric::NotApplicable => write!(f, "n/a"),
            Metric::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Derived parameters of a first-order system under a step input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FirstOrderParameters {
    /// Time constant tau, seconds.
    pub time_constant: Real,
    /// DC gain K.
    pub dc_gain: Real,
    /// Final output value, K times the step amplitude.
    pub steady_state_response: Real,
    /// Amplitude minus final output value.
    pub steady_state_error: Real,
}

/// Settling times for the 1/2/5/10 percent bands, seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettlingTimes {
    pub within_1_pct: Metric,
    pub within_2_pct: Metric,
    pub within_5_pct: Metric,
    pub within_10_pct: Metric,
}

/// Derived parameters of a second-order system under a step input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecondOrderParameters {
    /// Natural frequency wn, rad/s.
    pub natural_frequency: Real,
    /// Damping ratio zeta.
    pub damping_ratio: Real,
    /// Time of the first response peak, seconds. Underdamped regime only.
    pub peak_time: Metric,
    /// Peak excess over the final value, percent. Underdamped regime only.
    pub percent_overshoot: Metric,
    /// Settling times for the four bands.
    pub settling: SettlingTimes,
    /// DC gain K.
    pub dc_gain: Real,
    /// Final output value, K times the step amplitude.
    pub steady_state_response: Real,
    /// Amplitude minus final output value.
    pub steady_state_error: Real,
}

/// Parameters derived from one transfer function and one step input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "order")]
pub enum DerivedParameters {
    First(FirstOrderParameters),
    Second(SecondOrderParameters),
}

/// Derive the parameters appropriate to the system's order.
///
/// Pure: repeated calls on the same inputs yield identical results.
///
/// # Example
///
/// ```
/// use ls_analysis::{DerivedParameters, StepInput, TransferFunction, derive_parameters};
///
/// let tf = TransferFunction::from_coefficients(vec![1.0], vec![1.0, 2.0]).unwrap();
/// let input = StepInput::new(4.0).unwrap();
/// let DerivedParameters::First(p) = derive_parameters(&tf, &input).unwrap() else {
///     unreachable!();
/// };
/// assert_eq!(p.time_constant, 0.5);
/// assert_eq!(p.steady_state_response, 2.0);
/// ```
pub fn derive_parameters(
    tf: &TransferFunction,
    input: &StepInput,
) -> AnalysisResult<DerivedParameters> {
    match tf.order() {
        SystemOrder::First => first_order_parameters(tf, input).map(DerivedParameters::First),
        SystemOrder::Second => second_order_parameters(tf, input).map(DerivedParameters::Second),
    }
}

/// Derive first-order parameters: `tau = 1/d1`, `K = n0/d1`.
///
/// `n0` is the numerator's constant term, i.e. the numerator at s = 0.
pub fn first_order_parameters(
    tf: &TransferFunction,
    input: &StepInput,
) -> AnalysisResult<FirstOrderParameters> {
    let &[_d0, d1] = tf.denominator().as_slice() else {
        return Err(AnalysisError::InvalidParameters {
            what: "first-order formulas require a two-coefficient denominator",
        });
    };
    if d1 == 0.0 {
        return Err(AnalysisError::DivisionByZero {
            what: "time constant (denominator constant term is zero)",
        });
    }

    let n0 = tf.numerator().constant();
    let dc_gain = n0 / d1;
    Ok(FirstOrderParameters {
        time_constant: 1.0 / d1,
        dc_gain,
        steady_state_response: dc_gain * input.amplitude,
        steady_state_error: input.amplitude * (1.0 - dc_gain),
    })
}

/// Derive second-order parameters from a monic denominator `[1, d1, d2]`.
pub fn second_order_parameters(
    tf: &TransferFunction,
    input: &StepInput,
) -> AnalysisResult<SecondOrderParameters> {
    let &[d0, d1, d2] = tf.denominator().as_slice() else {
        return Err(AnalysisError::InvalidParameters {
            what: "second-order formulas require a three-coefficient denominator",
        });
    };
    if d0 != 1.0 {
        return Err(AnalysisError::InvalidParameters {
            what: "second-order formulas require a monic denominator (leading coefficient 1)",
        });
    }
    if d2 < 0.0 {
        return Err(AnalysisError::InvalidParameters {
            what: "negative value under the square root for natural frequency",
        });
    }
    if d2 == 0.0 {
        return Err(AnalysisError::InvalidParameters {
            what: "zero constant term yields zero natural frequency",
        });
    }

    let natural_frequency = d2.sqrt();
    let damping_ratio = d1 / (2.0 * natural_frequency);

    // Peak time and overshoot are defined for 0 <= zeta < 1 only.
    let (peak_time, percent_overshoot) = if (0.0..1.0).contains(&damping_ratio) {
        let root = (1.0 - damping_ratio * damping_ratio).sqrt();
        (
            Metric::Value(PI / (natural_frequency * root)),
            Metric::Value(100.0 * (-damping_ratio * PI / root).exp()),
        )
    } else {
        tracing::debug!(
            zeta = damping_ratio,
            "outside the underdamped regime, peak time and overshoot not applicable"
        );
        (Metric::NotApplicable, Metric::NotApplicable)
    };

    let settling = settling_times(damping_ratio * natural_frequency);

    let n0 = tf.numerator().constant();
    let dc_gain = n0 / d2;
    Ok(SecondOrderParameters {
        natural_frequency,
        damping_ratio,
        peak_time,
        percent_overshoot,
        settling,
        dc_gain,
        steady_state_response: dc_gain * input.amplitude,
        steady_state_error: input.amplitude * (1.0 - dc_gain),
    })
}

/// Settling times from the decay rate sigma = zeta * wn.
///
/// The 1/2/5/10 percent bands use the 5/4/3/2 time-constant rules. An
/// undamped system (sigma = 0) never settles; a divergent one (sigma < 0)
/// has no settling time at all.
fn settling_times(sigma: Real) -> SettlingTimes {
    let band = |factor: Real| {
        if sigma > 0.0 {
            Metric::Value(factor / sigma)
        } else if sigma == 0.0 {
            Metric::Unbounded
        } else {
            Metric::NotApplicable
        }
    };
    SettlingTimes {
        within_1_pct: band(5.0),
        within_2_pct: band(4.0),
        within_5_pct: band(3.0),
        within_10_pct: band(2.0),
    }
}
