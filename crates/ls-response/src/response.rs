//! Step, forced, and impulse response sequences.

use ls_analysis::{StepInput, TransferFunction};
use ls_core::Real;
use serde::{Deserialize, Serialize};

use crate::error::{ResponseError, ResponseResult};
use crate::grid::TimeGrid;
use crate::integrator::{Integrator, Rk4};
use crate::state_space::{State, StateSpace};

/// One sample of a time response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponsePoint {
    /// Sample time, seconds.
    pub time: Real,
    /// Output value.
    pub value: Real,
}

/// Step response: the system driven by a constant input from t = 0,
/// starting at rest.
///
/// # Example
///
/// ```
/// use ls_analysis::TransferFunction;
/// use ls_response::{TimeGrid, step_response};
///
/// let tf = TransferFunction::from_coefficients(vec![1.0], vec![1.0, 2.0]).unwrap();
/// let grid = TimeGrid::new(3.0, 0.01).unwrap();
/// let series = step_response(&tf, &grid, 4.0).unwrap();
/// // DC gain 0.5, amplitude 4: the tail approaches 2.0.
/// assert!((series.last().unwrap().value - 2.0).abs() < 1e-2);
/// ```
pub fn step_response(
    tf: &TransferFunction,
    grid: &TimeGrid,
    amplitude: Real,
) -> ResponseResult<Vec<ResponsePoint>> {
    let input = StepInput::new(amplitude)?;
    let model = StateSpace::from_transfer_function(tf)?;
    Ok(simulate(&model, grid, [0.0; 2], |_| input.amplitude))
}

/// Forced response: the system driven by one input sample per grid point,
/// starting at rest. Each sample is held for one step (zero-order hold).
pub fn forced_response(
    tf: &TransferFunction,
    grid: &TimeGrid,
    input: &[Real],
) -> ResponseResult<Vec<ResponsePoint>> {
    if input.len() != grid.len() {
        return Err(ResponseError::InputLengthMismatch {
            expected: grid.len(),
            actual: input.len(),
        });
    }
    let model = StateSpace::from_transfer_function(tf)?;
    Ok(simulate(&model, grid, [0.0; 2], |i| input[i]))
}

/// Impulse response, via the equivalence with releasing the system from the
/// initial state `x(0) = B` under zero input.
///
/// # Errors
///
/// A system with direct feedthrough (numerator and denominator of equal
/// degree) has a delta at t = 0 that a sample sequence cannot carry; it is
/// rejected rather than dropped silently.
pub fn impulse_response(
    tf: &TransferFunction,
    grid: &TimeGrid,
) -> ResponseResult<Vec<ResponsePoint>> {
    let model = StateSpace::from_transfer_function(tf)?;
    if model.has_feedthrough() {
        return Err(ResponseError::InvalidRealization {
            what: "impulse response requires a strictly proper transfer function",
        });
    }
    let x0 = model.input_vector();
    Ok(simulate(&model, grid, x0, |_| 0.0))
}

fn simulate(
    model: &StateSpace,
    grid: &TimeGrid,
    x0: State,
    input: impl Fn(usize) -> Real,
) -> Vec<ResponsePoint> {
    let times = grid.samples();
    let dt = grid.dt();
    tracing::debug!(samples = times.len(), dt, "simulating response");

    let integrator = Rk4;
    let mut x = x0;
    let mut series = Vec::with_capacity(times.len());
    for (i, &t) in times.iter().enumerate() {
        let u = input(i);
        series.push(ResponsePoint {
            time: t,
            value: model.output(&x, u),
        });
        if i + 1 < times.len() {
            x = integrator.step(model, &x, u, dt);
        }
    }
    series
}
