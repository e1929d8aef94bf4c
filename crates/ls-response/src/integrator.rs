//! Fixed-step time integrators.
//!
//! The input is held constant over each step (zero-order hold), which is
//! exact for the step and piecewise-constant forcing used here.

use ls_core::Real;

use crate::state_space::{State, StateSpace};

/// Trait for fixed-step integrators over a state-space model.
pub trait Integrator {
    /// Advance the state by one time step under input `u`.
    fn step(&self, model: &StateSpace, x: &State, u: Real, dt: Real) -> State;
}

fn axpy(x: &State, k: &State, h: Real) -> State {
    [x[0] + h * k[0], x[1] + h * k[1]]
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
#[derive(Clone, Debug, Default)]
pub struct Rk4;

impl Integrator for Rk4 {
    fn step(&self, model: &StateSpace, x: &State, u: Real, dt: Real) -> State {
        let k1 = model.derivative(x, u);
        let k2 = model.derivative(&axpy(x, &k1, 0.5 * dt), u);
        let k3 = model.derivative(&axpy(x, &k2, 0.5 * dt), u);
        let k4 = model.derivative(&axpy(x, &k3, dt), u);

        // Combine: x_new = x + (dt/6) * (k1 + 2*k2 + 2*k3 + k4)
        let mut out = *x;
        for i in 0..2 {
            out[i] += dt / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
        }
        out
    }
}

/// Forward Euler (explicit, 1st order, fast for testing).
/// Calls the derivative once per step instead of 4 times (RK4).
#[derive(Clone, Debug, Default)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step(&self, model: &StateSpace, x: &State, u: Real, dt: Real) -> State {
        let dx = model.derivative(x, u);
        axpy(x, &dx, dt)
    }
}
