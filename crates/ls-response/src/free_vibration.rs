//! Closed-form free-vibration responses of a mass-spring-damper.
//!
//! Given release conditions x(0) and x'(0), each damping regime has a
//! closed-form displacement history:
//!
//! - undamped: sustained oscillation at wn
//! - underdamped: decaying oscillation at wd
//! - critically damped: fastest non-oscillatory return
//! - overdamped: slower non-oscillatory return (cosh/sinh form)
//!
//! The regime is classified from the model's actual damping ratio; all
//! inputs are explicit arguments.

use ls_analysis::{DampingCase, MassSpringDamper};
use ls_core::{Real, ensure_finite};
use serde::{Deserialize, Serialize};

use crate::error::ResponseResult;
use crate::grid::TimeGrid;
use crate::response::ResponsePoint;

/// Release conditions of a free vibration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialConditions {
    /// Initial displacement x(0), m.
    pub displacement: Real,
    /// Initial velocity x'(0), m/s.
    pub velocity: Real,
}

impl InitialConditions {
    /// Create release conditions.
    ///
    /// # Errors
    ///
    /// Fails when either value is not finite.
    pub fn new(displacement: Real, velocity: Real) -> ResponseResult<Self> {
        let displacement = ensure_finite(displacement, "initial displacement")?;
        let velocity = ensure_finite(velocity, "initial velocity")?;
        Ok(Self {
            displacement,
            velocity,
        })
    }
}

/// Displacement at time `t` of the unforced system released from `ic`.
pub fn free_response(msd: &MassSpringDamper, ic: &InitialConditions, t: Real) -> Real {
    let wn = msd.natural_frequency();
    let zeta = msd.damping_ratio();
    let x0 = ic.displacement;
    let v0 = ic.velocity;

    match msd.case() {
        DampingCase::Undamped => x0 * (wn * t).cos() + (v0 / wn) * (wn * t).sin(),
        DampingCase::CriticallyDamped => (-wn * t).exp() * ((wn * x0 + v0) * t + x0),
        DampingCase::Underdamped => {
            let root = (1.0 - zeta * zeta).sqrt();
            let wd = wn * root;
            (-zeta * wn * t).exp()
                * (x0 * (wd * t).cos() + ((zeta * x0 + v0 / wn) / root) * (wd * t).sin())
        }
        DampingCase::Overdamped => {
            let root = (zeta * zeta - 1.0).sqrt();
            let wo = wn * root;
            (-zeta * wn * t).exp()
                * (x0 * (wo * t).cosh() + ((zeta * x0 + v0 / wn) / root) * (wo * t).sinh())
        }
    }
}

/// Displacement history over a grid.
pub fn free_response_series(
    msd: &MassSpringDamper,
    ic: &InitialConditions,
    grid: &TimeGrid,
) -> Vec<ResponsePoint> {
    grid.samples()
        .into_iter()
        .map(|t| ResponsePoint {
            time: t,
            value: free_response(msd, ic, t),
        })
        .collect()
}
