//! Time-domain response surface for LinSys.
//!
//! Where the analysis crate evaluates closed-form parameters, this crate
//! produces sequences: step, forced, and impulse responses of first- and
//! second-order transfer functions over a uniform time grid, pole/zero
//! locations for display, and the closed-form free-vibration responses of a
//! mass-spring-damper.
//!
//! Simulation converts the transfer function to controllable canonical
//! state-space form and advances it with a fixed-step integrator. The
//! realization normalizes by the leading denominator coefficient, so a
//! non-monic denominator simulates exactly even though the closed-form
//! parameter path refuses it.
//!
//! Callers choose the rendering surface; everything here returns plain
//! `(t, y)` sequences.

pub mod error;
pub mod free_vibration;
pub mod grid;
pub mod integrator;
pub mod pzmap;
pub mod response;
pub mod state_space;

pub use error::{ResponseError, ResponseResult};
pub use free_vibration::{InitialConditions, free_response, free_response_series};
pub use grid::TimeGrid;
pub use integrator::{ForwardEuler, Integrator, Rk4};
pub use pzmap::{PoleZeroMap, pole_zero_map};
pub use response::{ResponsePoint, forced_response, impulse_response, step_response};
pub use state_space::StateSpace;
