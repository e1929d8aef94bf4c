//! System classification and step-response parameter derivation for LinSys.
//!
//! This crate is the analytic half of the toolkit: given the numerator and
//! denominator coefficients of a rational transfer function (descending
//! powers of the Laplace variable), it classifies the system as first or
//! second order, validates the denominator, and derives the closed-form
//! textbook parameters for a step input of given amplitude.
//!
//! # Architecture
//!
//! - A [`TransferFunction`] is built once from two coefficient sequences and
//!   is immutable afterwards; denominator validation and order
//!   classification run at construction.
//! - [`derive_parameters`] is a pure function of a `TransferFunction` and a
//!   [`StepInput`]; calling it twice yields identical results.
//! - Formulas that only apply to a regime (peak time and overshoot for
//!   0 <= zeta < 1, settling times for zeta*wn > 0) report [`Metric`] values
//!   outside that regime instead of NaN or a crash.
//!
//! # Design Principles
//!
//! - **Eager validation**: every failure surfaces at construction or at the
//!   start of the derivation, as a typed error.
//! - **No hidden state**: derivations own no caches and mutate nothing.
//! - **Closed forms only**: no iteration, no simulation; the time-domain
//!   surface lives in the companion response crate.

pub mod damping;
pub mod error;
pub mod order;
pub mod params;
pub mod transfer;

pub use damping::{DampingCase, MassSpringDamper};
pub use error::{AnalysisError, AnalysisResult};
pub use order::{SystemOrder, classify_order, validate_denominator};
pub use params::{
    DerivedParameters, FirstOrderParameters, Metric, SecondOrderParameters, SettlingTimes,
    StepInput, derive_parameters, first_order_parameters, second_order_parameters,
};
pub use transfer::TransferFunction;
