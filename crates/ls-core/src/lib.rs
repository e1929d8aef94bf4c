//! ls-core: stable foundation for LinSys.
//!
//! Contains:
//! - numeric (Real + tolerances + float guards)
//! - poly (coefficient containers for polynomials in the Laplace variable)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod poly;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use poly::Polynomial;
