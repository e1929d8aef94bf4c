//! Deterministic text and data exports for LinSys results.
//!
//! Everything here builds strings: parameter summaries with fixed
//! two-decimal formatting (so output stays diffable), pole/zero listings,
//! CSV time series, and JSON parameter dumps. Callers decide where the
//! strings go.

pub mod export;
pub mod text;

pub use export::{parameters_to_json, series_to_csv};
pub use text::{parameter_report, pole_zero_report};
