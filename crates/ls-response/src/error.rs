//! Error types for response computation.

use ls_analysis::AnalysisError;
use ls_core::CoreError;
use thiserror::Error;

/// Result type for response operations.
pub type ResponseResult<T> = Result<T, ResponseError>;

/// Errors that can occur while producing a response sequence.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResponseError {
    /// Time grid parameters are unusable.
    #[error("Invalid time grid: {what}")]
    InvalidTimeGrid { what: &'static str },

    /// A forcing sequence does not line up with the grid.
    #[error("Input length {actual} does not match grid length {expected}")]
    InputLengthMismatch { expected: usize, actual: usize },

    /// The transfer function has no state-space realization here.
    #[error("Invalid realization: {what}")]
    InvalidRealization { what: &'static str },

    /// Root extraction is closed-form and stops at quadratics.
    #[error("No closed-form roots for a degree-{degree} polynomial (maximum 2)")]
    UnsupportedDegree { degree: usize },

    /// Error from system analysis.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Error from the numeric foundation.
    #[error(transparent)]
    Core(#[from] CoreError),
}
