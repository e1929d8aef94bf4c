//! Error types for system analysis operations.

use ls_core::CoreError;
use thiserror::Error;

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that can occur while classifying a system or deriving parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    /// Denominator length is not 2 or 3. Only first- and second-order
    /// systems are supported, by design.
    #[error("Unsupported order: denominator has {coefficients} coefficients (expected 2 or 3)")]
    UnsupportedOrder { coefficients: usize },

    /// Denominator failed the aggregate non-zero check.
    #[error("Invalid denominator: {what}")]
    InvalidDenominator { what: &'static str },

    /// A closed-form formula received inputs outside its domain.
    #[error("Invalid parameters: {what}")]
    InvalidParameters { what: &'static str },

    /// A formula would divide by zero.
    #[error("Division by zero in {what}")]
    DivisionByZero { what: &'static str },

    /// Error from the numeric foundation.
    #[error(transparent)]
    Core(#[from] CoreError),
}
