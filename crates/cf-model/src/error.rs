//! Performance model errors.

use cf_core::CfError;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised when malformed input reaches the model boundary.
///
/// Degenerate but well-formed inputs (zero or negative pressures and speeds)
/// are never errors; they show up in the result values instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// NaN or infinite operand.
    #[error("Validation error: {what} must be a finite number (got {value})")]
    NonFinite { what: &'static str, value: f64 },
}

impl From<ModelError> for CfError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::NonFinite { what, value } => CfError::NonFinite { what, value },
        }
    }
}
