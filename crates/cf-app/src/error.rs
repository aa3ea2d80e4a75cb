//! Error types for the cf-app service layer.

use std::path::PathBuf;

use crate::validate::ValidationError;

/// Application error type that wraps errors from the engine crates
/// and provides a unified error interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Session error: {0}")]
    Session(String),

    #[error("Failed to read session file: {path}")]
    SessionFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write session file: {path}")]
    SessionFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Model error: {0}")]
    Model(#[from] cf_model::ModelError),

    #[error("Sweep error: {0}")]
    Sweep(#[from] cf_sweep::SweepError),

    #[error("Report error: {0}")]
    Report(#[from] cf_report::ReportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cf-app operations.
pub type AppResult<T> = Result<T, AppError>;
