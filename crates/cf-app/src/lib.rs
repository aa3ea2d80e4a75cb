//! Shared application service layer for compflow.
//!
//! This crate plays the role of the input and session layers around the
//! pure engine: it loads and saves session files, enforces the input ranges
//! of the forms, keeps the last computed result, and runs multirun plans.

pub mod error;
pub mod multirun;
pub mod session;
pub mod session_file;
pub mod validate;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use multirun::run_multirun;
pub use session::Session;
pub use session_file::{
    MultirunPlan, ProcessConditions, SESSION_VERSION, SessionFile, load_session, save_session,
};
pub use validate::{ValidationError, parse_numeric, validate_session};
