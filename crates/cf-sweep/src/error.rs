//! Sweep configuration errors.

use thiserror::Error;

/// Result type for sweep operations.
pub type SweepResult<T> = Result<T, SweepError>;

/// Errors in sweep setup. Evaluation itself never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    /// Axis bounds or sample count are unusable.
    #[error("Invalid {axis} axis: {what}")]
    InvalidAxis {
        axis: &'static str,
        what: &'static str,
    },

    /// The number of grid combinations does not fit in memory addressing.
    #[error("Sweep grid too large: {inlet} x {discharge} x {shaft_speed} combinations")]
    GridTooLarge {
        inlet: usize,
        discharge: usize,
        shaft_speed: usize,
    },
}
