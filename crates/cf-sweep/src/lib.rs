//! cf-sweep: multirun parametric sweeps for compflow.
//!
//! Provides:
//! - `SweepAxis`, evenly spaced samples between inclusive bounds
//! - `SweepGrid`, the lazy inlet × discharge × speed cartesian product
//! - Sequential and rayon-parallel executors that drop infeasible points
//!
//! Output order is fixed: inlet pressure is the outer loop, discharge
//! pressure the middle loop, shaft speed the inner loop.
//!
//! # Example
//!
//! ```
//! use cf_sweep::{SweepAxis, sweep};
//!
//! let rows = sweep(
//!     SweepAxis::new(100.0, 500.0, 10).unwrap(),
//!     SweepAxis::new(600.0, 1000.0, 10).unwrap(),
//!     SweepAxis::new(1000.0, 2000.0, 5).unwrap(),
//! )
//! .unwrap();
//! assert_eq!(rows.len(), 500);
//! ```

pub mod axis;
pub mod error;
pub mod executor;
pub mod grid;

pub use axis::{AxisValues, SweepAxis};
pub use error::{SweepError, SweepResult};
pub use executor::{
    SpeedGroup, SweepOutcome, SweepResultRow, execute_sweep, execute_sweep_parallel, sweep,
};
pub use grid::{GridPoints, SweepGrid};
