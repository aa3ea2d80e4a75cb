//! cf-core: foundation types shared by the compflow crates.
//!
//! - `units`: uom power constructors and the display unit labels
//! - `numeric`: float tolerances, finiteness checks, axis sampling
//! - `ids`: 1-based cylinder stage numbers
//! - `timing`: opt-in stopwatch for long runs

pub mod error;
pub mod ids;
pub mod numeric;
pub mod timing;
pub mod units;

pub use error::CfError;
pub use ids::StageIndex;
pub use numeric::{Real, Tolerances, ensure_finite, linspace_at, nearly_equal};
pub use units::*;
