//! cf-model: reciprocating compressor performance model for compflow.
//!
//! Provides:
//! - `evaluate`, the stateless performance estimate for one operating point
//! - `PerformanceModel`, the seam sweep executors are generic over
//! - Equipment configuration snapshots (motor, air cooler, cylinder stages)
//!
//! # Example
//!
//! ```
//! use cf_model::{evaluate, Ratio};
//!
//! let result = evaluate(100.0, 500.0, 1500.0);
//! assert_eq!(result.pressure_ratio, Ratio::Defined(5.0));
//! assert_eq!(result.volumetric_flow, 7500.0);
//! assert!((result.brake_horsepower - 30.0).abs() < 1e-9);
//! ```

pub mod equipment;
pub mod error;
pub mod performance;

// Re-exports for ergonomics
pub use equipment::{CylinderList, CylinderSettings, CylinderStage, EquipmentConfig, MotorType};
pub use error::{ModelError, ModelResult};
pub use performance::{
    Evaluation, OperatingPoint, PerformanceModel, PerformanceResult, PlaceholderModel, Ratio,
    evaluate,
};
