//! Compressor performance model.
//!
//! ## Model
//!
//! The estimate is a placeholder correlation, linear in shaft speed:
//!
//! ```text
//! ratio = P_discharge / P_inlet            (undefined when P_inlet = 0)
//! flow  = 5000 * (N / 1000)
//! BHP   = (P_discharge - P_inlet) * 0.05 * (N / 1000)
//! ```
//!
//! BHP is not clamped. A negative value means discharge is below suction,
//! which callers treat as an infeasible configuration.

use cf_core::numeric::ensure_finite;
use cf_core::units::{Power, hp};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Volumetric flow per 1000 rpm of shaft speed.
pub const FLOW_PER_KRPM: f64 = 5000.0;

/// Brake horsepower per unit of pressure rise per 1000 rpm.
pub const BHP_PER_DP_KRPM: f64 = 0.05;

/// Discharge-to-inlet pressure ratio.
///
/// `Undefined` is the only representation of "no ratio computable" (zero
/// inlet pressure). It serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Ratio {
    Defined(f64),
    Undefined,
}

impl Ratio {
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Defined(v) => Some(v),
            Self::Undefined => None,
        }
    }
}

impl From<Option<f64>> for Ratio {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Self::Undefined, Self::Defined)
    }
}

impl From<Ratio> for Option<f64> {
    fn from(r: Ratio) -> Self {
        r.value()
    }
}

/// Inlet pressure, discharge pressure and shaft speed for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingPoint {
    pub inlet_pressure: f64,
    pub discharge_pressure: f64,
    pub shaft_speed: f64,
}

impl OperatingPoint {
    /// Create a point, rejecting NaN and infinite operands.
    ///
    /// Zero and negative values are accepted; range checks belong to the
    /// input layer.
    pub fn new(
        inlet_pressure: f64,
        discharge_pressure: f64,
        shaft_speed: f64,
    ) -> ModelResult<Self> {
        Ok(Self {
            inlet_pressure: check_finite(inlet_pressure, "inlet pressure")?,
            discharge_pressure: check_finite(discharge_pressure, "discharge pressure")?,
            shaft_speed: check_finite(shaft_speed, "shaft speed")?,
        })
    }

    /// Discharge strictly above suction.
    pub fn is_feasible(&self) -> bool {
        self.discharge_pressure > self.inlet_pressure
    }

    pub fn evaluate(&self) -> PerformanceResult {
        evaluate(self.inlet_pressure, self.discharge_pressure, self.shaft_speed)
    }
}

fn check_finite(value: f64, what: &'static str) -> ModelResult<f64> {
    ensure_finite(value, what).map_err(|_| ModelError::NonFinite { what, value })
}

/// Derived performance for one operating point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceResult {
    pub pressure_ratio: Ratio,
    pub volumetric_flow: f64,
    pub brake_horsepower: f64,
}

impl PerformanceResult {
    /// Brake horsepower as a typed power (mechanical horsepower).
    pub fn brake_power(&self) -> Power {
        hp(self.brake_horsepower)
    }

    /// Positive power demand, i.e. a physically meaningful point.
    pub fn is_feasible(&self) -> bool {
        self.brake_horsepower > 0.0
    }
}

/// An operating point together with the result computed from it.
///
/// This is what the session layer caches as its "last computed result".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub point: OperatingPoint,
    pub result: PerformanceResult,
}

impl Evaluation {
    pub fn new(point: OperatingPoint) -> Self {
        Self {
            point,
            result: point.evaluate(),
        }
    }
}

/// Estimate compressor performance.
///
/// Never fails: a zero inlet pressure yields `Ratio::Undefined`, and
/// discharge below suction yields negative BHP.
pub fn evaluate(
    inlet_pressure: f64,
    discharge_pressure: f64,
    shaft_speed: f64,
) -> PerformanceResult {
    let pressure_ratio = if inlet_pressure != 0.0 {
        Ratio::Defined(discharge_pressure / inlet_pressure)
    } else {
        Ratio::Undefined
    };
    let krpm = shaft_speed / 1000.0;

    PerformanceResult {
        pressure_ratio,
        volumetric_flow: FLOW_PER_KRPM * krpm,
        brake_horsepower: (discharge_pressure - inlet_pressure) * BHP_PER_DP_KRPM * krpm,
    }
}

/// Trait for performance estimators.
///
/// Implementations are deterministic functions of the operating point with
/// no shared mutable state, so they can be evaluated from many threads.
pub trait PerformanceModel: Send + Sync {
    /// Model name for logging and identification.
    fn name(&self) -> &str;

    fn evaluate(&self, point: &OperatingPoint) -> PerformanceResult;
}

/// The illustrative correlation implemented by [`evaluate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderModel;

impl PerformanceModel for PlaceholderModel {
    fn name(&self) -> &str {
        "placeholder"
    }

    fn evaluate(&self, point: &OperatingPoint) -> PerformanceResult {
        point.evaluate()
    }
}
