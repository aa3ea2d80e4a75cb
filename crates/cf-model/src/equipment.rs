//! Equipment configuration snapshot.
//!
//! The session layer owns and mutates the configuration; the core only ever
//! sees an immutable snapshot. Scalar settings are optional so a snapshot can
//! be taken before every field has been filled in.

use cf_core::StageIndex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Compressor driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotorType {
    #[serde(rename = "Natural Gas", alias = "natural_gas")]
    NaturalGas,
    #[serde(rename = "Electric", alias = "electric")]
    Electric,
}

impl MotorType {
    pub fn label(self) -> &'static str {
        match self {
            Self::NaturalGas => "Natural Gas",
            Self::Electric => "Electric",
        }
    }
}

impl fmt::Display for MotorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User-supplied settings for a cylinder that is about to be appended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderSettings {
    pub clearance_pct: f64,
    pub has_sace: bool,
    pub vvcp_pct: f64,
}

impl Default for CylinderSettings {
    fn default() -> Self {
        Self {
            clearance_pct: 5.0,
            has_sace: true,
            vvcp_pct: 0.0,
        }
    }
}

/// One compression cylinder with its stage number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CylinderStage {
    pub stage: StageIndex,
    pub clearance_pct: f64,
    pub has_sace: bool,
    pub vvcp_pct: f64,
}

impl CylinderStage {
    pub fn settings(&self) -> CylinderSettings {
        CylinderSettings {
            clearance_pct: self.clearance_pct,
            has_sace: self.has_sace,
            vvcp_pct: self.vvcp_pct,
        }
    }
}

/// Append-only list of cylinder stages.
///
/// Each stage number is `len + 1` at the moment of insertion and is never
/// reassigned. There is no removal API.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CylinderList {
    stages: Vec<CylinderStage>,
}

impl CylinderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cylinder and return the stage number it was given.
    pub fn push(&mut self, settings: CylinderSettings) -> StageIndex {
        let stage = StageIndex::next_after(self.stages.len()).unwrap_or(StageIndex::MAX);
        self.stages.push(CylinderStage {
            stage,
            clearance_pct: settings.clearance_pct,
            has_sace: settings.has_sace,
            vvcp_pct: settings.vvcp_pct,
        });
        stage
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn get(&self, stage: StageIndex) -> Option<&CylinderStage> {
        self.stages.get(stage.position())
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &CylinderStage> {
        self.stages.iter()
    }

    pub fn as_slice(&self) -> &[CylinderStage] {
        &self.stages
    }
}

impl FromIterator<CylinderSettings> for CylinderList {
    fn from_iter<I: IntoIterator<Item = CylinderSettings>>(iter: I) -> Self {
        let mut list = Self::new();
        for settings in iter {
            list.push(settings);
        }
        list
    }
}

impl<'a> IntoIterator for &'a CylinderList {
    type Item = &'a CylinderStage;
    type IntoIter = std::slice::Iter<'a, CylinderStage>;

    fn into_iter(self) -> Self::IntoIter {
        self.stages.iter()
    }
}

// Stored stage numbers are ignored on load; the list is rebuilt by appending.
impl<'de> Deserialize<'de> for CylinderList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let settings = Vec::<CylinderSettings>::deserialize(deserializer)?;
        Ok(settings.into_iter().collect())
    }
}

/// Motor, air cooler and compressor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentConfig {
    pub motor_type: Option<MotorType>,
    pub rpm: Option<f64>,
    pub derate_pct: Option<f64>,
    pub air_cooler_power_pct: Option<f64>,
    /// Pressure drop across the air cooler, percent per stage.
    pub cooler_pressure_drop_pct: Option<f64>,
    /// Air cooler outlet temperature per stage.
    pub cooler_outlet_temp: Option<f64>,
    pub stroke: Option<f64>,
    pub cylinder_count: Option<u32>,
    pub cylinders: CylinderList,
}

impl EquipmentConfig {
    /// A configuration with no settings filled in.
    pub fn empty() -> Self {
        Self {
            motor_type: None,
            rpm: None,
            derate_pct: None,
            air_cooler_power_pct: None,
            cooler_pressure_drop_pct: None,
            cooler_outlet_temp: None,
            stroke: None,
            cylinder_count: None,
            cylinders: CylinderList::new(),
        }
    }

    /// Append a cylinder stage with the given settings.
    pub fn add_cylinder(&mut self, settings: CylinderSettings) -> StageIndex {
        self.cylinders.push(settings)
    }
}

impl Default for EquipmentConfig {
    fn default() -> Self {
        Self {
            motor_type: Some(MotorType::NaturalGas),
            rpm: Some(1500.0),
            derate_pct: Some(5.0),
            air_cooler_power_pct: Some(4.0),
            cooler_pressure_drop_pct: Some(1.0),
            cooler_outlet_temp: Some(120.0),
            stroke: Some(200.0),
            cylinder_count: Some(4),
            cylinders: CylinderList::new(),
        }
    }
}
