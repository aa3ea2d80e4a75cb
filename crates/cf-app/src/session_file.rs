//! Session file schema, loading and saving.
//!
//! A session file captures everything the forms hold: unit selection,
//! equipment configuration, process conditions and the multirun plan.
//! Every section is optional and falls back to the form defaults.

use cf_core::UnitSelection;
use cf_model::EquipmentConfig;
use cf_sweep::SweepAxis;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AppError, AppResult};

pub const SESSION_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionFile {
    pub version: u32,
    pub units: UnitSelection,
    pub equipment: EquipmentConfig,
    pub process: ProcessConditions,
    pub multirun: MultirunPlan,
}

impl Default for SessionFile {
    fn default() -> Self {
        Self {
            version: SESSION_VERSION,
            units: UnitSelection::default(),
            equipment: EquipmentConfig::default(),
            process: ProcessConditions::default(),
            multirun: MultirunPlan::default(),
        }
    }
}

/// Suction and discharge pressure for the single-point calculation.
///
/// Shaft speed comes from the equipment RPM.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessConditions {
    pub inlet_pressure: f64,
    pub discharge_pressure: f64,
}

impl Default for ProcessConditions {
    fn default() -> Self {
        Self {
            inlet_pressure: 100.0,
            discharge_pressure: 500.0,
        }
    }
}

/// Axes of a multirun sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultirunPlan {
    pub inlet: SweepAxis,
    pub discharge: SweepAxis,
    pub shaft_speed: SweepAxis,
    /// Evaluate grid points on the rayon pool
    pub parallel: bool,
}

impl Default for MultirunPlan {
    fn default() -> Self {
        Self {
            inlet: SweepAxis {
                min: 100.0,
                max: 500.0,
                sample_count: 10,
            },
            discharge: SweepAxis {
                min: 600.0,
                max: 1000.0,
                sample_count: 10,
            },
            shaft_speed: SweepAxis {
                min: 1000.0,
                max: 2000.0,
                sample_count: 5,
            },
            parallel: false,
        }
    }
}

/// Load a session from a YAML file.
pub fn load_session(path: &Path) -> AppResult<SessionFile> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::SessionFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let session: SessionFile = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Session(format!("Failed to parse session YAML: {}", e)))?;

    if session.version > SESSION_VERSION {
        return Err(AppError::Session(format!(
            "Unsupported session version: {}",
            session.version
        )));
    }

    tracing::debug!(
        path = %path.display(),
        cylinders = session.equipment.cylinders.len(),
        "loaded session"
    );
    Ok(session)
}

/// Save a session to a YAML file.
pub fn save_session(path: &Path, session: &SessionFile) -> AppResult<()> {
    let content = serde_yaml::to_string(session)
        .map_err(|e| AppError::Session(format!("Failed to serialize session: {}", e)))?;

    std::fs::write(path, content).map_err(|e| AppError::SessionFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), "saved session");
    Ok(())
}
