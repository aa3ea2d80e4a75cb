//! Interactive session state.
//!
//! A [`Session`] owns the form contents and the last computed evaluation.
//! The engine only ever sees snapshots of it.

use cf_core::UnitSelection;
use cf_model::{CylinderSettings, EquipmentConfig, Evaluation, OperatingPoint};
use cf_report::{Report, format_report};
use cf_sweep::SweepOutcome;
use chrono::NaiveDateTime;
use std::path::Path;

use crate::error::AppResult;
use crate::multirun::run_multirun;
use crate::session_file::{MultirunPlan, ProcessConditions, SessionFile, load_session, save_session};
use crate::validate::{ValidationError, validate_equipment, validate_process};

#[derive(Debug, Clone, Default)]
pub struct Session {
    file: SessionFile,
    last: Option<Evaluation>,
}

impl Session {
    pub fn new(file: SessionFile) -> Self {
        Self { file, last: None }
    }

    pub fn from_path(path: &Path) -> AppResult<Self> {
        let file = load_session(path)?;
        tracing::info!(path = %path.display(), "session opened");
        Ok(Self::new(file))
    }

    pub fn file(&self) -> &SessionFile {
        &self.file
    }

    pub fn units(&self) -> &UnitSelection {
        &self.file.units
    }

    pub fn set_units(&mut self, units: UnitSelection) {
        self.file.units = units;
    }

    pub fn equipment(&self) -> &EquipmentConfig {
        &self.file.equipment
    }

    /// Mutable access to the equipment form.
    ///
    /// Edits do not clear the last evaluation; the report shows the new
    /// configuration next to the previous result until recalculated.
    pub fn equipment_mut(&mut self) -> &mut EquipmentConfig {
        &mut self.file.equipment
    }

    pub fn process(&self) -> &ProcessConditions {
        &self.file.process
    }

    pub fn set_process(&mut self, process: ProcessConditions) {
        self.file.process = process;
    }

    pub fn multirun_plan(&self) -> &MultirunPlan {
        &self.file.multirun
    }

    pub fn set_multirun_plan(&mut self, plan: MultirunPlan) {
        self.file.multirun = plan;
    }

    /// Append a cylinder stage; returns its index as a plain number.
    pub fn add_cylinder(&mut self, settings: CylinderSettings) -> u32 {
        let stage = self.file.equipment.add_cylinder(settings);
        tracing::debug!(stage = stage.get(), "cylinder added");
        stage.get()
    }

    /// Validate the forms, evaluate the current process conditions at the
    /// equipment RPM and cache the result.
    pub fn calculate(&mut self) -> AppResult<Evaluation> {
        validate_equipment(&self.file.equipment)?;
        validate_process(&self.file.process)?;
        let speed = self
            .file
            .equipment
            .rpm
            .ok_or(ValidationError::Missing { field: "rpm" })?;

        let point = OperatingPoint::new(
            self.file.process.inlet_pressure,
            self.file.process.discharge_pressure,
            speed,
        )?;
        let evaluation = Evaluation::new(point);
        tracing::info!(
            inlet = point.inlet_pressure,
            discharge = point.discharge_pressure,
            speed = point.shaft_speed,
            bhp = evaluation.result.brake_horsepower,
            "performance calculated"
        );

        self.last = Some(evaluation);
        Ok(evaluation)
    }

    pub fn last_evaluation(&self) -> Option<&Evaluation> {
        self.last.as_ref()
    }

    /// Brake horsepower of the last calculation, if any.
    pub fn required_power(&self) -> Option<f64> {
        self.last.map(|e| e.result.brake_horsepower)
    }

    /// Owned copy of the equipment configuration.
    pub fn snapshot(&self) -> EquipmentConfig {
        self.file.equipment.clone()
    }

    pub fn report_at(&self, generated_at: NaiveDateTime) -> Report {
        let snapshot = self.snapshot();
        format_report(&snapshot, self.last.as_ref(), &self.file.units, generated_at)
    }

    pub fn report(&self) -> Report {
        self.report_at(chrono::Local::now().naive_local())
    }

    pub fn run_multirun(&self) -> AppResult<SweepOutcome> {
        run_multirun(&self.file.multirun)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        save_session(path, &self.file)
    }

    pub fn into_file(self) -> SessionFile {
        self.file
    }
}
