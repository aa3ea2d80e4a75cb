//! Input-layer range checks.
//!
//! These mirror the limits of the input forms. The engine never calls them;
//! it trusts that the values it receives were validated here first.

use cf_model::EquipmentConfig;

use crate::session_file::{MultirunPlan, ProcessConditions, SessionFile};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number")]
    NotANumber { field: &'static str },

    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("Invalid multirun plan: {0}")]
    Multirun(#[from] cf_sweep::SweepError),
}

/// Inclusive numeric bounds of a form field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub min: f64,
    pub max: f64,
}

impl Limits {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn check(self, field: &'static str, value: f64) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotANumber { field });
        }
        if value < self.min || value > self.max {
            return Err(ValidationError::OutOfRange {
                field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

pub const RPM: Limits = Limits::new(500.0, 3000.0);
pub const DERATE_PCT: Limits = Limits::new(0.0, 20.0);
pub const AIR_COOLER_POWER_PCT: Limits = Limits::new(1.0, 10.0);
pub const COOLER_PRESSURE_DROP_PCT: Limits = Limits::new(0.1, 5.0);
pub const COOLER_OUTLET_TEMP: Limits = Limits::new(80.0, 200.0);
pub const STROKE: Limits = Limits::new(100.0, 400.0);
pub const CYLINDER_COUNT: Limits = Limits::new(1.0, 12.0);
pub const INLET_PRESSURE: Limits = Limits::new(50.0, 1000.0);
pub const MAX_DISCHARGE_PRESSURE: f64 = 2000.0;
/// Discharge must exceed inlet pressure by at least this much.
pub const MIN_PRESSURE_RISE: f64 = 10.0;
pub const CYLINDER_PCT: Limits = Limits::new(0.0, 100.0);

fn check_opt(
    limits: Limits,
    field: &'static str,
    value: Option<f64>,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => limits.check(field, v),
        None => Ok(()),
    }
}

/// Check the populated equipment fields. Unset fields are allowed.
pub fn validate_equipment(config: &EquipmentConfig) -> Result<(), ValidationError> {
    check_opt(RPM, "rpm", config.rpm)?;
    check_opt(DERATE_PCT, "derate", config.derate_pct)?;
    check_opt(AIR_COOLER_POWER_PCT, "air cooler power", config.air_cooler_power_pct)?;
    check_opt(
        COOLER_PRESSURE_DROP_PCT,
        "cooler pressure drop",
        config.cooler_pressure_drop_pct,
    )?;
    check_opt(COOLER_OUTLET_TEMP, "cooler outlet temperature", config.cooler_outlet_temp)?;
    check_opt(STROKE, "stroke", config.stroke)?;
    check_opt(
        CYLINDER_COUNT,
        "number of cylinders",
        config.cylinder_count.map(f64::from),
    )?;

    for cyl in &config.cylinders {
        CYLINDER_PCT.check("cylinder clearance", cyl.clearance_pct)?;
        CYLINDER_PCT.check("cylinder VVCP", cyl.vvcp_pct)?;
    }
    Ok(())
}

pub fn validate_process(process: &ProcessConditions) -> Result<(), ValidationError> {
    INLET_PRESSURE.check("inlet pressure", process.inlet_pressure)?;
    Limits::new(
        process.inlet_pressure + MIN_PRESSURE_RISE,
        MAX_DISCHARGE_PRESSURE,
    )
    .check("discharge pressure", process.discharge_pressure)
}

pub fn validate_multirun(plan: &MultirunPlan) -> Result<(), ValidationError> {
    plan.inlet.validate("inlet pressure")?;
    plan.discharge.validate("discharge pressure")?;
    plan.shaft_speed.validate("shaft speed")?;
    Ok(())
}

pub fn validate_session(session: &SessionFile) -> Result<(), ValidationError> {
    validate_equipment(&session.equipment)?;
    validate_process(&session.process)?;
    validate_multirun(&session.multirun)
}

/// Parse user text as a number, falling back to `default` for anything
/// that is not a finite number.
pub fn parse_numeric(text: &str, default: f64) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_model::CylinderSettings;
    use cf_sweep::SweepAxis;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(validate_session(&SessionFile::default()), Ok(()));
    }

    #[test]
    fn rpm_out_of_range() {
        let config = EquipmentConfig {
            rpm: Some(3500.0),
            ..EquipmentConfig::default()
        };
        let err = validate_equipment(&config).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: "rpm",
                value: 3500.0,
                min: 500.0,
                max: 3000.0,
            }
        );
    }

    #[test]
    fn unset_fields_pass() {
        assert_eq!(validate_equipment(&EquipmentConfig::empty()), Ok(()));
    }

    #[test]
    fn nan_is_not_a_number() {
        let config = EquipmentConfig {
            stroke: Some(f64::NAN),
            ..EquipmentConfig::default()
        };
        assert_eq!(
            validate_equipment(&config),
            Err(ValidationError::NotANumber { field: "stroke" })
        );
    }

    #[test]
    fn cylinder_settings_are_checked() {
        let mut config = EquipmentConfig::default();
        config.add_cylinder(CylinderSettings {
            clearance_pct: 140.0,
            ..CylinderSettings::default()
        });
        assert!(matches!(
            validate_equipment(&config),
            Err(ValidationError::OutOfRange { field: "cylinder clearance", .. })
        ));
    }

    #[test]
    fn discharge_must_exceed_inlet_by_ten() {
        let ok = ProcessConditions {
            inlet_pressure: 100.0,
            discharge_pressure: 110.0,
        };
        assert_eq!(validate_process(&ok), Ok(()));

        let too_close = ProcessConditions {
            inlet_pressure: 100.0,
            discharge_pressure: 105.0,
        };
        assert!(matches!(
            validate_process(&too_close),
            Err(ValidationError::OutOfRange { field: "discharge pressure", .. })
        ));
    }

    #[test]
    fn inlet_below_form_minimum() {
        let process = ProcessConditions {
            inlet_pressure: 10.0,
            discharge_pressure: 500.0,
        };
        assert!(validate_process(&process).is_err());
    }

    #[test]
    fn multirun_zero_count_is_rejected() {
        let plan = MultirunPlan {
            discharge: SweepAxis {
                min: 600.0,
                max: 1000.0,
                sample_count: 0,
            },
            ..MultirunPlan::default()
        };
        let err = validate_multirun(&plan).unwrap_err();
        assert!(err.to_string().contains("discharge pressure"));
    }

    #[test]
    fn parse_numeric_falls_back() {
        assert_eq!(parse_numeric("1500", 0.0), 1500.0);
        assert_eq!(parse_numeric(" 4.5 ", 0.0), 4.5);
        assert_eq!(parse_numeric("abc", 5.0), 5.0);
        assert_eq!(parse_numeric("", 120.0), 120.0);
        assert_eq!(parse_numeric("NaN", 1.0), 1.0);
        assert_eq!(parse_numeric("inf", 1.0), 1.0);
    }
}
