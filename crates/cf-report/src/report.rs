//! Plain-text performance report.
//!
//! Section order is fixed: title, timestamp, equipment configuration,
//! process conditions, results. Pressures, flow and power are printed with
//! two decimals; counts and settings are printed as entered.

use cf_core::UnitSelection;
use cf_model::{EquipmentConfig, Evaluation, Ratio};
use chrono::NaiveDateTime;
use std::fmt;

pub const TITLE: &str = "COMPRESSOR PERFORMANCE REPORT";

/// Placeholder for any value that is not available yet.
pub const NOT_COMPUTED: &str = "not yet computed";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Ordered report lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined with `\n`, no trailing newline.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Build the report for a configuration snapshot and the last evaluation.
///
/// `last` is `None` until a calculation has been run; the process and
/// results blocks then show [`NOT_COMPUTED`].
pub fn format_report(
    config: &EquipmentConfig,
    last: Option<&Evaluation>,
    units: &UnitSelection,
    generated_at: NaiveDateTime,
) -> Report {
    let mut report = Report::default();

    report.push(TITLE);
    report.push(format!("Generated: {}", generated_at.format(TIMESTAMP_FORMAT)));
    report.push("");

    push_equipment(&mut report, config, units);
    report.push("");

    push_process(&mut report, last, units);
    report.push("");

    push_results(&mut report, last, units);

    report
}

/// [`format_report`] stamped with the current local time.
pub fn format_report_now(
    config: &EquipmentConfig,
    last: Option<&Evaluation>,
    units: &UnitSelection,
) -> Report {
    format_report(config, last, units, chrono::Local::now().naive_local())
}

fn push_equipment(report: &mut Report, config: &EquipmentConfig, units: &UnitSelection) {
    report.push("EQUIPMENT CONFIGURATION");
    report.push(format!("Motor type: {}", as_is(config.motor_type, "")));
    report.push(format!("RPM: {}", as_is(config.rpm, "")));
    report.push(format!("Derate: {}", as_is(config.derate_pct, "%")));
    report.push(format!(
        "Air cooler power: {}",
        as_is(config.air_cooler_power_pct, "%")
    ));
    report.push(format!(
        "Cooler pressure drop: {}",
        as_is(config.cooler_pressure_drop_pct, "% per stage")
    ));
    report.push(format!(
        "Cooler outlet temperature: {}",
        as_is(
            config.cooler_outlet_temp,
            &format!(" {} per stage", units.temperature)
        )
    ));
    report.push(format!(
        "Stroke: {}",
        as_is(config.stroke, &format!(" {}", units.length))
    ));
    report.push(format!(
        "Number of cylinders: {}",
        as_is(config.cylinder_count, "")
    ));

    if config.cylinders.is_empty() {
        report.push("Cylinder stages: none added");
    } else {
        report.push("Cylinder stages:");
        for (i, cyl) in config.cylinders.iter().enumerate() {
            report.push(format!(
                "  Cylinder {}: Stage {}, Clearance {}%, SACE {}, VVCP {}%",
                i + 1,
                cyl.stage,
                cyl.clearance_pct,
                if cyl.has_sace { "Yes" } else { "No" },
                cyl.vvcp_pct
            ));
        }
    }
}

fn push_process(report: &mut Report, last: Option<&Evaluation>, units: &UnitSelection) {
    let point = last.map(|e| e.point);
    let pressure = format!(" {}", units.pressure);

    report.push("PROCESS CONDITIONS");
    report.push(format!(
        "Inlet pressure: {}",
        fixed2(point.map(|p| p.inlet_pressure), &pressure)
    ));
    report.push(format!(
        "Discharge pressure: {}",
        fixed2(point.map(|p| p.discharge_pressure), &pressure)
    ));
    report.push(format!(
        "Shaft speed: {}",
        as_is(point.map(|p| p.shaft_speed), " rpm")
    ));
}

fn push_results(report: &mut Report, last: Option<&Evaluation>, units: &UnitSelection) {
    let result = last.map(|e| e.result);

    report.push("PERFORMANCE RESULTS");
    let ratio = match result.map(|r| r.pressure_ratio) {
        Some(Ratio::Defined(v)) => format!("{v:.2}"),
        Some(Ratio::Undefined) => "undefined (inlet pressure is zero)".to_string(),
        None => NOT_COMPUTED.to_string(),
    };
    report.push(format!("Pressure ratio: {ratio}"));
    report.push(format!(
        "Volumetric flow: {}",
        fixed2(
            result.map(|r| r.volumetric_flow),
            &format!(" {}", units.flow)
        )
    ));
    report.push(format!(
        "Brake horsepower: {}",
        fixed2(result.map(|r| r.brake_horsepower), " BHP")
    ));
}

fn fixed2(value: Option<f64>, suffix: &str) -> String {
    match value {
        Some(v) => format!("{v:.2}{suffix}"),
        None => NOT_COMPUTED.to_string(),
    }
}

fn as_is<T: fmt::Display>(value: Option<T>, suffix: &str) -> String {
    match value {
        Some(v) => format!("{v}{suffix}"),
        None => NOT_COMPUTED.to_string(),
    }
}
