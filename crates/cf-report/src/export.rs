//! Sweep row export for external charting tools.

use cf_sweep::SweepResultRow;

use crate::ReportResult;

pub const CSV_HEADER: &str =
    "inlet_pressure,discharge_pressure,shaft_speed,volumetric_flow,brake_horsepower";

/// CSV with a header line, one row per line in generation order.
pub fn rows_to_csv(rows: &[SweepResultRow]) -> String {
    let mut csv = String::with_capacity(CSV_HEADER.len() + 1 + rows.len() * 48);
    csv.push_str(CSV_HEADER);
    csv.push('\n');
    for r in rows {
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            r.inlet_pressure,
            r.discharge_pressure,
            r.shaft_speed,
            r.volumetric_flow,
            r.brake_horsepower
        ));
    }
    csv
}

/// Pretty-printed JSON array of rows.
pub fn rows_to_json(rows: &[SweepResultRow]) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_sweep::{SweepAxis, sweep};

    fn rows() -> Vec<SweepResultRow> {
        sweep(
            SweepAxis::fixed(100.0),
            SweepAxis::new(500.0, 600.0, 2).unwrap(),
            SweepAxis::fixed(1000.0),
        )
        .unwrap()
    }

    #[test]
    fn csv_has_header_and_rows() {
        let csv = rows_to_csv(&rows());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "100,500,1000,5000,20");
        assert_eq!(lines[2], "100,600,1000,5000,25");
    }

    #[test]
    fn csv_of_empty_sweep_is_header_only() {
        assert_eq!(rows_to_csv(&[]), format!("{CSV_HEADER}\n"));
    }

    #[test]
    fn json_lists_field_names() {
        let json = rows_to_json(&rows()).unwrap();
        assert!(json.contains("\"inlet_pressure\": 100.0"));
        assert!(json.contains("\"brake_horsepower\""));
        let back: Vec<SweepResultRow> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rows());
    }
}
