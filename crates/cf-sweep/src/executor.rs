//! Sweep execution for multirun sensitivity studies.
//!
//! This module connects the sweep grid with a performance model to produce
//! ordered result rows suitable for plotting and export.

use cf_model::{OperatingPoint, PerformanceModel, PerformanceResult, PlaceholderModel};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::axis::SweepAxis;
use crate::error::SweepResult;
use crate::grid::SweepGrid;

/// One feasible grid combination with its derived outputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepResultRow {
    pub inlet_pressure: f64,
    pub discharge_pressure: f64,
    pub shaft_speed: f64,
    pub volumetric_flow: f64,
    pub brake_horsepower: f64,
}

impl SweepResultRow {
    pub fn new(point: &OperatingPoint, result: &PerformanceResult) -> Self {
        Self {
            inlet_pressure: point.inlet_pressure,
            discharge_pressure: point.discharge_pressure,
            shaft_speed: point.shaft_speed,
            volumetric_flow: result.volumetric_flow,
            brake_horsepower: result.brake_horsepower,
        }
    }
}

/// Rows sharing one shaft speed, in generation order.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedGroup<'a> {
    pub shaft_speed: f64,
    pub rows: Vec<&'a SweepResultRow>,
}

/// Result of a multirun sweep.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SweepOutcome {
    /// Feasible rows in generation order
    pub rows: Vec<SweepResultRow>,
    /// Number of grid combinations visited
    pub evaluated: usize,
    /// Combinations dropped because discharge <= inlet
    pub dropped_infeasible: usize,
}

impl SweepOutcome {
    fn from_rows(rows: Vec<SweepResultRow>, evaluated: usize) -> Self {
        let dropped_infeasible = evaluated - rows.len();
        Self {
            rows,
            evaluated,
            dropped_infeasible,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// No feasible points in the requested ranges.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn inlet_pressures(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.inlet_pressure).collect()
    }

    pub fn discharge_pressures(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.discharge_pressure).collect()
    }

    pub fn shaft_speeds(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.shaft_speed).collect()
    }

    pub fn volumetric_flows(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.volumetric_flow).collect()
    }

    pub fn brake_horsepowers(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.brake_horsepower).collect()
    }

    /// Group rows by shaft speed for colour-by-speed plots.
    ///
    /// Groups appear in order of first occurrence.
    pub fn group_by_shaft_speed(&self) -> Vec<SpeedGroup<'_>> {
        let mut groups: Vec<SpeedGroup<'_>> = Vec::new();
        let mut slot: HashMap<u64, usize> = HashMap::new();

        for row in &self.rows {
            let idx = *slot.entry(row.shaft_speed.to_bits()).or_insert_with(|| {
                groups.push(SpeedGroup {
                    shaft_speed: row.shaft_speed,
                    rows: Vec::new(),
                });
                groups.len() - 1
            });
            groups[idx].rows.push(row);
        }
        groups
    }
}

/// Evaluate the placeholder model over every feasible grid combination.
///
/// # Arguments
///
/// - `inlet`: Inlet (suction) pressure axis, outer loop
/// - `discharge`: Discharge pressure axis, middle loop
/// - `shaft_speed`: Shaft speed axis, inner loop
///
/// # Returns
///
/// Feasible rows in generation order; possibly empty.
pub fn sweep(
    inlet: SweepAxis,
    discharge: SweepAxis,
    shaft_speed: SweepAxis,
) -> SweepResult<Vec<SweepResultRow>> {
    let grid = SweepGrid::new(inlet, discharge, shaft_speed)?;
    Ok(execute_sweep(&PlaceholderModel, &grid).rows)
}

/// Execute a sweep sequentially.
pub fn execute_sweep<M: PerformanceModel + ?Sized>(model: &M, grid: &SweepGrid) -> SweepOutcome {
    tracing::debug!(model = model.name(), combinations = grid.len(), "starting sweep");

    let rows: Vec<SweepResultRow> = grid
        .feasible_points()
        .map(|point| SweepResultRow::new(&point, &model.evaluate(&point)))
        .collect();

    let outcome = SweepOutcome::from_rows(rows, grid.len());
    tracing::debug!(
        rows = outcome.len(),
        dropped = outcome.dropped_infeasible,
        "sweep finished"
    );
    outcome
}

/// Execute a sweep on the rayon thread pool.
///
/// Produces exactly the same rows, in the same order, as [`execute_sweep`].
pub fn execute_sweep_parallel<M: PerformanceModel + ?Sized>(
    model: &M,
    grid: &SweepGrid,
) -> SweepOutcome {
    tracing::debug!(
        model = model.name(),
        combinations = grid.len(),
        threads = rayon::current_num_threads(),
        "starting parallel sweep"
    );

    let rows: Vec<SweepResultRow> = (0..grid.len())
        .into_par_iter()
        .filter_map(|idx| {
            let point = grid.point_at(idx)?;
            point
                .is_feasible()
                .then(|| SweepResultRow::new(&point, &model.evaluate(&point)))
        })
        .collect();

    let outcome = SweepOutcome::from_rows(rows, grid.len());
    tracing::debug!(
        rows = outcome.len(),
        dropped = outcome.dropped_infeasible,
        "parallel sweep finished"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_model::Ratio;

    fn axis(min: f64, max: f64, n: usize) -> SweepAxis {
        SweepAxis::new(min, max, n).unwrap()
    }

    #[test]
    fn default_multirun_keeps_every_point() {
        let rows = sweep(axis(100.0, 500.0, 10), axis(600.0, 1000.0, 10), axis(1000.0, 2000.0, 5))
            .unwrap();
        assert_eq!(rows.len(), 500);
        assert_eq!(rows[0].inlet_pressure, 100.0);
        assert_eq!(rows[0].discharge_pressure, 600.0);
        assert_eq!(rows[0].shaft_speed, 1000.0);
        assert_eq!(rows[499].inlet_pressure, 500.0);
        assert_eq!(rows[499].discharge_pressure, 1000.0);
        assert_eq!(rows[499].shaft_speed, 2000.0);
    }

    #[test]
    fn rows_carry_model_outputs() {
        let rows = sweep(SweepAxis::fixed(100.0), SweepAxis::fixed(500.0), SweepAxis::fixed(1500.0))
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].volumetric_flow, 7500.0);
        assert!((rows[0].brake_horsepower - 30.0).abs() < 1e-9);
    }

    #[test]
    fn fully_infeasible_ranges_give_empty_outcome() {
        let grid = SweepGrid::new(
            axis(500.0, 900.0, 3),
            axis(100.0, 500.0, 3),
            axis(1000.0, 2000.0, 2),
        )
        .unwrap();
        let outcome = execute_sweep(&PlaceholderModel, &grid);
        assert!(outcome.is_empty());
        assert_eq!(outcome.evaluated, 18);
        assert_eq!(outcome.dropped_infeasible, 18);
    }

    #[test]
    fn partial_overlap_counts_dropped_points() {
        let grid = SweepGrid::new(
            axis(100.0, 300.0, 3),
            axis(100.0, 300.0, 3),
            axis(1000.0, 2000.0, 2),
        )
        .unwrap();
        let outcome = execute_sweep(&PlaceholderModel, &grid);
        assert_eq!(outcome.len(), 6);
        assert_eq!(outcome.dropped_infeasible, 12);
        assert!(outcome.brake_horsepowers().iter().all(|&bhp| bhp > 0.0));
    }

    #[test]
    fn parallel_matches_sequential() {
        let grid = SweepGrid::new(
            axis(50.0, 900.0, 17),
            axis(100.0, 1200.0, 13),
            axis(500.0, 3000.0, 7),
        )
        .unwrap();
        let seq = execute_sweep(&PlaceholderModel, &grid);
        let par = execute_sweep_parallel(&PlaceholderModel, &grid);
        assert_eq!(seq, par);
    }

    #[test]
    fn works_with_a_custom_model() {
        struct Doubling;
        impl PerformanceModel for Doubling {
            fn name(&self) -> &str {
                "doubling"
            }
            fn evaluate(&self, point: &OperatingPoint) -> PerformanceResult {
                let base = point.evaluate();
                PerformanceResult {
                    pressure_ratio: Ratio::Undefined,
                    volumetric_flow: base.volumetric_flow * 2.0,
                    brake_horsepower: base.brake_horsepower * 2.0,
                }
            }
        }

        let grid = SweepGrid::new(
            SweepAxis::fixed(100.0),
            SweepAxis::fixed(500.0),
            SweepAxis::fixed(1000.0),
        )
        .unwrap();
        let model: &dyn PerformanceModel = &Doubling;
        let outcome = execute_sweep(model, &grid);
        assert_eq!(outcome.rows[0].volumetric_flow, 10_000.0);
    }

    #[test]
    fn groups_by_shaft_speed_in_first_seen_order() {
        let rows = sweep(axis(100.0, 200.0, 2), axis(600.0, 700.0, 2), axis(1000.0, 2000.0, 3))
            .unwrap();
        let outcome = SweepOutcome::from_rows(rows, 12);
        let groups = outcome.group_by_shaft_speed();
        let speeds: Vec<f64> = groups.iter().map(|g| g.shaft_speed).collect();
        assert_eq!(speeds, vec![1000.0, 1500.0, 2000.0]);
        assert!(groups.iter().all(|g| g.rows.len() == 4));
        assert!(groups[1].rows.iter().all(|r| r.shaft_speed == 1500.0));
    }

    #[test]
    fn column_accessors_follow_row_order() {
        let rows = sweep(SweepAxis::fixed(100.0), axis(200.0, 300.0, 2), SweepAxis::fixed(1000.0))
            .unwrap();
        let outcome = SweepOutcome::from_rows(rows, 2);
        assert_eq!(outcome.inlet_pressures(), vec![100.0, 100.0]);
        assert_eq!(outcome.discharge_pressures(), vec![200.0, 300.0]);
        assert_eq!(outcome.shaft_speeds(), vec![1000.0, 1000.0]);
        assert_eq!(outcome.volumetric_flows(), vec![5000.0, 5000.0]);
    }
}
