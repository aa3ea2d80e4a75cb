//! Multirun service: turn a stored plan into sweep results.

use cf_core::timing::timed;
use cf_model::PlaceholderModel;
use cf_sweep::{SweepGrid, SweepOutcome, execute_sweep, execute_sweep_parallel};

use crate::error::AppResult;
use crate::session_file::MultirunPlan;

/// Run a multirun plan against the placeholder model.
///
/// The plan's axes are validated when the grid is built. An empty outcome
/// is not an error; callers report "no feasible points" themselves.
pub fn run_multirun(plan: &MultirunPlan) -> AppResult<SweepOutcome> {
    let grid = SweepGrid::new(plan.inlet, plan.discharge, plan.shaft_speed)?;
    tracing::info!(
        combinations = grid.len(),
        parallel = plan.parallel,
        "running multirun"
    );

    let (outcome, elapsed) = timed("multirun", || {
        if plan.parallel {
            execute_sweep_parallel(&PlaceholderModel, &grid)
        } else {
            execute_sweep(&PlaceholderModel, &grid)
        }
    });
    if let Some(elapsed) = elapsed {
        tracing::info!(seconds = elapsed.as_secs_f64(), "multirun timing");
    }
    tracing::info!(
        rows = outcome.len(),
        dropped = outcome.dropped_infeasible,
        "multirun complete"
    );
    Ok(outcome)
}
