use cf_app::{
    AppError, AppResult, MultirunPlan, Session, SessionFile, load_session, save_session,
    validate_session,
};
use cf_core::as_kw;
use cf_model::{CylinderSettings, OperatingPoint, Ratio};
use cf_report::{PageLayout, Report, paginate, rows_to_csv, rows_to_json};
use cf_sweep::SweepAxis;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cf-cli")]
#[command(about = "compflow CLI - Reciprocating compressor performance tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single operating point
    Evaluate {
        /// Inlet (suction) pressure
        #[arg(long)]
        inlet: f64,
        /// Discharge pressure
        #[arg(long)]
        discharge: f64,
        /// Shaft speed in rpm
        #[arg(long)]
        speed: f64,
    },
    /// Run a multirun sweep and export the rows
    Sweep {
        /// Session file holding the multirun plan
        #[arg(long)]
        session: Option<PathBuf>,
        /// Inlet pressure axis as MIN:MAX:N
        #[arg(long, value_parser = parse_axis)]
        inlet: Option<SweepAxis>,
        /// Discharge pressure axis as MIN:MAX:N
        #[arg(long, value_parser = parse_axis)]
        discharge: Option<SweepAxis>,
        /// Shaft speed axis as MIN:MAX:N
        #[arg(long, value_parser = parse_axis)]
        speed: Option<SweepAxis>,
        /// Evaluate points on all cores
        #[arg(long)]
        parallel: bool,
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Calculate the stored process conditions and print the report
    Report {
        /// Session file (optional, defaults to the form defaults)
        #[arg(long)]
        session: Option<PathBuf>,
        /// Print page markers as laid out for export
        #[arg(long)]
        paged: bool,
    },
    /// Write a session file with default values
    Init {
        #[arg(default_value = "compflow.yaml")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Append a cylinder stage to a session file
    AddCylinder {
        session_path: PathBuf,
        /// Clearance in percent
        #[arg(long, default_value_t = 5.0)]
        clearance: f64,
        /// Cylinder has SACE
        #[arg(long, overrides_with = "no_sace")]
        sace: bool,
        /// Cylinder has no SACE
        #[arg(long)]
        no_sace: bool,
        /// VVCP in percent
        #[arg(long, default_value_t = 0.0)]
        vvcp: f64,
    },
    /// Check a session file against the input ranges
    Validate {
        session_path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            inlet,
            discharge,
            speed,
        } => cmd_evaluate(inlet, discharge, speed),
        Commands::Sweep {
            session,
            inlet,
            discharge,
            speed,
            parallel,
            format,
            output,
        } => {
            let mut plan = match session {
                Some(path) => load_session(&path)?.multirun,
                None => MultirunPlan::default(),
            };
            if let Some(axis) = inlet {
                plan.inlet = axis;
            }
            if let Some(axis) = discharge {
                plan.discharge = axis;
            }
            if let Some(axis) = speed {
                plan.shaft_speed = axis;
            }
            plan.parallel |= parallel;
            cmd_sweep(&plan, format, output.as_deref())
        }
        Commands::Report { session, paged } => cmd_report(session.as_deref(), paged),
        Commands::Init { path, force } => cmd_init(&path, force),
        Commands::AddCylinder {
            session_path,
            clearance,
            sace,
            no_sace,
            vvcp,
        } => cmd_add_cylinder(
            &session_path,
            CylinderSettings {
                clearance_pct: clearance,
                has_sace: sace || !no_sace,
                vvcp_pct: vvcp,
            },
        ),
        Commands::Validate { session_path } => cmd_validate(&session_path),
    }
}

fn cmd_evaluate(inlet: f64, discharge: f64, speed: f64) -> AppResult<()> {
    let point = OperatingPoint::new(inlet, discharge, speed)?;
    let result = point.evaluate();

    match result.pressure_ratio {
        Ratio::Defined(r) => println!("Pressure ratio:   {:.2}", r),
        Ratio::Undefined => println!("Pressure ratio:   undefined (inlet pressure is zero)"),
    }
    println!("Volumetric flow:  {:.2}", result.volumetric_flow);
    println!(
        "Brake power:      {:.2} BHP ({:.2} kW)",
        result.brake_horsepower,
        as_kw(result.brake_power())
    );
    if !point.is_feasible() {
        println!("⚠ Discharge pressure is not above inlet pressure");
    }
    Ok(())
}

fn cmd_sweep(plan: &MultirunPlan, format: ExportFormat, output: Option<&Path>) -> AppResult<()> {
    let outcome = cf_app::run_multirun(plan)?;

    if outcome.is_empty() {
        eprintln!("No feasible points in the requested ranges");
    }

    let content = match format {
        ExportFormat::Csv => rows_to_csv(&outcome.rows),
        ExportFormat::Json => {
            let mut json = rows_to_json(&outcome.rows)?;
            json.push('\n');
            json
        }
    };

    if let Some(path) = output {
        std::fs::write(path, content)?;
        println!(
            "✓ Exported {} rows to {} ({} infeasible combinations skipped)",
            outcome.len(),
            path.display(),
            outcome.dropped_infeasible
        );
    } else {
        print!("{}", content);
    }
    Ok(())
}

fn cmd_report(session_path: Option<&Path>, paged: bool) -> AppResult<()> {
    let mut session = match session_path {
        Some(path) => Session::from_path(path)?,
        None => Session::default(),
    };
    let report = calculated_report(&mut session);

    if paged {
        for page in paginate(&report, &PageLayout::default()) {
            println!("--- Page {} ---", page.number);
            for line in &page.lines {
                println!("{}", line.text);
            }
        }
    } else {
        println!("{}", report);
    }
    Ok(())
}

/// Calculate and build the report. A failed calculation is logged and the
/// report falls back to its placeholders.
fn calculated_report(session: &mut Session) -> Report {
    if let Err(e) = session.calculate() {
        tracing::warn!(error = %e, "calculation skipped");
        eprintln!("⚠ Performance not calculated: {}", e);
    }
    session.report()
}

fn cmd_init(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Session(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    save_session(path, &SessionFile::default())?;
    println!("✓ Wrote default session to {}", path.display());
    Ok(())
}

fn cmd_add_cylinder(session_path: &Path, settings: CylinderSettings) -> AppResult<()> {
    let mut session = Session::from_path(session_path)?;
    let stage = session.add_cylinder(settings);
    cf_app::validate::validate_equipment(session.equipment())?;
    session.save(session_path)?;
    println!("✓ Added cylinder stage {}", stage);
    Ok(())
}

fn cmd_validate(session_path: &Path) -> AppResult<()> {
    println!("Validating session: {}", session_path.display());
    let file = load_session(session_path)?;
    validate_session(&file)?;
    println!("✓ Session is valid");
    Ok(())
}

/// Parse `MIN:MAX:N` into a sweep axis.
fn parse_axis(text: &str) -> Result<SweepAxis, String> {
    let parts: Vec<&str> = text.split(':').collect();
    let [min, max, n] = parts.as_slice() else {
        return Err(format!("expected MIN:MAX:N, got '{}'", text));
    };
    let min: f64 = min.trim().parse().map_err(|_| format!("bad minimum '{}'", min))?;
    let max: f64 = max.trim().parse().map_err(|_| format!("bad maximum '{}'", max))?;
    let n: usize = n.trim().parse().map_err(|_| format!("bad sample count '{}'", n))?;
    SweepAxis::new(min, max, n).map_err(|e| e.to_string())
}
