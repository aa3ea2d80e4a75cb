//! cf-report: text reports, page planning and sweep export.

pub mod export;
pub mod layout;
pub mod report;

pub use export::{CSV_HEADER, rows_to_csv, rows_to_json};
pub use layout::{Page, PageLayout, PlacedLine, paginate};
pub use report::{NOT_COMPUTED, Report, TIMESTAMP_FORMAT, format_report, format_report_now};

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
