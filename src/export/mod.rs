// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
pub mod logic;
mod model;
mod xlsx;

pub use self::csv::render_csv;
pub use logic::ExportLogic;
pub use model::ReportTable;

use crate::ui::messages::success;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// `<prefix>_Report_<YYYY-MM-DD>.<ext>`
pub fn report_file_name(prefix: &str, date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "{}_Report_{}.{}",
        prefix,
        date.format("%Y-%m-%d"),
        format.as_str()
    )
}
