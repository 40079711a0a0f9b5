// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::ReportTable;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, csv::export_csv, report_file_name};
use crate::models::{Roster, RosterSchema};
use crate::ui::messages::warning;
use crate::utils::path::absolutize;
use chrono::NaiveDate;
use std::path::PathBuf;

/// High-level report export.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the whole roster as a report.
    ///
    /// - `format`: csv (UTF-8 with BOM) | json | xlsx
    /// - `file`: output path; defaults to `<prefix>_Report_<date>.<ext>` in
    ///   the working directory
    pub fn export(
        roster: &Roster,
        schema: &RosterSchema,
        format: ExportFormat,
        file: Option<&str>,
        prefix: &str,
        today: NaiveDate,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = match file {
            Some(f) => absolutize(f),
            None => absolutize(&report_file_name(prefix, today, format)),
        };

        ensure_writable(&path, force)?;

        let table = ReportTable::from_roster(roster, schema);
        if table.is_empty() {
            warning("Roster is empty: the report only contains the header.");
        }

        match format {
            ExportFormat::Csv => export_csv(&table, &path)?,
            ExportFormat::Json => export_json(&table, &path)?,
            ExportFormat::Xlsx => export_xlsx(&table, &path)?,
        }

        tracing::info!(path = %path.display(), format = format.as_str(), rows = table.rows.len(), "report exported");
        Ok(path)
    }
}
