// src/export/csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::ReportTable;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV bytes with a UTF-8 BOM, so spreadsheet programs pick the right
/// encoding for non-ASCII names.
pub fn render_csv(table: &ReportTable) -> AppResult<Vec<u8>> {
    let mut wtr = ::csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(UTF8_BOM.to_vec());

    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV buffer error: {e}")))
}

pub(crate) fn export_csv(table: &ReportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    fs::write(path, render_csv(table)?)?;

    notify_export_success("CSV", path);
    Ok(())
}
