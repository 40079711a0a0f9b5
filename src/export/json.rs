// src/export/json.rs

use crate::errors::AppResult;
use crate::export::model::ReportTable;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One JSON object per attendee, keyed by column header. Scores are numbers,
/// empty cells are null.
pub(crate) fn to_json(table: &ReportTable) -> Value {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            for (i, header) in table.headers.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let value = if Some(i) == table.score_col {
                    cell.parse::<i64>().map(Value::from).unwrap_or(Value::Null)
                } else if cell.is_empty() {
                    Value::Null
                } else {
                    Value::String(cell.to_string())
                };
                obj.insert(header.clone(), value);
            }
            Value::Object(obj)
        })
        .collect();

    Value::Array(rows)
}

/// Export JSON pretty-printed.
pub(crate) fn export_json(table: &ReportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&to_json(table))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
