// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::ReportTable;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use crate::utils::time::parse_time;
use rust_xlsxwriter::{
    Color, ExcelDateTime, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with a styled header, banded rows and auto-sized columns.
pub(crate) fn export_xlsx(table: &ReportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Attendance")?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in table.headers.iter().enumerate() {
        worksheet.write_with_format(0, col_index(col)?, header.as_str(), &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    // Display width, so CJK names get wide enough columns.
    let mut col_widths: Vec<usize> = table
        .headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, values) in table.rows.iter().enumerate() {
        let row = u32::try_from(row_index + 1)
            .map_err(|_| AppError::Export("too many rows for XLSX".to_string()))?;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in values.iter().enumerate() {
            let is_score = Some(col) == table.score_col;
            write_xlsx_cell(worksheet, row, col_index(col)?, value, band_color, is_score)?;

            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(col_index(c)?, *w as f64 + 2.0)?;
    }

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one cell: scores as numbers, HH:MM stamps as Excel times, the rest
/// as text.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
    is_score: bool,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if is_score && let Ok(num) = s.parse::<i64>() {
        let fmt = base.set_align(FormatAlign::Right);
        worksheet.write_with_format(row, col, num as f64, &fmt)?;
        return Ok(());
    }

    if let Some(t) = parse_time(s) {
        use chrono::Timelike;
        let fmt = base.set_num_format("hh:mm");
        let time = ExcelDateTime::from_hms(t.hour() as u16, t.minute() as u8, 0)?;
        worksheet.write_with_format(row, col, &time, &fmt)?;
        return Ok(());
    }

    worksheet.write_with_format(row, col, s, &base)?;
    Ok(())
}

fn col_index(col: usize) -> AppResult<u16> {
    u16::try_from(col).map_err(|_| AppError::Export("too many columns for XLSX".to_string()))
}
