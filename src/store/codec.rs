//! Conversion between the raw cell grid of a backing table and a `Roster`.
//!
//! Both backends speak the same grid: first row is the header, every cell is
//! text. Decoding is lenient the way a spreadsheet is: blank cells are absent
//! values, unparsable scores are 0.

use crate::errors::{AppError, AppResult};
use crate::models::{AttendeeRecord, Roster, RosterSchema};

pub type Grid = Vec<Vec<String>>;

const BOM: char = '\u{feff}';

/// Cells a spreadsheet export may use for an empty value.
fn is_blank(cell: &str) -> bool {
    let t = cell.trim();
    t.is_empty() || t.eq_ignore_ascii_case("nan") || t == "None" || t == "null"
}

fn optional_cell(row: &[String], idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i))
        .filter(|c| !is_blank(c))
        .map(|c| c.trim().to_string())
}

/// Integer score from a cell; `"15"`, `" 15 "` and `"15.0"` all give 15.
pub fn coerce_score(cell: &str) -> Option<i64> {
    let t = cell.trim();
    if let Ok(n) = t.parse::<i64>() {
        return Some(n);
    }
    match t.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Some(f as i64),
        _ => None,
    }
}

pub fn decode(grid: &[Vec<String>], schema: &RosterSchema) -> AppResult<Roster> {
    let Some((header, rows)) = grid.split_first() else {
        return Ok(Roster::default());
    };

    let header: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let h = if i == 0 { h.trim_start_matches(BOM) } else { h };
            h.trim().to_string()
        })
        .collect();

    let find = |name: &str| header.iter().position(|h| h == name);
    let cols = &schema.columns;

    let key_idx = find(&cols.key).ok_or_else(|| {
        AppError::Store(format!("missing key column '{}' in roster header", cols.key))
    })?;
    let in_idx = find(&cols.check_in);
    let out_idx = cols.check_out.as_deref().and_then(find);
    let score_idx = cols.score.as_deref().and_then(find);
    let mode_idx = cols.mode.as_deref().and_then(find);

    let known = [Some(key_idx), in_idx, out_idx, score_idx, mode_idx];
    let extra_idx: Vec<usize> = (0..header.len())
        .filter(|i| !known.contains(&Some(*i)))
        .collect();

    let mut roster = Roster {
        extra_columns: extra_idx.iter().map(|&i| header[i].clone()).collect(),
        records: Vec::with_capacity(rows.len()),
    };

    for (line, row) in rows.iter().enumerate() {
        if row.iter().all(|c| c.trim().is_empty()) {
            continue;
        }

        let score = match score_idx.and_then(|i| row.get(i)) {
            Some(cell) if !is_blank(cell) => coerce_score(cell).unwrap_or_else(|| {
                tracing::warn!(row = line + 1, value = %cell, "non-numeric score, using 0");
                0
            }),
            _ => 0,
        };

        roster.records.push(AttendeeRecord {
            key: row.get(key_idx).map(|c| c.trim().to_string()).unwrap_or_default(),
            check_in: optional_cell(row, in_idx),
            check_out: optional_cell(row, out_idx),
            score,
            mode: optional_cell(row, mode_idx),
            extra: extra_idx
                .iter()
                .map(|&i| row.get(i).cloned().unwrap_or_default())
                .collect(),
        });
    }

    Ok(roster)
}

pub fn encode(roster: &Roster, schema: &RosterSchema) -> Grid {
    let cols = &schema.columns;

    let mut header: Vec<String> = cols.headers().into_iter().map(str::to_string).collect();
    header.extend(roster.extra_columns.iter().cloned());

    let mut grid = Vec::with_capacity(roster.len() + 1);
    grid.push(header);

    for r in &roster.records {
        let mut row = vec![r.key.clone(), r.check_in.clone().unwrap_or_default()];
        if cols.check_out.is_some() {
            row.push(r.check_out.clone().unwrap_or_default());
        }
        if cols.score.is_some() {
            row.push(r.score.to_string());
        }
        if cols.mode.is_some() {
            row.push(r.mode.clone().unwrap_or_default());
        }
        for i in 0..roster.extra_columns.len() {
            row.push(r.extra.get(i).cloned().unwrap_or_default());
        }
        grid.push(row);
    }

    grid
}
