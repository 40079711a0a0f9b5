//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured in terminal columns, so CJK names line up.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Columns sized to fit their headers; rows widen them as they are added.
    pub fn with_headers(headers: &[&str]) -> Self {
        Self::new(
            headers
                .iter()
                .map(|h| Column {
                    header: h.to_string(),
                    width: visible_width(h),
                })
                .collect(),
        )
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(visible_width(cell));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            push_padded(&mut out, &col.header, col.width);
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                push_padded(&mut out, cell, col.width);
            }
            out.push('\n');
        }

        out
    }
}

fn push_padded(out: &mut String, cell: &str, width: usize) {
    out.push_str(cell);
    let pad = width.saturating_sub(visible_width(cell));
    out.push_str(&" ".repeat(pad + 1));
}

/// Display width ignoring ANSI colour sequences.
pub fn visible_width(s: &str) -> usize {
    let mut plain = String::with_capacity(s.len());
    let mut in_escape = false;
    for c in s.chars() {
        if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            plain.push(c);
        }
    }
    UnicodeWidthStr::width(plain.as_str())
}
