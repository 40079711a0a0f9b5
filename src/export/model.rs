// src/export/model.rs

use crate::models::{Roster, RosterSchema};
use crate::store::codec;

/// Flat header + rows view of the roster, shared by every export format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Column holding the integer score, if the layout has one.
    pub score_col: Option<usize>,
}

impl ReportTable {
    pub fn from_roster(roster: &Roster, schema: &RosterSchema) -> Self {
        let mut grid = codec::encode(roster, schema);
        let headers = if grid.is_empty() {
            Vec::new()
        } else {
            grid.remove(0)
        };

        let score_col = schema
            .columns
            .score
            .as_ref()
            .and_then(|s| headers.iter().position(|h| h == s));

        Self {
            headers,
            rows: grid,
            score_col,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
