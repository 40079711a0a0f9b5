//! Roster rendering for the admin `list` command.

use crate::models::{Roster, RosterSchema};
use crate::utils::colors::{colorize_in_out, colorize_optional, colorize_score};
use crate::utils::table::Table;

pub fn roster_table(roster: &Roster, schema: &RosterSchema) -> Table {
    let cols = &schema.columns;

    let mut headers: Vec<&str> = vec!["#", cols.key.as_str(), cols.check_in.as_str()];
    if let Some(c) = &cols.check_out {
        headers.push(c);
    }
    if let Some(c) = &cols.score {
        headers.push(c);
    }
    if let Some(c) = &cols.mode {
        headers.push(c);
    }
    headers.push("status");

    let mut table = Table::with_headers(&headers);

    for (i, r) in roster.records.iter().enumerate() {
        let mut row = vec![
            (i + 1).to_string(),
            r.key.clone(),
            colorize_in_out(r.check_in.as_deref(), true),
        ];
        if cols.check_out.is_some() {
            row.push(colorize_in_out(r.check_out.as_deref(), false));
        }
        if cols.score.is_some() {
            row.push(colorize_score(r.score));
        }
        if cols.mode.is_some() {
            row.push(colorize_optional(r.mode.as_deref()));
        }
        row.push(r.state().as_str().to_string());
        table.add_row(row);
    }

    table
}

/// One-line tally: how many arrived, how many left.
pub fn summary_line(roster: &Roster, schema: &RosterSchema) -> String {
    use crate::models::AttendanceState;

    let arrived = roster
        .records
        .iter()
        .filter(|r| r.state() != AttendanceState::NotArrived)
        .count();

    if schema.supports_checkout() {
        let left = roster
            .records
            .iter()
            .filter(|r| r.state() == AttendanceState::CheckedOut)
            .count();
        format!(
            "{} attendees | {} checked in | {} checked out",
            roster.len(),
            arrived,
            left
        )
    } else {
        format!("{} attendees | {} checked in", roster.len(), arrived)
    }
}
