//! Admin roster editing: add, remove and edit rows, or replace the whole
//! table with an edited copy.

use crate::errors::{AppError, AppResult};
use crate::models::{AttendeeRecord, Roster, RosterSchema};
use crate::store::RecordStore;
use crate::store::codec;
use crate::store::csv_file::read_grid;
use crate::utils::time::parse_optional_stamp;
use std::path::Path;

/// Field changes for one row. `None` leaves a field alone; an empty string
/// clears a time or mode.
#[derive(Debug, Clone, Default)]
pub struct RowEdit {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub score: Option<i64>,
    pub mode: Option<String>,
}

impl RowEdit {
    pub fn is_empty(&self) -> bool {
        self.check_in.is_none()
            && self.check_out.is_none()
            && self.score.is_none()
            && self.mode.is_none()
    }
}

pub fn add_row(roster: &mut Roster, schema: &RosterSchema, key: &str) -> AppResult<()> {
    let key = key.trim();
    if key.is_empty() {
        return Err(AppError::EmptyKey);
    }
    if roster.find(key, schema.key_match).is_some() {
        return Err(AppError::DuplicateAttendee(key.to_string()));
    }

    let mut record = AttendeeRecord::new(key);
    record.extra = vec![String::new(); roster.extra_columns.len()];
    roster.records.push(record);
    Ok(())
}

pub fn remove_row(roster: &mut Roster, schema: &RosterSchema, key: &str) -> AppResult<AttendeeRecord> {
    let idx = roster
        .position(key, schema.key_match)
        .ok_or_else(|| AppError::UnknownAttendee(key.to_string()))?;
    Ok(roster.records.remove(idx))
}

pub fn edit_row(
    roster: &mut Roster,
    schema: &RosterSchema,
    key: &str,
    edit: &RowEdit,
    floor_at_zero: bool,
) -> AppResult<AttendeeRecord> {
    if edit.check_out.is_some() && !schema.supports_checkout() {
        return Err(AppError::UnsupportedColumn("check-out"));
    }
    if edit.score.is_some() && !schema.tracks_score() {
        return Err(AppError::UnsupportedColumn("score"));
    }
    if edit.mode.is_some() && schema.columns.mode.is_none() {
        return Err(AppError::UnsupportedColumn("mode"));
    }

    let record = roster
        .find_mut(key, schema.key_match)
        .ok_or_else(|| AppError::UnknownAttendee(key.to_string()))?;

    // Validate everything before touching the record.
    let check_in = edit
        .check_in
        .as_deref()
        .map(parse_optional_stamp)
        .transpose()?;
    let check_out = edit
        .check_out
        .as_deref()
        .map(parse_optional_stamp)
        .transpose()?;

    if let Some(score) = edit.score
        && floor_at_zero
        && score < 0
    {
        return Err(AppError::NegativeScore(record.key.clone(), score));
    }

    let final_in = check_in.unwrap_or_else(|| record.check_in.clone());
    let final_out = check_out.unwrap_or_else(|| record.check_out.clone());
    if final_out.is_some() && final_in.is_none() {
        return Err(AppError::CheckoutBeforeCheckin(record.key.clone()));
    }

    record.check_in = final_in;
    record.check_out = final_out;
    if let Some(score) = edit.score {
        record.score = score;
    }
    if let Some(mode) = &edit.mode {
        let mode = mode.trim();
        record.mode = (!mode.is_empty()).then(|| mode.to_string());
    }

    Ok(record.clone())
}

/// Check the invariants a replacement table must hold before it is saved.
pub fn validate(roster: &Roster, schema: &RosterSchema) -> AppResult<()> {
    for r in &roster.records {
        if r.key.trim().is_empty() {
            return Err(AppError::EmptyKey);
        }
        if r.check_out.is_some() && r.check_in.is_none() {
            return Err(AppError::CheckoutBeforeCheckin(r.key.clone()));
        }
    }
    if let Some(dup) = roster.first_duplicate(schema.key_match) {
        return Err(AppError::DuplicateAttendee(dup.to_string()));
    }
    Ok(())
}

/// High-level roster editing against a store. Every operation saves the
/// full table.
pub struct RosterLogic;

impl RosterLogic {
    pub fn add(store: &mut dyn RecordStore, schema: &RosterSchema, key: &str) -> AppResult<()> {
        let mut roster = store.load()?;
        add_row(&mut roster, schema, key)?;
        store.save(&roster)?;
        tracing::info!(key, "attendee added");
        Ok(())
    }

    pub fn remove(
        store: &mut dyn RecordStore,
        schema: &RosterSchema,
        key: &str,
    ) -> AppResult<AttendeeRecord> {
        let mut roster = store.load()?;
        let removed = remove_row(&mut roster, schema, key)?;
        store.save(&roster)?;
        tracing::info!(key, "attendee removed");
        Ok(removed)
    }

    pub fn edit(
        store: &mut dyn RecordStore,
        schema: &RosterSchema,
        key: &str,
        edit: &RowEdit,
        floor_at_zero: bool,
    ) -> AppResult<AttendeeRecord> {
        let mut roster = store.load()?;
        let updated = edit_row(&mut roster, schema, key, edit, floor_at_zero)?;
        store.save(&roster)?;
        tracing::info!(key, "attendee edited");
        Ok(updated)
    }

    /// Replace the stored roster with the rows of an edited CSV file.
    pub fn import(
        store: &mut dyn RecordStore,
        schema: &RosterSchema,
        file: &Path,
    ) -> AppResult<Roster> {
        let grid = read_grid(file)?;
        let roster = codec::decode(&grid, schema)?;
        validate(&roster, schema)?;
        store.save(&roster)?;
        tracing::info!(file = %file.display(), rows = roster.len(), "roster replaced");
        Ok(roster)
    }
}
