//! Attendance status engine: stamps check-in, then check-out, then refuses.

use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceState, Roster, RosterSchema};
use crate::store::RecordStore;
use crate::utils::time::format_stamp;
use chrono::NaiveTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckinOutcome {
    CheckedIn { key: String, time: String },
    CheckedOut { key: String, time: String },
    AlreadyDone { key: String },
    NotFound,
}

impl CheckinOutcome {
    /// Whether the roster was modified and needs saving.
    pub fn changed(&self) -> bool {
        matches!(
            self,
            CheckinOutcome::CheckedIn { .. } | CheckinOutcome::CheckedOut { .. }
        )
    }
}

/// Apply one check-in submission to `roster` in place.
///
/// The first submission for a key stamps the arrival (and the channel tag,
/// when the layout has one); a second one stamps the departure if the layout
/// supports check-out. Anything after that leaves the roster untouched.
pub fn apply_checkin(
    roster: &mut Roster,
    schema: &RosterSchema,
    key: &str,
    now: NaiveTime,
) -> AppResult<CheckinOutcome> {
    let key = key.trim();
    if key.is_empty() {
        return Err(AppError::EmptyKey);
    }

    let Some(record) = roster.find_mut(key, schema.key_match) else {
        return Ok(CheckinOutcome::NotFound);
    };

    let stamp = format_stamp(now);

    let outcome = match record.state() {
        AttendanceState::NotArrived => {
            record.check_in = Some(stamp.clone());
            if let Some(tag) = schema.check_in_mode() {
                record.mode = Some(tag.to_string());
            }
            CheckinOutcome::CheckedIn {
                key: record.key.clone(),
                time: stamp,
            }
        }
        AttendanceState::CheckedIn if schema.supports_checkout() => {
            record.check_out = Some(stamp.clone());
            CheckinOutcome::CheckedOut {
                key: record.key.clone(),
                time: stamp,
            }
        }
        _ => CheckinOutcome::AlreadyDone {
            key: record.key.clone(),
        },
    };

    Ok(outcome)
}

/// High-level check-in flow: load, apply, and save the full roster when a
/// stamp was written.
pub struct CheckinLogic;

impl CheckinLogic {
    pub fn run(
        store: &mut dyn RecordStore,
        schema: &RosterSchema,
        key: &str,
        now: NaiveTime,
    ) -> AppResult<CheckinOutcome> {
        let mut roster = store.load()?;
        let outcome = apply_checkin(&mut roster, schema, key, now)?;

        if outcome.changed() {
            store.save(&roster)?;
        }

        tracing::info!(key = key.trim(), outcome = ?outcome, "check-in submitted");
        Ok(outcome)
    }
}
