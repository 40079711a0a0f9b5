use crate::errors::{AppError, AppResult};
use crate::models::{Roster, RosterSchema};
use crate::store::RecordStore;

/// Add `delta` to the score of `key` and return the new score.
///
/// No floor or ceiling is applied here; negative totals are allowed.
pub fn apply_delta(
    roster: &mut Roster,
    schema: &RosterSchema,
    key: &str,
    delta: i64,
) -> AppResult<i64> {
    if !schema.tracks_score() {
        return Err(AppError::UnsupportedColumn("score"));
    }

    let record = roster
        .find_mut(key, schema.key_match)
        .ok_or_else(|| AppError::UnknownAttendee(key.to_string()))?;

    record.score = record
        .score
        .checked_add(delta)
        .ok_or_else(|| AppError::ScoreOverflow(record.key.clone()))?;

    Ok(record.score)
}

pub struct ScoreLogic;

impl ScoreLogic {
    pub fn run(
        store: &mut dyn RecordStore,
        schema: &RosterSchema,
        key: &str,
        delta: i64,
    ) -> AppResult<i64> {
        let mut roster = store.load()?;
        let score = apply_delta(&mut roster, schema, key, delta)?;
        store.save(&roster)?;

        tracing::info!(key, delta, score, "score adjusted");
        Ok(score)
    }
}
