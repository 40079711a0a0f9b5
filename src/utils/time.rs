//! Time utilities: the HH:MM stamps written into the roster.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveTime};

pub const STAMP_FORMAT: &str = "%H:%M";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), STAMP_FORMAT).ok()
}

pub fn format_stamp(t: NaiveTime) -> String {
    t.format(STAMP_FORMAT).to_string()
}

/// Current wall-clock time of day.
pub fn now() -> NaiveTime {
    Local::now().time()
}

/// Validate an admin-supplied stamp. An empty string clears the field.
pub fn parse_optional_stamp(input: &str) -> AppResult<Option<String>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    let t = parse_time(input).ok_or_else(|| AppError::InvalidTime(input.to_string()))?;
    Ok(Some(format_stamp(t)))
}
