use serde::{Deserialize, Serialize};

/// One row of the roster.
///
/// Times are kept as the `HH:MM` strings that end up in the sheet; an empty
/// cell is `None`, never an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeRecord {
    pub key: String,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub score: i64,
    pub mode: Option<String>,
    /// Cells of sheet columns outside the layout, aligned with
    /// `Roster::extra_columns`.
    #[serde(skip)]
    pub extra: Vec<String>,
}

impl AttendeeRecord {
    /// A fresh record: only the key is filled, score defaults to 0.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            check_in: None,
            check_out: None,
            score: 0,
            mode: None,
            extra: Vec::new(),
        }
    }

    pub fn state(&self) -> AttendanceState {
        match (&self.check_in, &self.check_out) {
            (None, _) => AttendanceState::NotArrived,
            (Some(_), None) => AttendanceState::CheckedIn,
            (Some(_), Some(_)) => AttendanceState::CheckedOut,
        }
    }
}

/// Check-in status of a single record. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttendanceState {
    NotArrived,
    CheckedIn,
    CheckedOut,
}

impl AttendanceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceState::NotArrived => "not arrived",
            AttendanceState::CheckedIn => "checked in",
            AttendanceState::CheckedOut => "checked out",
        }
    }
}
