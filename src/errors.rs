//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Sheet database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Store error: {0}")]
    Store(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    // ---------------------------
    // Roster logic errors
    // ---------------------------
    #[error("Lookup key must not be empty")]
    EmptyKey,

    #[error("No attendee named '{0}' in the roster")]
    UnknownAttendee(String),

    #[error("Attendee '{0}' is already in the roster")]
    DuplicateAttendee(String),

    #[error("Cannot set check-out for '{0}' before a check-in time")]
    CheckoutBeforeCheckin(String),

    #[error("Score overflow for '{0}'")]
    ScoreOverflow(String),

    #[error("Negative score {1} not allowed for '{0}'")]
    NegativeScore(String, i64),

    #[error("This roster layout has no {0} column")]
    UnsupportedColumn(&'static str),

    #[error("Access denied: wrong admin password")]
    AccessDenied,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

pub type AppResult<T> = Result<T, AppError>;
