//! Unified application error type.
//! All modules (models, core, db, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use crate::models::timesheet::TimesheetId;
use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Corrupt timesheet data: {0}")]
    CorruptRecord(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid hours '{0}': expected a value between 0 and 24 in steps of 0.5")]
    InvalidHours(String),

    #[error("Invalid day selector: {0}")]
    InvalidDay(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Total hours cannot be zero")]
    ZeroHours,

    #[error("Description is required for {0} because hours are logged")]
    MissingDescription(NaiveDate),

    // ---------------------------
    // Lifecycle
    // ---------------------------
    #[error("Timesheet {0} not found")]
    NotFound(TimesheetId),

    #[error("Remote failure: {0}")]
    RemoteFailure(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
