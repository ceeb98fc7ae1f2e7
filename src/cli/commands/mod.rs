pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod new;
pub mod show;
pub mod submit;
pub mod week;

use crate::config::Config;
use crate::core::service::TimesheetService;
use crate::db::SqliteBackend;
use crate::errors::{AppError, AppResult};
use crate::models::timesheet::{TimesheetId, TimesheetRecord};

pub(crate) type Service = TimesheetService<SqliteBackend>;

/// Open the configured database and load its history.
pub(crate) fn open_service(cfg: &Config) -> AppResult<Service> {
    TimesheetService::open(SqliteBackend::open(&cfg.database)?)
}

/// Fetch a record that the user wants to change; only drafts qualify.
pub(crate) fn require_draft(service: &Service, id: TimesheetId) -> AppResult<TimesheetRecord> {
    let record = service
        .store()
        .get(id)
        .cloned()
        .ok_or(AppError::NotFound(id))?;

    if !record.is_draft() {
        return Err(AppError::InvalidStatus(format!(
            "timesheet {} is {}; only drafts can be changed",
            id, record.status
        )));
    }
    Ok(record)
}
