//! SQLite implementation of the timesheet persistence collaborator.

use crate::core::backend::TimesheetBackend;
use crate::db::migrate::run_pending_migrations;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::status::TimesheetStatus;
use crate::models::timesheet::{TimesheetId, TimesheetRecord};
use tracing::{debug, warn};

pub struct SqliteBackend {
    pool: DbPool,
}

impl SqliteBackend {
    /// Opens (creating if needed) the database at `path` and brings the
    /// schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::open_migrated(path).map(|(backend, _)| backend)
    }

    /// Same as [`open`](Self::open), also returning how many migrations ran.
    pub fn open_migrated(path: &str) -> AppResult<(Self, usize)> {
        let pool = DbPool::new(path)?;
        let applied = run_pending_migrations(&pool.conn)?;
        debug!(path, applied, "opened timesheet database");
        Ok((Self { pool }, applied))
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        run_pending_migrations(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool_mut(&mut self) -> &mut DbPool {
        &mut self.pool
    }

    /// Audit line; a failure here never fails the operation itself.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            warn!(error = %e, operation, "failed to write internal log");
        }
    }
}

impl TimesheetBackend for SqliteBackend {
    fn load_all(&mut self) -> AppResult<Vec<TimesheetRecord>> {
        queries::load_timesheets(&self.pool.conn)
    }

    fn create_or_update(&mut self, record: &TimesheetRecord) -> AppResult<TimesheetId> {
        queries::upsert_timesheet(&self.pool.conn, record)?;
        self.audit(
            "save",
            &record.id.to_string(),
            &format!(
                "{} week {} total {}h",
                record.status,
                record.start_date,
                record.total_hours()
            ),
        );
        Ok(record.id)
    }

    fn submit(&mut self, id: TimesheetId) -> AppResult<()> {
        if queries::update_status(&self.pool.conn, id, TimesheetStatus::Submitted)? == 0 {
            return Err(AppError::NotFound(id));
        }
        self.audit("submit", &id.to_string(), "Submitted for approval");
        Ok(())
    }

    fn delete(&mut self, id: TimesheetId) -> AppResult<()> {
        if queries::delete_timesheet(&self.pool.conn, id)? == 0 {
            return Err(AppError::NotFound(id));
        }
        self.audit("delete", &id.to_string(), "Timesheet deleted");
        Ok(())
    }
}
