//! Persistence collaborator seen by the lifecycle service.

use crate::errors::{AppError, AppResult};
use crate::models::status::TimesheetStatus;
use crate::models::timesheet::{TimesheetId, TimesheetRecord};

/// Where timesheets end up once the user saves or submits.
///
/// Calls are blocking and either succeed or fail as a whole; retry policy,
/// if any, belongs to the implementation.
pub trait TimesheetBackend {
    /// Full history, newest first.
    fn load_all(&mut self) -> AppResult<Vec<TimesheetRecord>>;

    /// Insert or overwrite `record` under its id and return that id.
    fn create_or_update(&mut self, record: &TimesheetRecord) -> AppResult<TimesheetId>;

    /// Mark a stored timesheet as submitted for approval.
    fn submit(&mut self, id: TimesheetId) -> AppResult<()>;

    fn delete(&mut self, id: TimesheetId) -> AppResult<()>;
}

/// Backend keeping everything in process memory. Used by tests and by
/// callers that do not need durability.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    records: Vec<TimesheetRecord>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[TimesheetRecord] {
        &self.records
    }
}

impl TimesheetBackend for MemoryBackend {
    fn load_all(&mut self) -> AppResult<Vec<TimesheetRecord>> {
        let mut out = self.records.clone();
        out.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(out)
    }

    fn create_or_update(&mut self, record: &TimesheetRecord) -> AppResult<TimesheetId> {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => self.records.push(record.clone()),
        }
        Ok(record.id)
    }

    fn submit(&mut self, id: TimesheetId) -> AppResult<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(AppError::NotFound(id))?;
        record.status = TimesheetStatus::Submitted;
        Ok(())
    }

    fn delete(&mut self, id: TimesheetId) -> AppResult<()> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Err(AppError::NotFound(id));
        }
        Ok(())
    }
}
