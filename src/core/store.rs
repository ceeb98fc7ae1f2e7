//! In-memory timesheet history and the draft → submitted lifecycle.

use crate::core::{validate, week};
use crate::errors::{AppError, AppResult};
use crate::models::status::TimesheetStatus;
use crate::models::timesheet::{TimesheetDraft, TimesheetId, TimesheetRecord};
use chrono::NaiveDate;
use tracing::debug;

/// Ordered collection of timesheets, newest first, plus the id of the
/// record currently loaded for editing.
///
/// The store is owned by its single caller and mutated synchronously; it
/// is `Clone` so callers can snapshot it before a fallible follow-up.
#[derive(Debug, Clone, Default)]
pub struct TimesheetStore {
    records: Vec<TimesheetRecord>,
    editing: Option<TimesheetId>,
}

impl TimesheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store over an existing history. `records` must already be newest first.
    pub fn with_records(records: Vec<TimesheetRecord>) -> Self {
        Self {
            records,
            editing: None,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records newest first.
    pub fn history(&self) -> impl Iterator<Item = &TimesheetRecord> {
        self.records.iter()
    }

    pub fn get(&self, id: TimesheetId) -> Option<&TimesheetRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn editing(&self) -> Option<TimesheetId> {
        self.editing
    }

    fn position(&self, id: TimesheetId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    fn mint_id(&self) -> TimesheetId {
        let max = self.records.iter().map(|r| r.id.0).max().unwrap_or(0);
        TimesheetId(max + 1)
    }

    fn insert_front(&mut self, draft: &TimesheetDraft, status: TimesheetStatus) -> TimesheetRecord {
        let record = TimesheetRecord::from_draft(self.mint_id(), draft, status);
        self.records.insert(0, record.clone());
        record
    }

    /// New empty draft for the week starting at `start_date`. No validation.
    pub fn create(
        &mut self,
        start_date: NaiveDate,
        client: &str,
        manager: &str,
    ) -> AppResult<TimesheetRecord> {
        let draft = TimesheetDraft::new(start_date, client, manager)?;
        let record = self.insert_front(&draft, TimesheetStatus::Draft);
        debug!(id = %record.id, start = %start_date, "created draft");
        Ok(record)
    }

    /// Copies a stored record into a new editing buffer and marks it as the
    /// record being edited. The stored record is left untouched.
    pub fn load_for_edit(&mut self, id: TimesheetId) -> AppResult<TimesheetDraft> {
        let record = self.get(id).ok_or(AppError::NotFound(id))?;
        let draft = TimesheetDraft::from_record(record);
        self.editing = Some(id);
        debug!(id = %id, "loaded for edit");
        Ok(draft)
    }

    /// Persist the buffer.
    ///
    /// A buffer whose days do not run from its start date is refused with
    /// `CorruptRecord` before anything changes.
    ///
    /// While a stored record is being edited it is overwritten in place:
    /// same id, same status, same position in the history. Otherwise a new
    /// draft goes to the front and becomes the record being edited, so that
    /// saving the same buffer again updates it instead of duplicating it.
    pub fn save(&mut self, draft: &TimesheetDraft) -> AppResult<TimesheetRecord> {
        week::check_grid(draft.start_date(), draft.entries())?;

        if let Some(idx) = self.editing.and_then(|id| self.position(id)) {
            let record = &mut self.records[idx];
            record.apply_draft(draft);
            debug!(id = %record.id, status = %record.status, "updated in place");
            return Ok(record.clone());
        }

        let record = self.insert_front(draft, TimesheetStatus::Draft);
        self.editing = Some(record.id);
        debug!(id = %record.id, "saved new draft");
        Ok(record)
    }

    pub fn validate(&self, draft: &TimesheetDraft) -> AppResult<()> {
        validate::validate(draft)
    }

    /// Validate and submit the buffer.
    ///
    /// A draft being edited is transitioned in place and keeps its id; in
    /// any other case a new record is created already `Submitted`. On
    /// validation failure nothing changes, on success editing ends.
    pub fn submit(&mut self, draft: &TimesheetDraft) -> AppResult<TimesheetRecord> {
        week::check_grid(draft.start_date(), draft.entries())?;
        self.validate(draft)?;

        let editable = self
            .editing
            .and_then(|id| self.position(id))
            .filter(|&idx| self.records[idx].is_draft());

        let record = match editable {
            Some(idx) => {
                let record = &mut self.records[idx];
                record.apply_draft(draft);
                record.status = TimesheetStatus::Submitted;
                record.clone()
            }
            None => self.insert_front(draft, TimesheetStatus::Submitted),
        };

        self.editing = None;
        debug!(id = %record.id, total = %record.total_hours(), "submitted");
        Ok(record)
    }

    /// Ends an edit session without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Removes a record whatever its status.
    ///
    /// Only drafts are meant to be deletable; offering the action is the
    /// caller's decision. Unknown ids are reported as `NotFound`.
    pub fn delete(&mut self, id: TimesheetId) -> AppResult<TimesheetRecord> {
        let idx = self.position(id).ok_or(AppError::NotFound(id))?;
        let removed = self.records.remove(idx);

        if self.editing == Some(id) {
            self.editing = None;
        }

        debug!(id = %id, status = %removed.status, "deleted");
        Ok(removed)
    }
}
