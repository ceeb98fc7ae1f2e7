//! Lifecycle store coupled with its persistence backend.

use crate::core::backend::TimesheetBackend;
use crate::core::store::TimesheetStore;
use crate::errors::{AppError, AppResult};
use crate::models::timesheet::{TimesheetDraft, TimesheetId, TimesheetRecord};
use chrono::NaiveDate;
use tracing::{info, warn};

/// Runs every store operation and mirrors its outcome to the backend.
///
/// A backend failure is reported as `RemoteFailure` and the in-memory store
/// is restored to what it was before the operation.
pub struct TimesheetService<B: TimesheetBackend> {
    store: TimesheetStore,
    backend: B,
}

fn remote(err: AppError) -> AppError {
    match err {
        AppError::RemoteFailure(_) => err,
        other => AppError::RemoteFailure(other.to_string()),
    }
}

impl<B: TimesheetBackend> TimesheetService<B> {
    /// Loads the backend history into a fresh store.
    pub fn open(mut backend: B) -> AppResult<Self> {
        let records = backend.load_all().map_err(remote)?;
        info!(count = records.len(), "loaded timesheet history");
        Ok(Self {
            store: TimesheetStore::with_records(records),
            backend,
        })
    }

    pub fn store(&self) -> &TimesheetStore {
        &self.store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    fn apply<F, R>(&mut self, op: F, sync: R) -> AppResult<TimesheetRecord>
    where
        F: FnOnce(&mut TimesheetStore) -> AppResult<TimesheetRecord>,
        R: FnOnce(&mut B, &TimesheetRecord) -> AppResult<()>,
    {
        let snapshot = self.store.clone();
        let record = op(&mut self.store)?;

        if let Err(e) = sync(&mut self.backend, &record) {
            warn!(id = %record.id, error = %e, "backend rejected change, rolling back");
            self.store = snapshot;
            return Err(remote(e));
        }

        Ok(record)
    }

    pub fn create(
        &mut self,
        start_date: NaiveDate,
        client: &str,
        manager: &str,
    ) -> AppResult<TimesheetRecord> {
        self.apply(
            |store| store.create(start_date, client, manager),
            |backend, record| backend.create_or_update(record).map(|_| ()),
        )
    }

    pub fn load_for_edit(&mut self, id: TimesheetId) -> AppResult<TimesheetDraft> {
        self.store.load_for_edit(id)
    }

    pub fn save(&mut self, draft: &TimesheetDraft) -> AppResult<TimesheetRecord> {
        self.apply(
            |store| store.save(draft),
            |backend, record| backend.create_or_update(record).map(|_| ()),
        )
    }

    pub fn validate(&self, draft: &TimesheetDraft) -> AppResult<()> {
        self.store.validate(draft)
    }

    /// Stores the final content, then asks the backend to submit it.
    pub fn submit(&mut self, draft: &TimesheetDraft) -> AppResult<TimesheetRecord> {
        self.apply(
            |store| store.submit(draft),
            |backend, record| {
                let id = backend.create_or_update(record)?;
                backend.submit(id)
            },
        )
    }

    pub fn cancel_edit(&mut self) {
        self.store.cancel_edit();
    }

    pub fn delete(&mut self, id: TimesheetId) -> AppResult<TimesheetRecord> {
        self.apply(
            |store| store.delete(id),
            |backend, record| backend.delete(record.id),
        )
    }
}
