//! Pre-submission checks on an editing buffer.

use crate::errors::{AppError, AppResult};
use crate::models::timesheet::TimesheetDraft;

/// Checks run before a sheet may be submitted.
///
/// Rules are applied in order and only the first failure is reported:
/// 1. the week must carry some hours (`ZeroHours`);
/// 2. every day with hours needs a non-blank description (`MissingDescription`).
pub fn validate(draft: &TimesheetDraft) -> AppResult<()> {
    if draft.total_hours().is_zero() {
        return Err(AppError::ZeroHours);
    }

    if let Some(entry) = draft.entries().iter().find(|e| e.lacks_description()) {
        return Err(AppError::MissingDescription(entry.date));
    }

    Ok(())
}
