use super::day_entry::DayEntry;
use super::hours::{Hours, TotalHours};
use super::status::TimesheetStatus;
use crate::core::week;
use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days covered by one timesheet.
pub const DAYS_PER_WEEK: usize = 7;

/// The fixed 7-day grid owned by a timesheet.
pub type WeekEntries = [DayEntry; DAYS_PER_WEEK];

/// Opaque timesheet identifier, minted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimesheetId(pub u64);

impl fmt::Display for TimesheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl std::str::FromStr for TimesheetId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(TimesheetId)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetRecord {
    pub id: TimesheetId,
    pub start_date: NaiveDate,
    pub client: String,
    pub manager: String,
    pub entries: WeekEntries,
    pub status: TimesheetStatus,
    pub created_at: String, // RFC 3339, local time
    pub updated_at: String, // RFC 3339, local time
}

impl TimesheetRecord {
    /// Builds a record from an editing buffer, stamping both timestamps with now.
    pub fn from_draft(id: TimesheetId, draft: &TimesheetDraft, status: TimesheetStatus) -> Self {
        let now = Local::now().to_rfc3339();
        Self {
            id,
            start_date: draft.start_date,
            client: draft.client.clone(),
            manager: draft.manager.clone(),
            entries: draft.entries.clone(),
            status,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Overwrite the editable fields, keeping id, status and creation time.
    pub fn apply_draft(&mut self, draft: &TimesheetDraft) {
        self.start_date = draft.start_date;
        self.client = draft.client.clone();
        self.manager = draft.manager.clone();
        self.entries = draft.entries.clone();
        self.updated_at = Local::now().to_rfc3339();
    }

    pub fn end_date(&self) -> NaiveDate {
        self.entries[DAYS_PER_WEEK - 1].date
    }

    /// Always recomputed from the entries.
    pub fn total_hours(&self) -> TotalHours {
        self.entries.iter().map(|e| &e.hours).sum()
    }

    pub fn is_draft(&self) -> bool {
        self.status.is_draft()
    }
}

/// Editable copy of a timesheet: what the user is filling in.
///
/// The grid always holds the seven days from `start_date`; it is only
/// reachable through the setters below.
#[derive(Debug, Clone, PartialEq)]
pub struct TimesheetDraft {
    start_date: NaiveDate,
    client: String,
    manager: String,
    entries: WeekEntries,
}

impl TimesheetDraft {
    /// Fresh buffer with an empty grid starting at `start_date`.
    pub fn new(
        start_date: NaiveDate,
        client: impl Into<String>,
        manager: impl Into<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            start_date,
            client: client.into(),
            manager: manager.into(),
            entries: week::generate(start_date)?,
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn client(&self) -> &str {
        &self.client
    }

    pub fn manager(&self) -> &str {
        &self.manager
    }

    pub fn entries(&self) -> &WeekEntries {
        &self.entries
    }

    pub fn set_client(&mut self, client: impl Into<String>) {
        self.client = client.into();
    }

    pub fn set_manager(&mut self, manager: impl Into<String>) {
        self.manager = manager.into();
    }

    /// Moves the sheet to another week. The grid is regenerated, so hours
    /// and descriptions typed for the old week are dropped.
    pub fn set_start_date(&mut self, start_date: NaiveDate) -> AppResult<()> {
        if start_date != self.start_date {
            self.entries = week::generate(start_date)?;
            self.start_date = start_date;
        }
        Ok(())
    }

    pub fn set_entry(
        &mut self,
        index: usize,
        hours: Hours,
        description: Option<&str>,
    ) -> AppResult<()> {
        let entry = self
            .entries
            .get_mut(index)
            .ok_or_else(|| AppError::InvalidDay(format!("day index {}", index + 1)))?;

        entry.hours = hours;
        if let Some(desc) = description {
            entry.description = desc.to_string();
        }
        Ok(())
    }

    pub fn from_record(record: &TimesheetRecord) -> Self {
        Self {
            start_date: record.start_date,
            client: record.client.clone(),
            manager: record.manager.clone(),
            entries: record.entries.clone(),
        }
    }

    pub fn total_hours(&self) -> TotalHours {
        self.entries.iter().map(|e| &e.hours).sum()
    }

    /// Position of `date` inside the week, if covered.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.entries.iter().position(|e| e.date == date)
    }
}
