// src/export/model.rs

use crate::models::timesheet::TimesheetRecord;
use crate::utils::date;
use serde::Serialize;

/// One CSV row: a day of a timesheet with its parent's identity.
#[derive(Serialize, Clone, Debug)]
pub struct EntryRow {
    pub id: u64,
    pub status: String,
    pub client: String,
    pub manager: String,
    pub date: String,
    pub day: String,
    pub hours: f64,
    pub description: String,
    pub is_weekend: bool,
}

/// A day as shown in the JSON document, derived fields included.
#[derive(Serialize, Clone, Debug)]
pub struct EntryView {
    pub date: String,
    pub display_date: String,
    pub hours: f64,
    pub description: String,
    pub is_weekend: bool,
}

/// Whole-timesheet JSON document.
#[derive(Serialize, Clone, Debug)]
pub struct TimesheetExport {
    pub id: u64,
    pub status: String,
    pub client: String,
    pub manager: String,
    pub week_start: String,
    pub week_end: String,
    pub total_hours: f64,
    pub created_at: String,
    pub updated_at: String,
    pub entries: Vec<EntryView>,
}

impl From<&TimesheetRecord> for TimesheetExport {
    fn from(r: &TimesheetRecord) -> Self {
        Self {
            id: r.id.0,
            status: r.status.to_string(),
            client: r.client.clone(),
            manager: r.manager.clone(),
            week_start: date::iso(r.start_date),
            week_end: date::iso(r.end_date()),
            total_hours: r.total_hours().as_f64(),
            created_at: r.created_at.clone(),
            updated_at: r.updated_at.clone(),
            entries: r
                .entries
                .iter()
                .map(|e| EntryView {
                    date: date::iso(e.date),
                    display_date: e.display_date(),
                    hours: e.hours.as_f64(),
                    description: e.description.clone(),
                    is_weekend: e.is_weekend(),
                })
                .collect(),
        }
    }
}

pub(crate) fn record_to_rows(r: &TimesheetRecord) -> Vec<EntryRow> {
    r.entries
        .iter()
        .map(|e| EntryRow {
            id: r.id.0,
            status: r.status.to_string(),
            client: r.client.clone(),
            manager: r.manager.clone(),
            date: date::iso(e.date),
            day: e.weekday_name().to_string(),
            hours: e.hours.as_f64(),
            description: e.description.clone(),
            is_weekend: e.is_weekend(),
        })
        .collect()
}
