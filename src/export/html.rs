// src/export/html.rs

use crate::errors::{AppError, AppResult};
use crate::models::timesheet::TimesheetRecord;
use crate::utils::date;
use askama::Template;

/// One table row of the printable document.
#[derive(Debug, Clone)]
pub struct DocumentRow {
    pub date: String,
    pub display_date: String,
    pub hours: String,
    pub description: String,
    pub weekend: bool,
}

/// Printable timesheet, rendered from `templates/timesheet.html`.
#[derive(Template, Debug)]
#[template(path = "timesheet.html")]
pub struct TimesheetDocument<'a> {
    pub company: &'a str,
    pub id: String,
    pub client: &'a str,
    pub manager: &'a str,
    pub status: &'static str,
    pub week_start: String,
    pub week_end: String,
    pub rows: Vec<DocumentRow>,
    pub total: String, // two decimals
}

impl<'a> TimesheetDocument<'a> {
    pub fn new(record: &'a TimesheetRecord, company: &'a str) -> Self {
        Self {
            company,
            id: record.id.to_string(),
            client: &record.client,
            manager: &record.manager,
            status: record.status.as_str(),
            week_start: date::iso(record.start_date),
            week_end: date::iso(record.end_date()),
            rows: record
                .entries
                .iter()
                .map(|e| DocumentRow {
                    date: date::iso(e.date),
                    display_date: e.display_date(),
                    hours: e.hours.to_string(),
                    description: e.description.clone(),
                    weekend: e.is_weekend(),
                })
                .collect(),
            total: format!("{:.2}", record.total_hours().as_f64()),
        }
    }
}

/// Printable, self-contained HTML rendition of a timesheet.
///
/// Left column: every day with its hours, weekend rows flagged. Right column:
/// the day's description. The footer carries the record's total. Output is
/// a pure function of the inputs.
pub fn export_document(record: &TimesheetRecord, company: &str) -> AppResult<String> {
    TimesheetDocument::new(record, company)
        .render()
        .map_err(|e| AppError::Export(format!("HTML template render error: {e}")))
}
