use super::hours::Hours;
use crate::utils::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of a weekly timesheet.
///
/// The human readable date is always derived from `date`, it is not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub hours: Hours,
    #[serde(default)]
    pub description: String,
}

impl DayEntry {
    /// Empty entry: zero hours, no description.
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            date,
            hours: Hours::ZERO,
            description: String::new(),
        }
    }

    pub fn display_date(&self) -> String {
        date::display_date(self.date)
    }

    pub fn weekday_name(&self) -> &'static str {
        date::weekday_name(self.date)
    }

    pub fn is_weekend(&self) -> bool {
        date::is_weekend(self.date)
    }

    /// Logged hours with nothing written about them.
    pub fn lacks_description(&self) -> bool {
        !self.hours.is_zero() && self.description.trim().is_empty()
    }
}
