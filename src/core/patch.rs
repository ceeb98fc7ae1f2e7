//! Command-line edits of single grid rows: `SEL=HOURS[:DESCRIPTION]`.

use crate::errors::{AppError, AppResult};
use crate::models::hours::Hours;
use crate::models::timesheet::{DAYS_PER_WEEK, TimesheetDraft};
use crate::utils::date;
use chrono::{Datelike, NaiveDate, Weekday};
use std::str::FromStr;

/// Which row of the week a patch targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySelector {
    /// 1-based position in the grid
    Index(usize),
    Date(NaiveDate),
    Weekday(Weekday),
}

impl FromStr for DaySelector {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let s = s.trim();

        if let Ok(n) = s.parse::<usize>() {
            if (1..=DAYS_PER_WEEK).contains(&n) {
                return Ok(DaySelector::Index(n));
            }
            return Err(AppError::InvalidDay(s.to_string()));
        }

        if let Some(d) = date::parse_date(s) {
            return Ok(DaySelector::Date(d));
        }

        s.parse::<Weekday>()
            .map(DaySelector::Weekday)
            .map_err(|_| AppError::InvalidDay(s.to_string()))
    }
}

impl DaySelector {
    /// Zero-based row index inside `draft`.
    pub fn resolve(&self, draft: &TimesheetDraft) -> AppResult<usize> {
        match self {
            DaySelector::Index(n) => Ok(n - 1),
            DaySelector::Date(d) => draft.index_of(*d).ok_or_else(|| {
                AppError::InvalidDay(format!(
                    "{} is outside the week {} → {}",
                    date::iso(*d),
                    date::iso(draft.entries()[0].date),
                    date::iso(draft.entries()[DAYS_PER_WEEK - 1].date)
                ))
            }),
            DaySelector::Weekday(w) => draft
                .entries()
                .iter()
                .position(|e| e.date.weekday() == *w)
                .ok_or_else(|| AppError::InvalidDay(w.to_string())),
        }
    }
}

/// One `--set` argument.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryPatch {
    pub day: DaySelector,
    pub hours: Hours,
    pub description: Option<String>,
}

impl FromStr for EntryPatch {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let (sel, rest) = s
            .split_once('=')
            .ok_or_else(|| AppError::InvalidDay(format!("expected DAY=HOURS[:DESCRIPTION], got '{s}'")))?;

        let (hours, description) = match rest.split_once(':') {
            Some((h, d)) => (h, Some(d.trim().to_string())),
            None => (rest, None),
        };

        Ok(Self {
            day: sel.parse()?,
            hours: hours.parse()?,
            description,
        })
    }
}

impl EntryPatch {
    /// Writes hours (and the description, when given) into the targeted row.
    pub fn apply(&self, draft: &mut TimesheetDraft) -> AppResult<()> {
        let idx = self.day.resolve(draft)?;
        draft.set_entry(idx, self.hours, self.description.as_deref())
    }
}
