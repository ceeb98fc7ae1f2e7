//! Weekly grid generation.
//!
//! A timesheet covers seven consecutive calendar days starting at any date;
//! callers conventionally pass a Monday but nothing here relies on it.

use crate::errors::{AppError, AppResult};
use crate::models::day_entry::DayEntry;
use crate::models::timesheet::{DAYS_PER_WEEK, WeekEntries};
use crate::utils::date;
use chrono::{Days, Duration, NaiveDate};

/// Seven blank entries, one per day from `start_date` on.
///
/// Value-equal for equal inputs, so the grid can be regenerated whenever the
/// start date changes. Fails only when the week runs past the calendar range.
pub fn generate(start_date: NaiveDate) -> AppResult<WeekEntries> {
    start_date
        .checked_add_days(Days::new(DAYS_PER_WEEK as u64 - 1))
        .ok_or_else(|| AppError::InvalidDate(date::iso(start_date)))?;

    Ok(std::array::from_fn(|i| {
        DayEntry::blank(start_date + Days::new(i as u64))
    }))
}

/// Same as [`generate`] for a `YYYY-MM-DD` string.
pub fn generate_from_str(start_date: &str) -> AppResult<WeekEntries> {
    generate(date::parse_date_strict(start_date)?)
}

/// Checks that `entries` are the seven consecutive days from `start_date`.
///
/// Buffers built through `TimesheetDraft` always pass; records coming from
/// storage or assembled by hand may not.
pub fn check_grid(start_date: NaiveDate, entries: &[DayEntry]) -> AppResult<()> {
    if entries.len() != DAYS_PER_WEEK {
        return Err(AppError::CorruptRecord(format!(
            "week of {} holds {} days instead of {}",
            date::iso(start_date),
            entries.len(),
            DAYS_PER_WEEK
        )));
    }

    for (i, entry) in entries.iter().enumerate() {
        let expected = start_date.checked_add_days(Days::new(i as u64));
        if expected != Some(entry.date) {
            return Err(AppError::CorruptRecord(format!(
                "day {} of the week of {} is {}",
                i + 1,
                date::iso(start_date),
                date::iso(entry.date)
            )));
        }
    }

    Ok(())
}

/// Monday of the week holding `day`.
///
/// Sunday counts as the seventh day of the span that began the previous
/// Monday, so it maps six days back rather than one day forward. Fails with
/// `InvalidDate` when that Monday lies before the first representable date.
pub fn monday_of(day: NaiveDate) -> AppResult<NaiveDate> {
    let dow = date::day_of_week(day) as i64; // Sunday = 0
    let offset = if dow == 0 { -6 } else { 1 - dow };

    day.checked_add_signed(Duration::days(offset))
        .ok_or_else(|| AppError::InvalidDate(date::iso(day)))
}

pub fn current_week_monday() -> AppResult<NaiveDate> {
    monday_of(date::today())
}
