//! Date helpers shared by the week grid, the CLI and the exporters.
//! Names come from fixed English tables so the output never depends on the
//! host locale.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Weekday names indexed by days from Sunday (Sunday = 0).
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Short month names indexed by month0.
pub const MONTH_SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Like [`parse_date`], reporting the offending input.
pub fn parse_date_strict(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Day of week with Sunday = 0 … Saturday = 6.
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[day_of_week(date) as usize]
}

pub fn month_short_name(date: NaiveDate) -> &'static str {
    MONTH_SHORT_NAMES[date.month0() as usize]
}

/// "Monday, 01 Jan 2024"
pub fn display_date(date: NaiveDate) -> String {
    format!(
        "{}, {:02} {} {}",
        weekday_name(date),
        date.day(),
        month_short_name(date),
        date.year()
    )
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(day_of_week(date), 0 | 6)
}

pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_fixed_tables() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(display_date(d), "Monday, 01 Jan 2024");

        let d = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(display_date(d), "Sunday, 31 Dec 2023");
    }

    #[test]
    fn flags_saturday_and_sunday_only() {
        let sat = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        let sun = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let mon = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        let fri = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();

        assert!(is_weekend(sat));
        assert!(is_weekend(sun));
        assert!(!is_weekend(mon));
        assert!(!is_weekend(fri));
    }
}
