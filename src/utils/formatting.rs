//! Formatting utilities used for CLI outputs.

use chrono::NaiveDate;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Left-align `s` in `width` terminal columns (wide chars count double).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Right-align `s` in `width` terminal columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}

/// "2024-01-01 → 2024-01-07"
pub fn week_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} → {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d"))
}

/// Hours with two decimals, the way totals are printed everywhere.
pub fn hours2readable(hours: f64) -> String {
    format!("{:.2}h", hours)
}
