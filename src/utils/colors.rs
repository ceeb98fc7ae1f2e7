/// ANSI color helper utilities for terminal output.
use crate::models::status::TimesheetStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

pub fn color_for_status(status: TimesheetStatus) -> &'static str {
    match status {
        TimesheetStatus::Draft => YELLOW,
        TimesheetStatus::Submitted => CYAN,
        TimesheetStatus::Approved => GREEN,
        TimesheetStatus::Rejected => RED,
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
