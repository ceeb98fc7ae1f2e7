pub mod day_entry;
pub mod hours;
pub mod status;
pub mod timesheet;

pub use day_entry::DayEntry;
pub use hours::{Hours, TotalHours};
pub use status::TimesheetStatus;
pub use timesheet::{TimesheetDraft, TimesheetId, TimesheetRecord, WeekEntries};
