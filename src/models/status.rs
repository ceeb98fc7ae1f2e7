use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a timesheet in its approval lifecycle.
///
/// Only `Draft` and `Submitted` are produced locally; `Approved` and
/// `Rejected` are assigned by the approver and are stored as received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimesheetStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl TimesheetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimesheetStatus::Draft => "Draft",
            TimesheetStatus::Submitted => "Submitted",
            TimesheetStatus::Approved => "Approved",
            TimesheetStatus::Rejected => "Rejected",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            TimesheetStatus::Draft => "draft",
            TimesheetStatus::Submitted => "submitted",
            TimesheetStatus::Approved => "approved",
            TimesheetStatus::Rejected => "rejected",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(TimesheetStatus::Draft),
            "submitted" => Some(TimesheetStatus::Submitted),
            "approved" => Some(TimesheetStatus::Approved),
            "rejected" => Some(TimesheetStatus::Rejected),
            _ => None,
        }
    }

    /// Helper: parse user input (any case)
    pub fn parse(input: &str) -> AppResult<Self> {
        Self::from_db_str(&input.trim().to_lowercase())
            .ok_or_else(|| AppError::InvalidStatus(input.to_string()))
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, TimesheetStatus::Draft)
    }
}

impl fmt::Display for TimesheetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
