// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{TimesheetExport, record_to_rows};
use crate::export::notify_export_success;
use crate::models::timesheet::TimesheetRecord;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed, derived fields included.
pub(crate) fn export_json(record: &TimesheetRecord, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&TimesheetExport::from(record))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, one row per day (header included thanks to serde).
pub(crate) fn export_csv(record: &TimesheetRecord, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in record_to_rows(record) {
        wtr.serialize(&row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
