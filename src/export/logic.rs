// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::html::export_document;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::notify_export_success;
use crate::models::timesheet::TimesheetRecord;
use crate::ui::messages::info;
use std::fs;
use std::path::{Path, PathBuf};

/// High level export of a single timesheet.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `record` to `path` in the requested format.
    ///
    /// - `company`: heading of the HTML document
    /// - `force`: replace an existing file without asking
    pub fn export(
        record: &TimesheetRecord,
        format: &ExportFormat,
        path: &Path,
        company: &str,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Html => export_html(record, path, company)?,
            ExportFormat::Json => export_json(record, path)?,
            ExportFormat::Csv => export_csv(record, path)?,
        }

        Ok(())
    }
}

fn export_html(record: &TimesheetRecord, path: &Path, company: &str) -> AppResult<()> {
    info(format!("Exporting to HTML: {}", path.display()));
    fs::write(path, export_document(record, company)?)?;
    notify_export_success("HTML", path);
    Ok(())
}

/// `<prefix>-<MMDDYY of week start>.<ext>`, e.g. `Claris-TS-010124.html`.
pub fn default_file_name(record: &TimesheetRecord, prefix: &str, format: &ExportFormat) -> PathBuf {
    PathBuf::from(format!(
        "{}-{}.{}",
        prefix,
        record.start_date.format("%m%d%y"),
        format.extension()
    ))
}
