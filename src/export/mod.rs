// src/export/mod.rs

mod fs_utils;
pub mod html;
mod json_csv;
pub mod logic;
pub mod model;

pub use html::export_document;
pub use logic::{ExportLogic, default_file_name};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Html,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}
