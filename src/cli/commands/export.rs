use super::open_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportLogic, default_file_name};
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        id,
        format,
        file,
        force,
    } = cmd
    {
        let service = open_service(cfg)?;
        let record = service.store().get(*id).ok_or(AppError::NotFound(*id))?;

        let path = match file {
            Some(f) => PathBuf::from(f),
            None => default_file_name(record, &cfg.export_prefix, format),
        };

        ExportLogic::export(record, format, &path, &cfg.company_name, *force)?;

        service.backend().audit(
            "export",
            &record.id.to_string(),
            &format!("{} → {}", format.as_str(), path.display()),
        );
    }
    Ok(())
}
