use super::{open_service, require_draft};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::hours2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit { id } = cmd {
        let mut service = open_service(cfg)?;
        require_draft(&service, *id)?;

        let draft = service.load_for_edit(*id)?;
        let record = service.submit(&draft)?;

        success(format!(
            "Timesheet {} submitted for approval ({})",
            record.id,
            hours2readable(record.total_hours().as_f64())
        ));
    }
    Ok(())
}
