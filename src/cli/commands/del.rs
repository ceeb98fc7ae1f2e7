use super::{open_service, require_draft};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut service = open_service(cfg)?;
        let record = require_draft(&service, *id)?;

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete draft {} for the week of {}? This action is irreversible.",
            record.id, record.start_date
        );

        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = service.delete(*id)?;
        success(format!("Draft {} has been deleted.", removed.id));
    }

    Ok(())
}
