use super::show::print_record;
use super::{open_service, require_draft};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date;

/// Load a draft, apply the requested changes, then save or submit it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        start,
        client,
        manager,
        set,
        submit,
    } = cmd
    {
        let mut service = open_service(cfg)?;
        require_draft(&service, *id)?;

        let mut draft = service.load_for_edit(*id)?;

        if let Some(s) = start {
            let new_start = date::parse_date_strict(s)?;
            if new_start != draft.start_date() {
                warning(format!(
                    "Week moved to {}: all days have been cleared.",
                    date::iso(new_start)
                ));
            }
            draft.set_start_date(new_start)?;
        }
        if let Some(c) = client {
            draft.set_client(c.as_str());
        }
        if let Some(m) = manager {
            draft.set_manager(m.as_str());
        }
        for patch in set {
            patch.apply(&mut draft)?;
        }

        let record = if *submit {
            let r = service.submit(&draft)?;
            success(format!("Timesheet {} submitted for approval", r.id));
            r
        } else {
            let r = service.save(&draft)?;
            service.cancel_edit();
            success(format!("Draft {} updated", r.id));
            r
        };

        print_record(&record);
    }
    Ok(())
}
