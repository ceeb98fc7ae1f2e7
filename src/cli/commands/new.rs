use super::open_service;
use super::show::print_record;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::week;
use crate::errors::AppResult;
use crate::models::timesheet::TimesheetDraft;
use crate::ui::messages::success;
use crate::utils::date;

/// Create a timesheet: an empty draft, a filled draft, or a direct submission.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::New {
        start,
        client,
        manager,
        set,
        submit,
    } = cmd
    {
        //
        // 1. Resolve the week and the header fields
        //
        let start_date = match start {
            Some(s) => date::parse_date_strict(s)?,
            None => week::current_week_monday()?,
        };
        let client = client.as_deref().unwrap_or(cfg.default_client.as_str());
        let manager = manager.as_deref().unwrap_or(cfg.default_manager.as_str());

        let mut service = open_service(cfg)?;

        //
        // 2. Nothing to fill in → plain empty draft
        //
        if set.is_empty() && !*submit {
            let record = service.create(start_date, client, manager)?;
            success(format!("Saved draft {}", record.id));
            print_record(&record);
            return Ok(());
        }

        //
        // 3. Fill the buffer, then save or submit it
        //
        let mut draft = TimesheetDraft::new(start_date, client, manager)?;
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
            success(format!("Saved draft {}", r.id));
            r
        };

        print_record(&record);
    }
    Ok(())
}
