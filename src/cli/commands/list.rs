use super::open_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::status::TimesheetStatus;
use crate::ui::messages::{header, info};
use crate::utils::colors::color_for_status;
use crate::utils::formatting::{hours2readable, week_range};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { status } = cmd {
        let filter = status.as_deref().map(TimesheetStatus::parse).transpose()?;

        let service = open_service(cfg)?;
        let rows: Vec<_> = service
            .store()
            .history()
            .filter(|r| filter.is_none_or(|s| r.status == s))
            .collect();

        if rows.is_empty() {
            info("No timesheets found.");
            return Ok(());
        }

        header("Timesheet history");

        let mut table = Table::new(vec![
            Column::new("#", 6).right(),
            Column::new("Week", 23),
            Column::new("Customer", 30),
            Column::new("Total", 8).right(),
            Column::new("Status", 9),
        ]);

        for r in rows {
            table.add_colored_row(
                vec![
                    r.id.0.to_string(),
                    week_range(r.start_date, r.end_date()),
                    r.client.clone(),
                    hours2readable(r.total_hours().as_f64()),
                    r.status.to_string(),
                ],
                color_for_status(r.status),
            );
        }

        print!("{}", table.render());
    }
    Ok(())
}
