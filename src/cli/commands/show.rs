use super::open_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::timesheet::TimesheetRecord;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, color_for_status, colorize};
use crate::utils::formatting::{bold, hours2readable, week_range};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let service = open_service(cfg)?;
        let record = service.store().get(*id).ok_or(AppError::NotFound(*id))?;
        print_record(record);
    }
    Ok(())
}

/// Header lines plus the 7-day grid of a timesheet.
pub(crate) fn print_record(record: &TimesheetRecord) {
    header(format!(
        "Timesheet {} ({})",
        record.id,
        week_range(record.start_date, record.end_date())
    ));

    println!("Customer : {}", record.client);
    println!("Manager  : {}", record.manager);
    println!(
        "Status   : {}",
        colorize(record.status.as_str(), color_for_status(record.status))
    );
    println!("Updated  : {}", record.updated_at);
    println!();

    let mut table = Table::new(vec![
        Column::new("Day", 24),
        Column::new("Hours", 5).right(),
        Column::new("Description", 60),
    ]);

    for e in &record.entries {
        let cells = vec![e.display_date(), e.hours.to_string(), e.description.clone()];
        if e.is_weekend() {
            table.add_colored_row(cells, GREY);
        } else {
            table.add_row(cells);
        }
    }

    print!("{}", table.render());
    println!(
        "\n{} {}",
        bold("Total:"),
        hours2readable(record.total_hours().as_f64())
    );
}
