use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::week;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::GREY;
use crate::utils::date;
use crate::utils::formatting::week_range;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Week { start } = cmd {
        let start = match start {
            Some(s) => date::parse_date_strict(s)?,
            None => week::current_week_monday()?,
        };

        let grid = week::generate(start)?;

        header(format!("Week {}", week_range(grid[0].date, grid[6].date)));

        let mut table = Table::new(vec![
            Column::new("#", 1),
            Column::new("Date", 10),
            Column::new("Day", 24),
        ]);

        for (i, e) in grid.iter().enumerate() {
            let cells = vec![(i + 1).to_string(), date::iso(e.date), e.display_date()];
            if e.is_weekend() {
                table.add_colored_row(cells, GREY);
            } else {
                table.add_row(cells);
            }
        }

        print!("{}", table.render());
    }
    Ok(())
}
