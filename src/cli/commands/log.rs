use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::SqliteBackend;
use crate::db::log::load_log;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { .. } = cmd {
        let mut backend = SqliteBackend::open(&cfg.database)?;
        let lines = load_log(backend.pool_mut())?;

        if lines.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        header("Internal log");

        let mut table = Table::new(vec![
            Column::new("Date", 25),
            Column::new("Operation", 17),
            Column::new("Target", 32),
            Column::new("Message", 50),
        ]);
        for l in lines {
            table.add_row(vec![l.date, l.operation, l.target, l.message]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
