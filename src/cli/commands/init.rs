use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::SqliteBackend;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with all pending migrations
///
/// `cfg.database` already carries the resolved `--db` path, so `init`
/// prepares the same file every later command opens.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let override_db = cli.db.as_ref().map(|_| cfg.database.as_str());
    let cfg = Config::init_all(override_db, cli.test)?;

    info("Initializing rTimesheet…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", cfg.database));

    let (backend, applied) = SqliteBackend::open_migrated(&cfg.database)?;
    if applied > 0 {
        success(format!("Applied {applied} database migration(s)."));
    } else {
        info("Database schema is up to date.");
    }

    backend.audit(
        "init",
        "database",
        &format!("Database initialized at {}", cfg.database),
    );

    success("rTimesheet initialization completed!");
    Ok(())
}
