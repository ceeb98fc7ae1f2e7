use rusqlite::{Connection, OptionalExtension, Result};
use tracing::{debug, info};

/// A schema step, applied once and recorded in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20251015_0001_create_timesheets",
        description: "Created timesheets table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS timesheets (
            id           INTEGER PRIMARY KEY,
            client       TEXT NOT NULL DEFAULT '',
            manager      TEXT NOT NULL DEFAULT '',
            week_start   TEXT NOT NULL,
            week_end     TEXT NOT NULL,
            total_hours  REAL NOT NULL DEFAULT 0,
            status       TEXT NOT NULL DEFAULT 'draft'
                         CHECK(status IN ('draft','submitted','approved','rejected')),
            entries_json TEXT NOT NULL,
            created_at   TEXT NOT NULL,
            updated_at   TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20251015_0002_timesheets_indexes",
        description: "Added week/status indexes to timesheets",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_timesheets_week_start ON timesheets(week_start);
        CREATE INDEX IF NOT EXISTS idx_timesheets_status ON timesheets(status);
        "#,
    },
];

/// Ensure that the `log` table exists. It also records applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()
}

/// Public entry point: run all pending migrations.
///
/// Invoked by `SqliteBackend` whenever a database is opened.
/// Returns how many migrations were applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            debug!(version = m.version, "migration already applied");
            continue;
        }

        apply(conn, m)?;
        info!(version = m.version, description = m.description, "migration applied");
        applied += 1;
    }

    Ok(applied)
}
