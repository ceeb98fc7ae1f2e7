use crate::core::week;
use crate::errors::{AppError, AppResult};
use crate::models::day_entry::DayEntry;
use crate::models::status::TimesheetStatus;
use crate::models::timesheet::{TimesheetId, TimesheetRecord, WeekEntries};
use crate::utils::date;
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

const SELECT_TIMESHEET: &str = "SELECT id, client, manager, week_start, status, entries_json, created_at, updated_at
     FROM timesheets";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<TimesheetRecord> {
    let id: i64 = row.get("id")?;
    let start_str: String = row.get("week_start")?;
    let status_str: String = row.get("status")?;
    let entries_str: String = row.get("entries_json")?;

    let start_date = date::parse_date(&start_str)
        .ok_or_else(|| conversion_error(3, AppError::InvalidDate(start_str.clone())))?;

    let status = TimesheetStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(4, AppError::InvalidStatus(status_str.clone())))?;

    let entries: Vec<DayEntry> = serde_json::from_str(&entries_str)
        .map_err(|e| conversion_error(5, AppError::Serialization(e)))?;

    let entry_count = entries.len();
    let entries: WeekEntries = entries.try_into().map_err(|_| {
        conversion_error(
            5,
            AppError::CorruptRecord(format!("timesheet {id} holds {entry_count} entries instead of 7")),
        )
    })?;

    Ok(TimesheetRecord {
        id: TimesheetId(id as u64),
        start_date,
        client: row.get("client")?,
        manager: row.get("manager")?,
        entries,
        status,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// All timesheets, newest first.
///
/// A row whose stored days do not run from its `week_start` is reported as
/// `CorruptRecord` instead of being loaded.
pub fn load_timesheets(conn: &Connection) -> AppResult<Vec<TimesheetRecord>> {
    let mut stmt = conn.prepare(&format!("{SELECT_TIMESHEET} ORDER BY id DESC"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        let record = r?;
        week::check_grid(record.start_date, &record.entries).map_err(|e| {
            AppError::CorruptRecord(format!("timesheet {}: {}", record.id, inner_message(e)))
        })?;
        out.push(record);
    }
    Ok(out)
}

fn inner_message(err: AppError) -> String {
    match err {
        AppError::CorruptRecord(msg) => msg,
        other => other.to_string(),
    }
}

/// Insert or overwrite by id. The listing columns are recomputed from the record.
pub fn upsert_timesheet(conn: &Connection, record: &TimesheetRecord) -> AppResult<()> {
    let entries_json = serde_json::to_string(&record.entries)?;

    conn.execute(
        "INSERT INTO timesheets
            (id, client, manager, week_start, week_end, total_hours, status, entries_json, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
         ON CONFLICT(id) DO UPDATE SET
            client       = excluded.client,
            manager      = excluded.manager,
            week_start   = excluded.week_start,
            week_end     = excluded.week_end,
            total_hours  = excluded.total_hours,
            status       = excluded.status,
            entries_json = excluded.entries_json,
            updated_at   = excluded.updated_at",
        params![
            record.id.0 as i64,
            record.client,
            record.manager,
            date::iso(record.start_date),
            date::iso(record.end_date()),
            record.total_hours().as_f64(),
            record.status.to_db_str(),
            entries_json,
            record.created_at,
            record.updated_at,
        ],
    )?;
    Ok(())
}

/// Returns the number of rows touched (0 when the id is unknown).
pub fn update_status(conn: &Connection, id: TimesheetId, status: TimesheetStatus) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE timesheets SET status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id.0 as i64],
    )?;
    Ok(n)
}

/// Returns the number of rows deleted (0 when the id is unknown).
pub fn delete_timesheet(conn: &Connection, id: TimesheetId) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM timesheets WHERE id = ?1", [id.0 as i64])?;
    Ok(n)
}
