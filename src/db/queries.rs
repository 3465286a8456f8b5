use crate::errors::{AppError, AppResult};
use crate::models::RawDayRecord;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_COLUMNS: &str = "SELECT date, clock_in, lunch_out, lunch_in, clock_out,
        remote_start, remote_end, note, manual_override, remote_day
     FROM records";

pub fn map_row(row: &Row) -> Result<RawDayRecord> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(RawDayRecord {
        date,
        clock_in: row.get("clock_in")?,
        lunch_out: row.get("lunch_out")?,
        lunch_in: row.get("lunch_in")?,
        clock_out: row.get("clock_out")?,
        remote_start: row.get("remote_start")?,
        remote_end: row.get("remote_end")?,
        note: row.get::<_, Option<String>>("note")?.unwrap_or_default(),
        is_manual_override: row.get::<_, i32>("manual_override")? == 1,
        is_remote_day: row.get::<_, i32>("remote_day")? == 1,
    })
}

/// Insert or replace the record for its date. Last write wins.
pub fn upsert_record(conn: &Connection, rec: &RawDayRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO records (date, clock_in, lunch_out, lunch_in, clock_out,
                              remote_start, remote_end, note, manual_override,
                              remote_day, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
         ON CONFLICT(date) DO UPDATE SET
             clock_in        = excluded.clock_in,
             lunch_out       = excluded.lunch_out,
             lunch_in        = excluded.lunch_in,
             clock_out       = excluded.clock_out,
             remote_start    = excluded.remote_start,
             remote_end      = excluded.remote_end,
             note            = excluded.note,
             manual_override = excluded.manual_override,
             remote_day      = excluded.remote_day,
             updated_at      = excluded.updated_at",
        params![
            rec.date_str(),
            rec.clock_in,
            rec.lunch_out,
            rec.lunch_in,
            rec.clock_out,
            rec.remote_start,
            rec.remote_end,
            rec.note,
            if rec.is_manual_override { 1 } else { 0 },
            if rec.is_remote_day { 1 } else { 0 },
            Local::now().to_rfc3339(),
        ],
    )?;
    tracing::debug!(date = %rec.date, "record upserted");
    Ok(())
}

pub fn load_record(conn: &Connection, date: &NaiveDate) -> AppResult<Option<RawDayRecord>> {
    let sql = format!("{SELECT_COLUMNS} WHERE date = ?1");
    let mut stmt = conn.prepare(&sql)?;

    let rec = stmt
        .query_row([date.format("%Y-%m-%d").to_string()], map_row)
        .optional()?;
    Ok(rec)
}

/// Records in date order, optionally limited to inclusive bounds.
pub fn load_records(
    conn: &Connection,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<RawDayRecord>> {
    let mut out = Vec::new();

    match bounds {
        None => {
            let sql = format!("{SELECT_COLUMNS} ORDER BY date ASC");
            let mut stmt = conn.prepare(&sql)?;
            for r in stmt.query_map([], map_row)? {
                out.push(r?);
            }
        }
        Some((start, end)) => {
            let sql = format!("{SELECT_COLUMNS} WHERE date BETWEEN ?1 AND ?2 ORDER BY date ASC");
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(
                params![
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string()
                ],
                map_row,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    tracing::debug!(count = out.len(), ?bounds, "records loaded");
    Ok(out)
}

/// Delete the record of a date. Returns `false` when there was none.
pub fn delete_record(conn: &Connection, date: &NaiveDate) -> AppResult<bool> {
    let n = conn.execute(
        "DELETE FROM records WHERE date = ?1",
        [date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(n > 0)
}

pub fn count_records(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
    Ok(n)
}
