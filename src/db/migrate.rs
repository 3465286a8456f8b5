use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
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

/// Check if the `records` table exists.
fn records_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='records'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `records` table has the given column.
fn records_has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('records')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `records` table with the first-generation schema.
///
/// Later columns are added by the versioned migrations below, so a fresh
/// database and an upgraded one end up identical.
fn create_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            date            TEXT PRIMARY KEY,
            clock_in        TEXT,
            lunch_out       TEXT,
            lunch_in        TEXT,
            clock_out       TEXT,
            remote_start    TEXT,
            remote_end      TEXT,
            note            TEXT NOT NULL DEFAULT '',
            manual_override INTEGER NOT NULL DEFAULT 0
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

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Add a column to `records` once, tracked by `version` in the log table.
fn migrate_add_column(
    conn: &Connection,
    version: &str,
    column: &str,
    definition: &str,
    message: &str,
) -> Result<()> {
    if is_applied(conn, version)? {
        return Ok(());
    }

    if !records_has_column(conn, column)? {
        conn.execute(
            &format!("ALTER TABLE records ADD COLUMN {column} {definition};"),
            [],
        )?;
    }

    mark_applied(conn, version, message)?;
    tracing::info!(version, column, "migration applied");
    success(format!("Migration applied: {} → {}", version, message));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Base schema
    if !records_table_exists(conn)? {
        create_records_table(conn)?;
        success("Created records table.");
    }

    // 3) Versioned column additions
    migrate_add_column(
        conn,
        "20250110_0001_add_remote_day",
        "remote_day",
        "INTEGER NOT NULL DEFAULT 0",
        "added 'remote_day' flag to records",
    )?;

    migrate_add_column(
        conn,
        "20250110_0002_add_updated_at",
        "updated_at",
        "TEXT NOT NULL DEFAULT ''",
        "added 'updated_at' timestamp to records",
    )?;

    Ok(())
}
