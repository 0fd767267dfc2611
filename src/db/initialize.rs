//! Schema setup for the two telemetry tables.
//!
//! Every statement here is `IF NOT EXISTS`, so running it again on a live
//! database is a no-op.

use rusqlite::{Connection, OptionalExtension, Result};

pub const VISITS_TABLE: &str = "page_visits";
pub const PREDICTIONS_TABLE: &str = "predictions";

/// Create the `page_visits` table if missing.
pub fn ensure_visit_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS page_visits (
            page_name  TEXT NOT NULL,
            visited_at TIMESTAMP NOT NULL
        );
        "#,
    )
}

/// Create the `predictions` table if missing.
pub fn ensure_prediction_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS predictions (
            raw_text     TEXT NOT NULL,
            label        TEXT NOT NULL,
            confidence   REAL NOT NULL,
            predicted_at TIMESTAMP NOT NULL
        );
        "#,
    )
}

/// Initialize the database: both tables, nothing else.
pub fn init_db(conn: &Connection) -> Result<()> {
    ensure_visit_table(conn)?;
    ensure_prediction_table(conn)?;
    Ok(())
}

/// Check if a table with the given name exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}
