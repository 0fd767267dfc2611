use crate::db::initialize::{PREDICTIONS_TABLE, VISITS_TABLE};
use crate::db::store::Store;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::time::{format_display, from_db_string};
use rusqlite::{Connection, OptionalExtension};
use std::fs;

/// Row count and first/last timestamps of one telemetry table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStats {
    pub rows: i64,
    pub first: Option<String>,
    pub last: Option<String>,
}

pub fn table_stats(store: &Store, table: &str) -> rusqlite::Result<TableStats> {
    let ts_col = match table {
        VISITS_TABLE => "visited_at",
        PREDICTIONS_TABLE => "predicted_at",
        _ => return Err(rusqlite::Error::InvalidQuery),
    };

    store.with_conn(|conn| {
        let rows: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })?;
        let first = edge(conn, table, ts_col, "ASC")?;
        let last = edge(conn, table, ts_col, "DESC")?;
        Ok(TableStats { rows, first, last })
    })
}

fn edge(conn: &Connection, table: &str, col: &str, dir: &str) -> rusqlite::Result<Option<String>> {
    conn.query_row(
        &format!("SELECT {col} FROM {table} ORDER BY rowid {dir} LIMIT 1"),
        [],
        |row| row.get(0),
    )
    .optional()
}

pub fn print_db_info(store: &Store) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(store.location()).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, store.location(), RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) PER-TABLE COUNTS AND RANGE
    //
    for (label, table) in [("Page visits", VISITS_TABLE), ("Predictions", PREDICTIONS_TABLE)] {
        let stats = table_stats(store, table)?;
        println!(
            "{}• {}:{} {}{}{}",
            CYAN, label, RESET, GREEN, stats.rows, RESET
        );
        println!("    first: {}", fmt_edge(stats.first));
        println!("    last:  {}", fmt_edge(stats.last));
    }

    println!();
    Ok(())
}

fn fmt_edge(raw: Option<String>) -> String {
    match raw {
        Some(s) => from_db_string(&s).map(|ts| format_display(&ts)).unwrap_or(s),
        None => format!("{GREY}--{RESET}"),
    }
}
