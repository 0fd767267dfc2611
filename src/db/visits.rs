//! Append-only log of page navigations.

use crate::db::initialize::VISITS_TABLE;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::visit::PageVisit;
use crate::utils::time::{Clock, from_db_string, to_storable_string};
use chrono::{DateTime, FixedOffset};
use rusqlite::{Result, Row, params};
use std::sync::Arc;

pub struct VisitLog<'s> {
    store: &'s Store,
    clock: Arc<dyn Clock>,
}

impl<'s> VisitLog<'s> {
    pub fn new(store: &'s Store, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Append one visit with a caller-supplied timestamp.
    pub fn record_visit(&self, page_name: &str, visited_at: &DateTime<FixedOffset>) -> AppResult<()> {
        self.store
            .with_conn(|conn| {
                let stamp = to_storable_string(visited_at).map_err(|e| {
                    rusqlite::Error::ToSqlConversionFailure(Box::new(e))
                })?;
                let mut stmt = conn.prepare_cached(
                    "INSERT INTO page_visits (page_name, visited_at)
                     VALUES (?1, ?2)",
                )?;
                stmt.execute(params![page_name, stamp])?;
                Ok(())
            })
            .map_err(|source| AppError::WriteFailed {
                table: VISITS_TABLE,
                source,
            })
    }

    /// Append one visit stamped by the injected clock; returns the stamp used.
    pub fn record_visit_now(&self, page_name: &str) -> AppResult<DateTime<FixedOffset>> {
        let now = self.clock.now();
        self.record_visit(page_name, &now)?;
        Ok(now)
    }

    /// Full history in insertion order. Empty when nothing was recorded.
    pub fn all_visits(&self) -> AppResult<Vec<PageVisit>> {
        self.store
            .with_conn(|conn| {
                let mut stmt = conn.prepare_cached(
                    "SELECT page_name, visited_at FROM page_visits
                     ORDER BY rowid ASC",
                )?;
                let rows = stmt.query_map([], map_visit_row)?;

                let mut out = Vec::new();
                for r in rows {
                    out.push(r?);
                }
                Ok(out)
            })
            .map_err(|source| AppError::ReadFailed {
                table: VISITS_TABLE,
                source,
            })
    }
}

fn map_visit_row(row: &Row) -> Result<PageVisit> {
    let raw: String = row.get("visited_at")?;
    let visited_at = from_db_string(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(PageVisit {
        page_name: row.get("page_name")?,
        visited_at,
    })
}
