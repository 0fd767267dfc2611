//! Process-wide SQLite handle shared by the visit and prediction logs.
//!
//! The store is opened once by the startup routine and borrowed by every log.
//! All access goes through a single mutex, so concurrent callers never see or
//! produce a half-written row.

use crate::db::initialize;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, Result};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

pub struct Store {
    conn: Mutex<Connection>,
    location: String,
}

impl Store {
    /// Open (or create) the database file and make sure both tables exist.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path)).map_err(|source| {
            AppError::StorageUnavailable {
                target: path.to_string(),
                source,
            }
        })?;
        Self::ready(conn, path)
    }

    /// Private in-memory database, mostly for tests.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory().map_err(|source| AppError::StorageUnavailable {
            target: ":memory:".to_string(),
            source,
        })?;
        Self::ready(conn, ":memory:")
    }

    fn ready(conn: Connection, location: &str) -> AppResult<Self> {
        let store = Self {
            conn: Mutex::new(conn),
            location: location.to_string(),
        };
        store.ensure_visit_table()?;
        store.ensure_prediction_table()?;
        Ok(store)
    }

    pub fn ensure_visit_table(&self) -> AppResult<()> {
        self.with_conn(initialize::ensure_visit_table)
            .map_err(|source| self.unavailable(source))
    }

    pub fn ensure_prediction_table(&self) -> AppResult<()> {
        self.with_conn(initialize::ensure_prediction_table)
            .map_err(|source| self.unavailable(source))
    }

    /// Run a closure while holding the connection lock.
    ///
    /// Each statement runs in SQLite autocommit mode, so a panic inside a
    /// previous holder cannot leave a partial row; a poisoned lock is reused.
    pub fn with_conn<F, T>(&self, func: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let guard = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        func(&guard)
    }

    /// Database path, or `:memory:`.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Close the connection explicitly, reporting any error SQLite returns.
    pub fn close(self) -> AppResult<()> {
        let conn = self
            .conn
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        conn.close().map_err(|(_, e)| AppError::Db(e))
    }

    fn unavailable(&self, source: rusqlite::Error) -> AppError {
        AppError::StorageUnavailable {
            target: self.location.clone(),
            source,
        }
    }
}
