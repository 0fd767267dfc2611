//! Unified application error type.
//! The telemetry store, classifier, config and CLI layers all return
//! AppError so failures surface the same way from every command.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Telemetry store
    // ---------------------------
    /// The store could not be opened or its tables could not be created.
    #[error("Storage unavailable ({target}): {source}")]
    StorageUnavailable {
        target: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A single insert was rejected; nothing was recorded.
    #[error("Failed to record {table} entry: {source}")]
    WriteFailed {
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    /// A full-history scan failed.
    #[error("Failed to read {table} history: {source}")]
    ReadFailed {
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    /// Maintenance commands (integrity check, vacuum, stats).
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp in store: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid timezone offset: {0}")]
    InvalidTimezone(String),

    // ---------------------------
    // Classifier
    // ---------------------------
    #[error("Model error: {0}")]
    Model(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
