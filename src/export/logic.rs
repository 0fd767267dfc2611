// src/export/logic.rs

use crate::db::{PredictionLog, VisitLog};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use serde::Serialize;
use std::path::Path;

/// Which history to dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    Visits,
    Predictions,
}

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the full visit or prediction history to `file`.
    ///
    /// An empty history writes nothing and only warns.
    pub fn export(
        visits: &VisitLog,
        predictions: &PredictionLog,
        target: ExportTarget,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        match target {
            ExportTarget::Visits => write_rows(&visits.all_visits()?, format, path),
            ExportTarget::Predictions => {
                write_rows(&predictions.all_predictions()?, format, path)
            }
        }
    }
}

fn write_rows<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<()> {
    if rows.is_empty() {
        warning("No rows recorded yet, nothing exported.");
        return Ok(());
    }

    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}
