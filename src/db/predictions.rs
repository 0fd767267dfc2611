//! Append-only log of classification outcomes.

use crate::db::initialize::PREDICTIONS_TABLE;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::prediction::Prediction;
use crate::utils::time::{Clock, from_db_string, to_storable_string};
use chrono::{DateTime, FixedOffset};
use rusqlite::{Result, Row, params};
use std::sync::Arc;

pub struct PredictionLog<'s> {
    store: &'s Store,
    clock: Arc<dyn Clock>,
}

impl<'s> PredictionLog<'s> {
    pub fn new(store: &'s Store, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Append one prediction. Text, label and confidence are stored as given.
    pub fn record_prediction(
        &self,
        raw_text: &str,
        label: &str,
        confidence: f64,
        predicted_at: &DateTime<FixedOffset>,
    ) -> AppResult<()> {
        self.store
            .with_conn(|conn| {
                let stamp = to_storable_string(predicted_at).map_err(|e| {
                    rusqlite::Error::ToSqlConversionFailure(Box::new(e))
                })?;
                let mut stmt = conn.prepare_cached(
                    "INSERT INTO predictions (raw_text, label, confidence, predicted_at)
                     VALUES (?1, ?2, ?3, ?4)",
                )?;
                stmt.execute(params![raw_text, label, confidence, stamp])?;
                Ok(())
            })
            .map_err(|source| AppError::WriteFailed {
                table: PREDICTIONS_TABLE,
                source,
            })
    }

    pub fn record_prediction_now(
        &self,
        raw_text: &str,
        label: &str,
        confidence: f64,
    ) -> AppResult<DateTime<FixedOffset>> {
        let now = self.clock.now();
        self.record_prediction(raw_text, label, confidence, &now)?;
        Ok(now)
    }

    /// Full history in insertion order. Empty when nothing was recorded.
    pub fn all_predictions(&self) -> AppResult<Vec<Prediction>> {
        self.store
            .with_conn(|conn| {
                let mut stmt = conn.prepare_cached(
                    "SELECT raw_text, label, confidence, predicted_at FROM predictions
                     ORDER BY rowid ASC",
                )?;
                let rows = stmt.query_map([], map_prediction_row)?;

                let mut out = Vec::new();
                for r in rows {
                    out.push(r?);
                }
                Ok(out)
            })
            .map_err(|source| AppError::ReadFailed {
                table: PREDICTIONS_TABLE,
                source,
            })
    }
}

fn map_prediction_row(row: &Row) -> Result<Prediction> {
    let raw: String = row.get("predicted_at")?;
    let predicted_at = from_db_string(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Prediction {
        raw_text: row.get("raw_text")?,
        predicted_label: row.get("label")?,
        confidence: row.get("confidence")?,
        predicted_at,
    })
}
