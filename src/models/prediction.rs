use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// One row of `predictions`.
///
/// `raw_text` is stored exactly as submitted and `confidence` is whatever the
/// classifier returned; neither is checked here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub raw_text: String,                    // ⇔ predictions.raw_text (TEXT)
    pub predicted_label: String,             // ⇔ predictions.label (TEXT)
    pub confidence: f64,                     // ⇔ predictions.confidence (REAL)
    pub predicted_at: DateTime<FixedOffset>, // ⇔ predictions.predicted_at (RFC 3339)
}

impl Prediction {
    pub fn new(
        raw_text: impl Into<String>,
        predicted_label: impl Into<String>,
        confidence: f64,
        predicted_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            raw_text: raw_text.into(),
            predicted_label: predicted_label.into(),
            confidence,
            predicted_at,
        }
    }
}
