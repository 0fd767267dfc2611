//! Home page: classify a text and record the outcome.

use crate::classifier::{Classification, EmotionClassifier, classify};
use crate::db::PredictionLog;
use crate::models::emotion::decorate;
use crate::ui::messages::warning;
use crate::utils::chart::bar_chart;
use crate::utils::colors::{RESET, color_for_confidence};
use crate::utils::formatting::confidence2readable;
use chrono::{DateTime, FixedOffset};

/// A classified text and whether it made it into the prediction log.
#[derive(Debug, Clone)]
pub struct Submission {
    pub text: String,
    pub classification: Classification,
    /// `None` when the prediction could not be recorded.
    pub recorded_at: Option<DateTime<FixedOffset>>,
}

pub struct HomeLogic;

impl HomeLogic {
    /// Classify `text` and append the result to the prediction log.
    ///
    /// The classification is returned even when the write fails; the
    /// failure is reported as a warning.
    pub fn submit(
        predictions: &PredictionLog,
        classifier: &dyn EmotionClassifier,
        text: &str,
    ) -> Submission {
        let classification = classify(classifier, text);

        let recorded_at = match predictions.record_prediction_now(
            text,
            &classification.label,
            classification.confidence,
        ) {
            Ok(ts) => Some(ts),
            Err(e) => {
                warning(format!("Prediction not recorded: {e}"));
                None
            }
        };

        Submission {
            text: text.to_string(),
            classification,
            recorded_at,
        }
    }

    pub fn render(sub: &Submission, bar_width: usize) -> String {
        let c = &sub.classification;
        let mut out = String::new();

        out.push_str("📜 Original Text\n");
        out.push_str(&format!("{}\n\n", sub.text));

        out.push_str("🎯 Prediction\n");
        out.push_str(&format!("{}\n", decorate(&c.label)));
        out.push_str(&format!(
            "Confidence: {}{}{}\n\n",
            color_for_confidence(c.confidence),
            confidence2readable(c.confidence),
            RESET
        ));

        out.push_str("📊 Prediction Probability\n");
        out.push_str(&bar_chart(&c.distribution, bar_width, |p| format!("{:.4}", p)));

        if sub.recorded_at.is_none() {
            out.push_str("\n(this prediction was not recorded)\n");
        }
        out
    }
}
