//! Linear bag-of-words model exported from a trained pipeline.
//!
//! Model file layout (JSON):
//!
//! ```json
//! {
//!   "classes": ["anger", "joy", "sadness"],
//!   "intercept": [0.1, -0.2, 0.0],
//!   "coefficients": { "happy": [-0.5, 2.1, -0.9] },
//!   "lowercase": true
//! }
//! ```
//!
//! Scores are `intercept + Σ count(token) · coefficients[token]`, turned into
//! probabilities with a softmax.

use crate::classifier::EmotionClassifier;
use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const TOKEN_PATTERN: &str = r"\b\w\w+\b";

#[derive(Debug, Deserialize)]
pub struct ModelFile {
    pub classes: Vec<String>,
    pub intercept: Vec<f64>,
    #[serde(default)]
    pub coefficients: HashMap<String, Vec<f64>>,
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
}

fn default_lowercase() -> bool {
    true
}

pub struct LinearTextClassifier {
    classes: Vec<String>,
    intercept: Vec<f64>,
    coefficients: HashMap<String, Vec<f64>>,
    lowercase: bool,
    token_re: Regex,
}

impl LinearTextClassifier {
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Model(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        let model: ModelFile =
            serde_json::from_str(json).map_err(|e| AppError::Model(format!("invalid model: {e}")))?;
        Self::from_model(model)
    }

    pub fn from_model(model: ModelFile) -> AppResult<Self> {
        let n = model.classes.len();
        if n == 0 {
            return Err(AppError::Model("model has no classes".into()));
        }
        if model.intercept.len() != n {
            return Err(AppError::Model(format!(
                "intercept has {} values, expected {n}",
                model.intercept.len()
            )));
        }
        if let Some((token, w)) = model.coefficients.iter().find(|(_, w)| w.len() != n) {
            return Err(AppError::Model(format!(
                "coefficients for '{token}' have {} values, expected {n}",
                w.len()
            )));
        }

        let token_re = Regex::new(TOKEN_PATTERN).map_err(|e| AppError::Model(e.to_string()))?;

        // Keys are matched against normalised tokens.
        let coefficients = if model.lowercase {
            model
                .coefficients
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v))
                .collect()
        } else {
            model.coefficients
        };

        Ok(Self {
            classes: model.classes,
            intercept: model.intercept,
            coefficients,
            lowercase: model.lowercase,
            token_re,
        })
    }

    fn tokens(&self, text: &str) -> HashMap<String, usize> {
        let source = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let mut counts = HashMap::new();
        for m in self.token_re.find_iter(&source) {
            *counts.entry(m.as_str().to_string()).or_insert(0) += 1;
        }
        counts
    }

    fn scores(&self, text: &str) -> Vec<f64> {
        let mut scores = self.intercept.clone();
        for (token, count) in self.tokens(text) {
            if let Some(weights) = self.coefficients.get(&token) {
                for (s, w) in scores.iter_mut().zip(weights) {
                    *s += w * count as f64;
                }
            }
        }
        scores
    }
}

impl EmotionClassifier for LinearTextClassifier {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn predict(&self, text: &str) -> String {
        let proba = self.predict_proba(text);
        let mut best = 0;
        for (i, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = i;
            }
        }
        self.classes[best].clone()
    }

    fn predict_proba(&self, text: &str) -> Vec<f64> {
        softmax(&self.scores(text))
    }
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
