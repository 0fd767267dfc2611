//! Emotion classifier boundary.
//!
//! The dashboard only needs two calls from a model: the winning label and
//! the full probability distribution. Anything that can answer both plugs in
//! through [`EmotionClassifier`].

pub mod linear;

pub use linear::LinearTextClassifier;

pub trait EmotionClassifier {
    /// Labels, in the same order as `predict_proba` values.
    fn classes(&self) -> &[String];

    fn predict(&self, text: &str) -> String;

    /// One probability per class; sums to 1.
    fn predict_proba(&self, text: &str) -> Vec<f64>;
}

/// Outcome of running one text through a classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    /// Highest class probability.
    pub confidence: f64,
    /// `(label, probability)` sorted by probability, highest first.
    pub distribution: Vec<(String, f64)>,
}

pub fn classify(clf: &dyn EmotionClassifier, text: &str) -> Classification {
    let label = clf.predict(text);
    let proba = clf.predict_proba(text);
    let confidence = max_probability(&proba);

    let mut distribution: Vec<(String, f64)> =
        clf.classes().iter().cloned().zip(proba).collect();
    distribution.sort_by(|a, b| b.1.total_cmp(&a.1));

    Classification {
        label,
        confidence,
        distribution,
    }
}

/// Largest value of a distribution, 0.0 when empty.
pub fn max_probability(proba: &[f64]) -> f64 {
    proba.iter().copied().reduce(f64::max).unwrap_or(0.0)
}
