//! Aggregations computed from full histories for the monitor page.

use crate::models::prediction::Prediction;
use crate::models::visit::PageVisit;
use std::collections::HashMap;

/// Occurrences of each value, most frequent first.
/// Equal counts keep the order in which values first appeared.
pub fn value_counts<'a, I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for v in values {
        match index.get(v) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(v, order.len());
                order.push((v.to_string(), 1));
            }
        }
    }

    // sort_by is stable
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
}

pub fn page_counts(visits: &[PageVisit]) -> Vec<(String, usize)> {
    value_counts(visits.iter().map(|v| v.page_name.as_str()))
}

pub fn label_counts(predictions: &[Prediction]) -> Vec<(String, usize)> {
    value_counts(predictions.iter().map(|p| p.predicted_label.as_str()))
}

/// Mean confidence per label, in the order of `label_counts`.
pub fn mean_confidence_by_label(predictions: &[Prediction]) -> Vec<(String, f64)> {
    let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
    for p in predictions {
        let e = sums.entry(p.predicted_label.as_str()).or_insert((0.0, 0));
        e.0 += p.confidence;
        e.1 += 1;
    }

    label_counts(predictions)
        .into_iter()
        .map(|(label, _)| {
            let (sum, n) = sums.get(label.as_str()).copied().unwrap_or((0.0, 1));
            (label, sum / n as f64)
        })
        .collect()
}
