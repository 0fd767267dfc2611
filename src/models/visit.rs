use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// One row of `page_visits`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageVisit {
    pub page_name: String,                 // ⇔ page_visits.page_name (TEXT)
    pub visited_at: DateTime<FixedOffset>, // ⇔ page_visits.visited_at (RFC 3339)
}

impl PageVisit {
    pub fn new(page_name: impl Into<String>, visited_at: DateTime<FixedOffset>) -> Self {
        Self {
            page_name: page_name.into(),
            visited_at,
        }
    }
}
