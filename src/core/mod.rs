pub mod about;
pub mod analytics;
pub mod config;
pub mod home;
pub mod monitor;

use crate::db::VisitLog;
use crate::models::page::Page;
use crate::ui::messages::warning;
use chrono::{DateTime, FixedOffset};

/// Record a navigation to `page`.
///
/// A failed write is reported to the user but does not stop the page from
/// rendering.
pub fn record_navigation(visits: &VisitLog, page: Page) -> Option<DateTime<FixedOffset>> {
    match visits.record_visit_now(page.as_str()) {
        Ok(ts) => Some(ts),
        Err(e) => {
            warning(format!("Visit to {} not recorded: {e}", page.as_str()));
            None
        }
    }
}
