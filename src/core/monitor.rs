//! Monitor page: full-history tables and counts.

use crate::core::analytics::{label_counts, mean_confidence_by_label, page_counts};
use crate::db::{PredictionLog, VisitLog};
use crate::errors::AppResult;
use crate::models::prediction::Prediction;
use crate::models::visit::PageVisit;
use crate::ui::messages::error;
use crate::utils::chart::{bar_chart, count_rows};
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::{confidence2readable, pad_right, percent};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_display;
use unicode_width::UnicodeWidthStr;

/// Raw text column width before wrapping.
const TEXT_WIDTH: usize = 48;

pub struct MonitorLogic;

impl MonitorLogic {
    /// Visit history, or an empty one when the read fails.
    pub fn load_visits(visits: &VisitLog) -> Vec<PageVisit> {
        or_empty(visits.all_visits(), "page metrics")
    }

    /// Prediction history, or an empty one when the read fails.
    pub fn load_predictions(predictions: &PredictionLog) -> Vec<Prediction> {
        or_empty(predictions.all_predictions(), "classifier metrics")
    }

    pub fn render_page_metrics(visits: &[PageVisit], bar_width: usize) -> String {
        let mut table = Table::new(vec![Column::new("Page Name"), Column::new("Time of Visit")]);
        for v in visits {
            table.add_row(vec![v.page_name.clone(), format_display(&v.visited_at)]);
        }

        let mut out = String::new();
        if table.is_empty() {
            out.push_str(&colorize_optional("--"));
            out.push_str(" no visits recorded\n");
            return out;
        }
        out.push_str(&table.render());

        let counts = page_counts(visits);
        out.push_str("\nCounts\n");
        out.push_str(&bar_chart(&count_rows(&counts), bar_width, |c| {
            format!("{}", c as usize)
        }));

        out.push_str("\nPage Visit Distribution\n");
        let label_w = counts
            .iter()
            .map(|(l, _)| UnicodeWidthStr::width(l.as_str()))
            .max()
            .unwrap_or(0);
        for (page, n) in &counts {
            out.push_str(&format!(
                "{} {}\n",
                pad_right(page, label_w),
                percent(*n, visits.len())
            ));
        }
        out
    }

    pub fn render_prediction_metrics(predictions: &[Prediction], bar_width: usize) -> String {
        let mut table = Table::new(vec![
            Column::wrapped("Rawtext", TEXT_WIDTH),
            Column::new("Prediction"),
            Column::new("Probability"),
            Column::new("Time_of_Visit"),
        ]);
        for p in predictions {
            table.add_row(vec![
                p.raw_text.clone(),
                p.predicted_label.clone(),
                format!("{}", p.confidence),
                format_display(&p.predicted_at),
            ]);
        }

        let mut out = String::new();
        if table.is_empty() {
            out.push_str(&colorize_optional("--"));
            out.push_str(" no predictions recorded\n");
            return out;
        }
        out.push_str(&table.render());

        out.push_str("\nCounts\n");
        out.push_str(&bar_chart(
            &count_rows(&label_counts(predictions)),
            bar_width,
            |c| format!("{}", c as usize),
        ));

        out.push_str("\nMean confidence\n");
        out.push_str(&bar_chart(
            &mean_confidence_by_label(predictions),
            bar_width,
            confidence2readable,
        ));
        out
    }
}

fn or_empty<T>(result: AppResult<Vec<T>>, view: &str) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(e) => {
            error(format!("Cannot load {view}: {e}"));
            Vec::new()
        }
    }
}
