//! Horizontal bar charts for the terminal.

use crate::utils::colors::{RESET, color_for_index};
use crate::utils::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

const BAR: char = '█';

/// Render one bar per `(label, value)`, scaled so the largest value spans
/// `width` cells. `annotate` formats the number printed after each bar.
pub fn bar_chart<F>(rows: &[(String, f64)], width: usize, annotate: F) -> String
where
    F: Fn(f64) -> String,
{
    if rows.is_empty() {
        return String::new();
    }

    let label_w = rows
        .iter()
        .map(|(l, _)| UnicodeWidthStr::width(l.as_str()))
        .max()
        .unwrap_or(0);
    let max = rows.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    let mut out = String::new();
    for (i, (label, value)) in rows.iter().enumerate() {
        let len = if max > 0.0 {
            ((value / max) * width as f64).round() as usize
        } else {
            0
        };
        // Non-zero values always get at least one cell.
        let len = if *value > 0.0 { len.max(1) } else { 0 };

        out.push_str(&format!(
            "{} {}{}{} {}\n",
            pad_right(label, label_w),
            color_for_index(i),
            BAR.to_string().repeat(len),
            RESET,
            annotate(*value)
        ));
    }
    out
}

/// Counts as chart rows.
pub fn count_rows(counts: &[(String, usize)]) -> Vec<(String, f64)> {
    counts.iter().map(|(l, c)| (l.clone(), *c as f64)).collect()
}
