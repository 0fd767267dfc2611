//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Right-pad to a display width (emoji and CJK count double).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// `0.8712` → `0.87`
pub fn confidence2readable(value: f64) -> String {
    format!("{:.2}", value)
}

/// `(1, 4)` → `25.0%`
pub fn percent(part: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 * 100.0 / total as f64)
}
