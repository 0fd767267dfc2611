/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Palette cycled through for chart bars.
const PALETTE: [&str; 6] = [CYAN, GREEN, YELLOW, MAGENTA, BLUE, RED];

/// Confidence color:
/// ≥ 0.75 → green
/// ≥ 0.50 → yellow
/// otherwise → red
pub fn color_for_confidence(value: f64) -> &'static str {
    if value >= 0.75 {
        GREEN
    } else if value >= 0.5 {
        YELLOW
    } else {
        RED
    }
}

/// Stable color per bar index.
pub fn color_for_index(i: usize) -> &'static str {
    PALETTE[i % PALETTE.len()]
}

/// Grey out empty values.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
