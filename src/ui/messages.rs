use crate::utils::colors::{BLUE, GREEN, RED, RESET, YELLOW};
use std::fmt;

const BOLD: &str = "\x1b[1m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", GREEN, BOLD, ICON_OK, RESET, msg);
}

/// Non-fatal problems (e.g. a telemetry write that was not recorded).
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", RED, BOLD, ICON_ERR, RESET, msg);
}

/// Page title, e.g. `🔍 Emotion Detection in Text`.
pub fn header<T: fmt::Display>(icon: &str, msg: T) {
    println!("\n{}{}{} {}{}\n", BLUE, BOLD, icon, msg, RESET);
}

/// Section title inside a page.
pub fn section<T: fmt::Display>(msg: T) {
    println!("{}{}📄 {}{}", YELLOW, BOLD, msg, RESET);
}
