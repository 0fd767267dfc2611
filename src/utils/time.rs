//! Time utilities: canonical timezone, clocks, and timestamp (de)serialization.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// Offset used to stamp every event when nothing else is configured (IST).
pub const DEFAULT_OFFSET: &str = "+05:30";

/// Source of "now" in the canonical timezone.
///
/// Both logs take a clock so the stamping policy lives in one place and can
/// be swapped for a fixed instant in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock converted into a fixed offset, regardless of the host timezone.
#[derive(Debug, Clone, Copy)]
pub struct CanonicalClock {
    offset: FixedOffset,
}

impl CanonicalClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Build a clock from an offset string such as `+05:30` or `-03:00`.
    pub fn from_offset_str(s: &str) -> AppResult<Self> {
        Ok(Self::new(parse_offset(s)?))
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Clock for CanonicalClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Parse `+HH:MM`, `-HH:MM`, `+HHMM` or `Z` into a fixed offset.
pub fn parse_offset(s: &str) -> AppResult<FixedOffset> {
    let t = s.trim();
    if t.eq_ignore_ascii_case("z") || t.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(|| AppError::InvalidTimezone(s.to_string()));
    }

    let (sign, rest) = match t.chars().next() {
        Some('+') => (1, &t[1..]),
        Some('-') => (-1, &t[1..]),
        _ => return Err(AppError::InvalidTimezone(s.to_string())),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::InvalidTimezone(s.to_string()));
    }

    let hours: i32 = digits[..2]
        .parse()
        .map_err(|_| AppError::InvalidTimezone(s.to_string()))?;
    let minutes: i32 = digits[2..]
        .parse()
        .map_err(|_| AppError::InvalidTimezone(s.to_string()))?;
    if minutes >= 60 {
        return Err(AppError::InvalidTimezone(s.to_string()));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| AppError::InvalidTimezone(s.to_string()))
}

/// Storage form: RFC 3339 with every sub-second digit kept.
pub fn to_db_string(ts: &DateTime<FixedOffset>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

/// Storage form, refusing instants whose text would not parse back
/// (years outside 0000–9999).
pub fn to_storable_string(ts: &DateTime<FixedOffset>) -> AppResult<String> {
    let s = to_db_string(ts);
    from_db_string(&s)?;
    Ok(s)
}

pub fn from_db_string(s: &str) -> AppResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Short human form used in tables.
pub fn format_display(ts: &DateTime<FixedOffset>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S %:z").to_string()
}
