use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::constants::NOT_AVAILABLE;

/// Parses a date as stored on a record.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.fff]` and the
/// `Month D, YYYY` form written by the profile forms.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.date());
    }
    NaiveDate::parse_from_str(raw, "%B %d, %Y").ok()
}

/// `YYYY-MM-DD` for a parseable date, `N/A` otherwise.
pub fn display_date(raw: Option<&str>) -> String {
    raw.and_then(parse_record_date)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
