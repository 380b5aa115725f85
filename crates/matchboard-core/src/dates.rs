//! Parsing and display of match timestamps.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-ish match timestamp.
///
/// Accepts RFC 3339 (`2024-03-10T15:00:00+01:00`), a date-time without
/// offset (read as UTC, `T` or space separated, seconds optional) and a bare
/// `YYYY-MM-DD` date (midnight UTC). Returns `None` for anything else.
#[must_use]
pub fn parse_match_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parses an optional raw timestamp; absent text parses as `None`.
#[must_use]
pub fn parse_opt(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(parse_match_date)
}

/// Ascending order over optional instants where `None` (unparseable) sorts
/// after every valid instant.
#[must_use]
pub fn cmp_ascending(a: Option<&DateTime<Utc>>, b: Option<&DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Descending order over optional instants where `None` still sorts last.
#[must_use]
pub fn cmp_descending(a: Option<&DateTime<Utc>>, b: Option<&DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        _ => cmp_ascending(a, b),
    }
}

/// Formats a raw match timestamp as `dd/mm/YYYY HHhMM` in `tz`.
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_match_date<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match parse_match_date(raw) {
        Some(dt) => dt.with_timezone(tz).format("%d/%m/%Y %Hh%M").to_string(),
        None => raw.to_owned(),
    }
}
