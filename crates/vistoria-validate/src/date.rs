//! Date normalization to ISO `YYYY-MM-DD`.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

static ISO_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid ISO date regex"));

/// Day first, then month, then a four-digit year; `/` or `-` separated.
static DAY_MONTH_YEAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})[/-]([0-9]{1,2})[/-]([0-9]{4})$")
        .expect("Invalid day-month-year regex")
});

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// `%Y` also accepts one to three digit years; those are not real dates here.
const MIN_YEAR: i32 = 1000;

/// Normalizes a raw inspection date.
///
/// - blank input gives `None`
/// - `YYYY-MM-DD` is returned as is, without a calendar check
/// - `D/M/YYYY` and `D-M-YYYY` are rewritten zero-padded, always read day first
/// - anything else goes through a fixed list of date and date-time formats;
///   values carrying a UTC offset are converted to their UTC date
/// - years with fewer than four digits are rejected
pub fn normalize_date(raw: &str) -> Option<String> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return None;
    }
    if ISO_DATE_REGEX.is_match(cleaned) {
        return Some(cleaned.to_string());
    }
    if let Some(caps) = DAY_MONTH_YEAR_REGEX.captures(cleaned) {
        return Some(format!("{}-{:0>2}-{:0>2}", &caps[3], &caps[2], &caps[1]));
    }
    parse_generic(cleaned)
        .filter(|date| date.year() >= MIN_YEAR)
        .map(|date| date.format("%Y-%m-%d").to_string())
}

fn parse_generic(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        })
}
