use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::config::DEFAULT_DATE_FORMAT;

/// Date shapes tried after RFC 3339 when reading axis values, most specific first.
const DATE_TIME_SHAPES: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
const DATE_SHAPES: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Whether chrono accepts `pattern` as a strftime format.
#[must_use]
pub(crate) fn is_valid_date_pattern(pattern: &str) -> bool {
    !pattern.trim().is_empty()
        && StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}

/// First usable pattern among `candidates`, else the built-in default.
pub(crate) fn pick_date_pattern<'a>(candidates: impl IntoIterator<Item = &'a str>) -> String {
    candidates
        .into_iter()
        .find(|pattern| is_valid_date_pattern(pattern))
        .unwrap_or(DEFAULT_DATE_FORMAT)
        .to_owned()
}

/// Formats Unix epoch milliseconds in UTC. Returns `None` outside chrono's range.
pub(crate) fn format_epoch_millis(millis: f64, pattern: &str) -> Option<String> {
    if !millis.is_finite() {
        return None;
    }
    let datetime = DateTime::<Utc>::from_timestamp_millis(millis.round() as i64)?;
    let mut out = String::new();
    if write!(out, "{}", datetime.format(pattern)).is_ok() {
        return Some(out);
    }
    out.clear();
    write!(out, "{}", datetime.format(DEFAULT_DATE_FORMAT)).ok()?;
    Some(out)
}

/// Parses a calendar date or date-time written as text into epoch
/// milliseconds (UTC). `hint` is a column-provided strftime pattern tried
/// before the built-in shapes.
#[must_use]
pub(crate) fn parse_calendar_date(text: &str, hint: Option<&str>) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(hint) = hint.filter(|hint| is_valid_date_pattern(hint)) {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, hint) {
            return Some(datetime.and_utc().timestamp_millis());
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, hint) {
            return date_millis(date);
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.timestamp_millis());
    }
    DATE_TIME_SHAPES
        .iter()
        .find_map(|shape| NaiveDateTime::parse_from_str(text, shape).ok())
        .map(|datetime| datetime.and_utc().timestamp_millis())
        .or_else(|| {
            DATE_SHAPES
                .iter()
                .find_map(|shape| NaiveDate::parse_from_str(text, shape).ok())
                .or_else(|| parse_period_start(text))
                .and_then(date_millis)
        })
}

/// ISO year (`2023`) or year-month (`2023-12`), read as the first day of the
/// period. The year must have exactly four digits.
fn parse_period_start(text: &str) -> Option<NaiveDate> {
    let (year, month) = match text.split_once('-') {
        Some((year, month)) => (year, Some(month)),
        None => (text, None),
    };
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let month = match month {
        Some(month) if (1..=2).contains(&month.len()) && month.bytes().all(|b| b.is_ascii_digit()) => {
            month.parse().ok()?
        }
        Some(_) => return None,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

fn date_millis(date: NaiveDate) -> Option<i64> {
    date.and_hms_opt(0, 0, 0)
        .map(|datetime| datetime.and_utc().timestamp_millis())
}
