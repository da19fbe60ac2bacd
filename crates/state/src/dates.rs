//! Date parsing, elapsed-time and age breakdown helpers.
//!
//! Calendar dates without a time component are read as local noon, so an
//! observer west of UTC never sees the date shift back by a day.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;
use thiserror::Error;
use worldline_core::constants::{AVERAGE_MONTH_SECONDS, JULIAN_YEAR_SECONDS, SECONDS_PER_DAY};

/// Naive layouts accepted after RFC 3339 and RFC 2822, read as local time.
const LOCAL_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Errors raised while turning user input into instants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid date '{0}'")]
    Invalid(String),
    #[error("local time '{0}' does not exist in the current time zone")]
    NonexistentLocalTime(String),
}

/// Either an instant already resolved by the caller or text to parse.
#[derive(Debug, Clone, Copy)]
pub enum DateInput<'a> {
    Instant(DateTime<Local>),
    Text(&'a str),
}

impl From<DateTime<Local>> for DateInput<'_> {
    fn from(value: DateTime<Local>) -> Self {
        DateInput::Instant(value)
    }
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::Instant(value.with_timezone(&Local))
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        DateInput::Text(value)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(value: &'a String) -> Self {
        DateInput::Text(value.as_str())
    }
}

/// Resolve a date input to a local instant.
///
/// Instants pass through unchanged. Text is trimmed; `YYYY-MM-DD` becomes
/// local noon on that date, anything else goes through RFC 3339, RFC 2822
/// and then the naive ISO-like layouts in local time.
pub fn parse_date_input<'a>(
    input: impl Into<DateInput<'a>>,
) -> Result<DateTime<Local>, DateError> {
    match input.into() {
        DateInput::Instant(instant) => Ok(instant),
        DateInput::Text(text) => parse_text_in(&Local, text),
    }
}

/// Parse text in an explicit zone; naive forms are read as wall-clock time there.
fn parse_text_in<Tz: TimeZone>(tz: &Tz, raw: &str) -> Result<DateTime<Tz>, DateError> {
    let text = raw.trim();

    if is_calendar_date(text) {
        let noon = NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .ok_or_else(|| DateError::Invalid(raw.to_string()))?;
        return resolve_in(tz, noon, raw);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Ok(instant.with_timezone(tz));
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(text) {
        return Ok(instant.with_timezone(tz));
    }
    for layout in LOCAL_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, layout) {
            return resolve_in(tz, naive, raw);
        }
    }

    Err(DateError::Invalid(raw.to_string()))
}

fn is_calendar_date(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn resolve_in<Tz: TimeZone>(
    tz: &Tz,
    naive: NaiveDateTime,
    raw: &str,
) -> Result<DateTime<Tz>, DateError> {
    // On a DST fold the earlier of the two instants wins.
    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| DateError::NonexistentLocalTime(raw.to_string()))
}

/// Local calendar date as `YYYY-MM-DD`.
pub fn format_date_input(date: &DateTime<Local>) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Signed seconds from `birth` to `target`, millisecond resolution.
pub fn duration_between(birth: &DateTime<Local>, target: &DateTime<Local>) -> f64 {
    (*target - *birth).num_milliseconds() as f64 / 1_000.0
}

/// Signed seconds from `birth` to `target` (now when `None`).
///
/// Negative when the target precedes the birth instant.
pub fn compute_duration_seconds<'a>(
    birth: impl Into<DateInput<'a>>,
    target: Option<DateInput<'_>>,
) -> Result<f64, DateError> {
    let birth = parse_date_input(birth)?;
    let target = match target {
        Some(input) => parse_date_input(input)?,
        None => Local::now(),
    };
    Ok(duration_between(&birth, &target))
}

/// Approximate calendar breakdown of an elapsed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AgeDuration {
    pub years: u64,
    pub months: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    /// The unclamped duration was negative.
    pub is_pre_birth: bool,
}

/// Split a duration into Julian years, average months, days, hours,
/// minutes and seconds. Negative input is clamped to zero.
///
/// Months are `JULIAN_YEAR_SECONDS / 12` long, so this is a display
/// approximation and does not follow Gregorian month lengths.
pub fn breakdown_duration(total_seconds: f64) -> AgeDuration {
    let is_pre_birth = total_seconds < 0.0;
    // f64::max drops NaN
    let mut remaining = total_seconds.max(0.0);

    let years = take_whole(&mut remaining, JULIAN_YEAR_SECONDS);
    let months = take_whole(&mut remaining, AVERAGE_MONTH_SECONDS);
    let days = take_whole(&mut remaining, SECONDS_PER_DAY);
    let hours = take_whole(&mut remaining, 3_600.0);
    let minutes = take_whole(&mut remaining, 60.0);
    let seconds = remaining.floor() as u64;

    AgeDuration {
        years,
        months,
        days,
        hours,
        minutes,
        seconds,
        is_pre_birth,
    }
}

fn take_whole(remaining: &mut f64, unit_seconds: f64) -> u64 {
    let count = (*remaining / unit_seconds).floor();
    *remaining = (*remaining - count * unit_seconds).max(0.0);
    count as u64
}
