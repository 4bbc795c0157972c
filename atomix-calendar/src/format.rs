//! Text conversion for date inputs.
//!
//! Formatting is plain token substitution, not a general date formatter.
//! Parsing understands exactly three structured formats and falls back to a
//! lenient parser for everything else. Neither direction panics.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::date::CalendarDate;

/// Format used when none is configured.
pub const DEFAULT_FORMAT: &str = "MM/dd/yyyy";
/// Placeholder shown after the start date while the end date is pending.
pub const RANGE_END_PLACEHOLDER: &str = "Select end date";

const RANGE_SEPARATOR: char = '-';

/// `chrono` patterns tried by [`parse_native`], in order. `%B` also accepts
/// abbreviated month names.
const NATIVE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
];

const NATIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Substitutes `yyyy`, `MM`, `M`, `dd` and `d` in `format`.
///
/// Tokens are replaced one after another in that order, each at its first
/// occurrence. Replacement values are digits only, so an earlier substitution
/// can never be picked up by a later token.
pub fn format_date(date: CalendarDate, format: &str) -> String {
    let replacements = [
        ("yyyy", date.year().to_string()),
        ("MM", format!("{:02}", date.month())),
        ("M", date.month().to_string()),
        ("dd", format!("{:02}", date.day())),
        ("d", date.day().to_string()),
    ];

    replacements
        .iter()
        .fold(format.to_string(), |text, (token, value)| {
            text.replacen(token, value, 1)
        })
}

/// Parses `text` according to `format`.
///
/// `MM/dd/yyyy`, `dd/MM/yyyy` and `yyyy-MM-dd` are split on their delimiter;
/// any other format is handed to [`parse_native`]. Returns `None` on a wrong
/// part count, non-numeric parts, or components outside the calendar.
pub fn parse_date(text: &str, format: &str) -> Option<CalendarDate> {
    match format {
        "MM/dd/yyyy" => {
            let [month, day, year] = split_parts(text, '/')?;
            build_date(year, month, day)
        }
        "dd/MM/yyyy" => {
            let [day, month, year] = split_parts(text, '/')?;
            build_date(year, month, day)
        }
        "yyyy-MM-dd" => {
            let [year, month, day] = split_parts(text, '-')?;
            build_date(year, month, day)
        }
        _ => parse_native(text),
    }
}

/// Lenient parser for free-form input.
///
/// Accepts ISO dates (`2024-03-15`, optionally followed by a `T` time part),
/// slash or dash separated dates with the year first or last (month before
/// day), and English month names (`March 15, 2024`, `15 Mar 2024`).
pub fn parse_native(text: &str) -> Option<CalendarDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let date = NATIVE_FORMATS
        .iter()
        .find_map(|pattern| NaiveDate::parse_from_str(text, pattern).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|stamp| stamp.date_naive())
        })
        .or_else(|| {
            NATIVE_DATETIME_FORMATS
                .iter()
                .find_map(|pattern| NaiveDateTime::parse_from_str(text, pattern).ok())
                .map(|stamp| stamp.date())
        })?;
    Some(date.into())
}

/// Splits range text into its trimmed start and end parts.
///
/// The text is split on every `-`; only exactly two non-empty parts form a
/// range. Dates that contain hyphens themselves (`yyyy-MM-dd`) therefore
/// never split into a range.
pub fn split_range_text(text: &str) -> Option<(&str, &str)> {
    let mut parts = text.split(RANGE_SEPARATOR);
    let start = parts.next()?.trim();
    let end = parts.next()?.trim();
    if parts.next().is_some() || start.is_empty() || end.is_empty() {
        return None;
    }
    Some((start, end))
}

/// Parses `"<start> - <end>"` into its two dates, in the order written.
pub fn parse_date_range(text: &str, format: &str) -> Option<(CalendarDate, CalendarDate)> {
    let (start, end) = split_range_text(text)?;
    Some((parse_date(start, format)?, parse_date(end, format)?))
}

/// Text shown in a range input for the given endpoints.
pub fn format_range_text(
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
    format: &str,
) -> String {
    match (start, end) {
        (Some(start), Some(end)) => {
            format!("{} - {}", format_date(start, format), format_date(end, format))
        }
        (Some(start), None) => {
            format!("{} - {RANGE_END_PLACEHOLDER}", format_date(start, format))
        }
        _ => String::new(),
    }
}

fn split_parts(text: &str, delimiter: char) -> Option<[&str; 3]> {
    let mut parts = text.trim().split(delimiter);
    let first = parts.next()?;
    let second = parts.next()?;
    let third = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some([first, second, third])
}

fn build_date(year: &str, month: &str, day: &str) -> Option<CalendarDate> {
    let year = parse_number(year)?;
    let month = u8::try_from(parse_number(month)?).ok()?;
    let day = u8::try_from(parse_number(day)?).ok()?;
    CalendarDate::new(year, month, day)
}

fn parse_number(part: &str) -> Option<i32> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
