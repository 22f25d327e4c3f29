//! Timestamp clock and ISO-8601 text handling.
//!
//! The text form carries microseconds, so every timestamp a record holds is
//! truncated to microsecond precision. That keeps serialize/reconstruct exact.

use crate::error::ParseError;
use chrono::format::{Parsed, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Fractional digits kept in memory and on the wire.
const SUBSEC_DIGITS: u16 = 6;
/// Output format for [`TimestampStyle::Naive`].
const NAIVE_OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
/// Offset-less date-time input formats, most precise first. `%.f` also
/// matches a missing fraction.
const NAIVE_INPUT_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
/// Hour-only input; the minute is filled in as zero.
const HOUR_INPUT_FORMAT: &str = "%Y-%m-%dT%H";
/// Byte offset of the date/time separator in `YYYY-MM-DD?HH...`.
const SEPARATOR_INDEX: usize = 10;
/// Date-only input, read as midnight.
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// How timestamps are written into a record mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampStyle {
    /// RFC 3339 in UTC, e.g. `2020-01-01T00:00:00.000000Z`.
    #[default]
    Rfc3339,
    /// Offset-less ISO-8601, e.g. `2020-01-01T00:00:00.000000`.
    Naive,
}

/// Current wall-clock time at record precision.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(SUBSEC_DIGITS)
}

/// Render a timestamp in the given style.
pub fn format(timestamp: &DateTime<Utc>, style: TimestampStyle) -> String {
    match style {
        TimestampStyle::Rfc3339 => timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
        TimestampStyle::Naive => timestamp
            .naive_utc()
            .format(NAIVE_OUTPUT_FORMAT)
            .to_string(),
    }
}

/// Parse ISO-8601 text for `field`.
///
/// Text with an offset is normalized to UTC; text without one is taken as UTC.
/// Reduced precision is accepted down to a bare date, and missing components
/// are zero. Surrounding whitespace is not ISO-8601 and is rejected.
pub fn parse(field: &str, text: &str) -> Result<DateTime<Utc>, ParseError> {
    canonical_separator(text)
        .and_then(|canonical| match DateTime::parse_from_rfc3339(&canonical) {
            Ok(parsed) => Some(parsed.with_timezone(&Utc)),
            Err(_) => parse_naive(&canonical).map(|naive| naive.and_utc()),
        })
        .map(|timestamp| timestamp.trunc_subsecs(SUBSEC_DIGITS))
        .ok_or_else(|| ParseError::InvalidTimestamp {
            field: field.to_string(),
            value: text.to_string(),
        })
}

/// Swap a space date/time separator for `T`; any other whitespace is invalid.
///
/// chrono's format parser skips blanks before numeric fields, so they are
/// ruled out here rather than left to the formats.
fn canonical_separator(text: &str) -> Option<Cow<'_, str>> {
    let canonical = match text.as_bytes().get(SEPARATOR_INDEX) {
        Some(b' ') => Cow::Owned(format!(
            "{}T{}",
            &text[..SEPARATOR_INDEX],
            &text[SEPARATOR_INDEX + 1..]
        )),
        _ => Cow::Borrowed(text),
    };
    (!canonical.contains(char::is_whitespace)).then_some(canonical)
}

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    NAIVE_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| parse_hour_only(text))
        .or_else(|| {
            NaiveDate::parse_from_str(text, DATE_INPUT_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// chrono needs a minute to build a time, so supply it after parsing.
fn parse_hour_only(text: &str) -> Option<NaiveDateTime> {
    let mut parsed = Parsed::new();
    chrono::format::parse(&mut parsed, text, StrftimeItems::new(HOUR_INPUT_FORMAT)).ok()?;
    parsed.set_minute(0).ok()?;
    parsed.to_naive_datetime_with_offset(0).ok()
}
