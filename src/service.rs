//! The date service: stateless functions over [`CalendarDate`] and pattern strings.
//!
//! Operations that can fail report a [`DateError`]; `is_valid_date` is the
//! only check that folds every failure into `false`.

use tracing::{debug, trace};

use crate::{
    CalendarDate, DateRange, DayDuration, FormatPattern, ParseError, PatternError, RelativeTime,
    WeekdayStyle,
};

/// Error type for the date service operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// A required input is missing or empty, or the pattern is malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The pattern is fine but the text does not match it or names a date
    /// that does not exist.
    #[error("Cannot parse '{text}' with pattern '{pattern}': {source}")]
    ParseFailure {
        text:    String,
        pattern: String,
        #[source]
        source:  ParseError,
    },
}

impl From<PatternError> for DateError {
    fn from(err: PatternError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

fn compile(pattern: &str) -> Result<FormatPattern, DateError> {
    FormatPattern::compile(pattern).map_err(|err| {
        debug!(pattern, error = %err, "rejected format pattern");
        DateError::from(err)
    })
}

/// Renders `date` with `pattern`.
///
/// # Errors
/// Returns `DateError::InvalidArgument` if the pattern is empty or uses an
/// unsupported token.
pub fn format_date(date: &CalendarDate, pattern: &str) -> Result<String, DateError> {
    Ok(compile(pattern)?.format(date))
}

/// Parses `text` with `pattern`. Invalid calendar dates are rejected, never adjusted.
///
/// # Errors
/// Returns `DateError::InvalidArgument` for an empty text or a bad pattern,
/// and `DateError::ParseFailure` when the text does not match the pattern or
/// is not a real date.
pub fn parse_date(text: &str, pattern: &str) -> Result<CalendarDate, DateError> {
    if text.is_empty() {
        return Err(DateError::InvalidArgument("date text must not be empty".to_owned()));
    }
    let compiled = compile(pattern)?;
    compiled.parse(text).map_err(|source| {
        debug!(text, pattern, error = %source, "date text did not parse");
        DateError::ParseFailure {
            text: text.to_owned(),
            pattern: pattern.to_owned(),
            source,
        }
    })
}

/// Whether `text` parses with `pattern`. Never fails: missing input, a bad
/// pattern, a mismatch and an impossible date all give `false`.
pub fn is_valid_date<'a>(text: impl Into<Option<&'a str>>, pattern: impl Into<Option<&'a str>>) -> bool {
    match (text.into(), pattern.into()) {
        (Some(text), Some(pattern)) => parse_date(text, pattern).is_ok(),
        _ => false,
    }
}

/// Every day from `start` to `end` inclusive, ascending. Empty when `start` is after `end`.
pub fn get_dates_in_range(start: &CalendarDate, end: &CalendarDate) -> Vec<CalendarDate> {
    let range = DateRange::new(*start, *end);
    trace!(%range, days = range.len(), "enumerating date range");
    range.days().collect()
}

/// Relative phrase for `target` seen from `reference`, e.g. "1 년 전", "2 일 후" or "오늘".
pub fn to_relative_time_format(reference: &CalendarDate, target: &CalendarDate) -> String {
    RelativeTime::between(reference, target).to_string()
}

/// Whole-day span from `start` to `end` as "<H>시간 <M>분 <S>초".
pub fn to_duration_time_format(start: &CalendarDate, end: &CalendarDate) -> String {
    DayDuration::between(start, end).to_string()
}

/// Korean weekday name of `date` ("금요일" or "금").
pub fn get_day_of_week(date: &CalendarDate, style: WeekdayStyle) -> &'static str {
    date.weekday().korean_name(style)
}
