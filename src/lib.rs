//! Korean-localized calendar date utilities.
//!
//! Formats and parses [`CalendarDate`] values with a small pattern language
//! (`yyyy`, `MM`, `dd`, ...), enumerates day ranges, and renders relative
//! time ("3 일 전"), whole-day durations ("48시간 0분 0초") and weekday names
//! ("금요일"/"금").
//!
//! ```
//! use date_formatter_kr::{CalendarDate, WeekdayStyle, format_date, get_day_of_week, to_relative_time_format};
//!
//! let date = CalendarDate::new(2021, 1, 1).unwrap();
//! assert_eq!(format_date(&date, "yyyy.MM.dd").unwrap(), "2021.01.01");
//! assert_eq!(get_day_of_week(&date, WeekdayStyle::Full), "금요일");
//!
//! let next_year = CalendarDate::new(2022, 1, 1).unwrap();
//! assert_eq!(to_relative_time_format(&date, &next_year), "1 년 전");
//! ```

mod consts;
mod korean;
mod pattern;
mod period;
mod prelude;
mod range;
mod service;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use korean::{DayDuration, RelativeTime, TimeUnit};
pub use pattern::{FormatPattern, PatternError};
pub use period::{Period, days_between};
pub use range::{DateRange, Days};
pub use service::{
    DateError, format_date, get_dates_in_range, get_day_of_week, is_valid_date, parse_date,
    to_duration_time_format, to_relative_time_format,
};
pub use types::{Day, Month, Weekday, WeekdayStyle, Year, days_in_month, is_leap_year};

use crate::consts::{DAYS_PER_ERA, EPOCH_WEEKDAY, GREGORIAN_CYCLE, UNIX_EPOCH_DAYS};
use crate::prelude::*;
use std::str::FromStr;

/// A validated proleptic Gregorian date.
///
/// Field order is year, month, day, so the derived ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Days since 1970-01-01 (negative before it).
    pub fn day_number(&self) -> i64 {
        days_from_civil(i64::from(self.year()), self.month(), self.day())
    }

    /// Inverse of [`CalendarDate::day_number`].
    /// Returns `None` outside years `MIN_YEAR..=MAX_YEAR`.
    pub fn from_day_number(days: i64) -> Option<Self> {
        let (year, month, day) = civil_from_days(days);
        let year = u16::try_from(year).ok()?;
        Self::new(year, month, day).ok()
    }

    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        Self::from_day_number(self.day_number().checked_add(days)?)
    }

    /// The following day, or `None` after 9999-12-31.
    pub fn succ(&self) -> Option<Self> {
        let (year, month, day) = (self.year(), self.month(), self.day());
        if day < days_in_month(year, month) {
            return Self::new(year, month, day + 1).ok();
        }
        if month < DECEMBER {
            return Self::new(year, month + 1, MIN_DAY).ok();
        }
        if year >= MAX_YEAR {
            return None;
        }
        Self::new(year + 1, JANUARY, MIN_DAY).ok()
    }

    /// Adds calendar months, clamping the day to the end of the target month.
    pub fn checked_add_months(&self, months: i32) -> Option<Self> {
        let (year, month, day) = self.shifted_months(i64::from(months));
        let year = u16::try_from(year).ok()?;
        Self::new(year, month, day).ok()
    }

    /// Raw (year, month, day) after adding `months`, day clamped, year unchecked.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn shifted_months(&self, months: i64) -> (i64, u8, u8) {
        let total = self.month_index() + months;
        let year = total.div_euclid(i64::from(MONTHS_PER_YEAR));
        let month = (total.rem_euclid(i64::from(MONTHS_PER_YEAR)) + 1) as u8;
        let max_day = match u16::try_from(year) {
            Ok(y) => days_in_month(y, month),
            Err(_) => DAYS_IN_MONTH[month as usize],
        };
        (year, month, self.day().min(max_day))
    }

    /// Months counted from year 0, January = 0
    pub(crate) fn month_index(&self) -> i64 {
        i64::from(self.year()) * i64::from(MONTHS_PER_YEAR) + i64::from(self.month() - 1)
    }

    pub fn weekday(&self) -> Weekday {
        // rem_euclid(7) keeps the index in 0..7
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (self.day_number() + EPOCH_WEEKDAY).rem_euclid(7) as usize;
        Weekday::ALL[index]
    }

    pub fn length_of_month(&self) -> u8 {
        days_in_month(self.year(), self.month())
    }
}

// Howard Hinnant's civil calendar algorithms, counted from the Unix epoch.
pub(crate) fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let y = if month <= FEBRUARY { year - 1 } else { year };
    let era = y.div_euclid(i64::from(GREGORIAN_CYCLE));
    let yoe = y.rem_euclid(i64::from(GREGORIAN_CYCLE)); // [0, 399]
    let m = i64::from(month);
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(day) - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * DAYS_PER_ERA + doe - UNIX_EPOCH_DAYS
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + UNIX_EPOCH_DAYS;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z.rem_euclid(DAYS_PER_ERA); // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let month = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = yoe + era * i64::from(GREGORIAN_CYCLE) + i64::from(month <= 2);
    (year, month as u8, day as u8)
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses the ISO `yyyy-MM-dd` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        FormatPattern::iso().parse(trimmed)
    }
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = ParseError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<CalendarDate> for (u16, u8, u8) {
    fn from(date: CalendarDate) -> Self {
        (date.year(), date.month(), date.day())
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
