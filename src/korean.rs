//! Korean phrases for relative time and whole-day durations.

use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, FUTURE_SUFFIX, PAST_SUFFIX, Period, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE, TODAY, days_between, prelude::*,
};

/// Calendar unit named in a relative-time phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum TimeUnit {
    #[display(fmt = "년")]
    Years,
    #[display(fmt = "개월")]
    Months,
    #[display(fmt = "일")]
    Days,
}

/// A relative-time phrase such as "3 개월 전", "1 일 후" or "오늘".
///
/// Only the largest nonzero unit is kept; units are never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum RelativeTime {
    #[display(fmt = "{}", TODAY)]
    Today,
    /// The reference day comes before the target.
    #[display(fmt = "{} {} {}", amount, unit, PAST_SUFFIX)]
    Past { amount: u64, unit: TimeUnit },
    /// The reference day comes after the target.
    #[display(fmt = "{} {} {}", amount, unit, FUTURE_SUFFIX)]
    Future { amount: u64, unit: TimeUnit },
}

impl RelativeTime {
    /// Describes `target` as seen from `reference`.
    ///
    /// The calendar period from `target` to `reference` is tested years
    /// first, then months, then days; a negative period reads as "전".
    pub fn between(reference: &CalendarDate, target: &CalendarDate) -> Self {
        let period = Period::between(target, reference);
        let past = period.is_negative();
        let period = if past { period.negated() } else { period };

        let (amount, unit) = if period.years > 0 {
            (period.years, TimeUnit::Years)
        } else if period.months > 0 {
            (period.months, TimeUnit::Months)
        } else if period.days > 0 {
            (period.days, TimeUnit::Days)
        } else {
            return Self::Today;
        };

        let amount = amount.unsigned_abs();
        if past {
            Self::Past { amount, unit }
        } else {
            Self::Future { amount, unit }
        }
    }
}

/// A whole-day span rendered as hours, minutes and seconds ("48시간 0분 0초").
///
/// Components truncate toward zero, so a negative span has negative parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[display(fmt = "{hours}시간 {minutes}분 {seconds}초")]
pub struct DayDuration {
    pub hours:   i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl DayDuration {
    pub const fn from_seconds(total: i64) -> Self {
        Self {
            hours:   total / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    pub const fn from_days(days: i64) -> Self {
        Self::from_seconds(days.saturating_mul(SECONDS_PER_DAY))
    }

    /// Span from `start` to `end` in whole days; negative when `end` is earlier.
    pub fn between(start: &CalendarDate, end: &CalendarDate) -> Self {
        Self::from_days(days_between(start, end))
    }
}
