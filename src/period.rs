use serde::{Deserialize, Serialize};

use crate::{CalendarDate, MONTHS_PER_YEAR, days_from_civil, prelude::*};

/// A calendar period: whole years, months and days between two dates.
///
/// Nonzero components always share one sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[display(fmt = "P{years}Y{months}M{days}D")]
pub struct Period {
    pub years:  i64,
    pub months: i64,
    pub days:   i64,
}

impl Period {
    pub const ZERO: Self = Self {
        years:  0,
        months: 0,
        days:   0,
    };

    pub const fn new(years: i64, months: i64, days: i64) -> Self {
        Self { years, months, days }
    }

    /// Calendar period from `start` to `end`.
    ///
    /// Months are counted first. If the day-of-month difference points the
    /// other way, one month is given back: forwards, the remaining days run
    /// from `start` plus the counted months (day clamped) up to `end`;
    /// backwards, the day difference is reduced by the length of `end`'s month.
    /// So 2021-02-01 to 2021-03-01 is one month, not 28 days.
    pub fn between(start: &CalendarDate, end: &CalendarDate) -> Self {
        let mut total_months = end.month_index() - start.month_index();
        let mut days = i64::from(end.day()) - i64::from(start.day());

        if total_months > 0 && days < 0 {
            total_months -= 1;
            let (year, month, day) = start.shifted_months(total_months);
            days = end.day_number() - days_from_civil(year, month, day);
        } else if total_months < 0 && days > 0 {
            total_months += 1;
            days -= i64::from(end.length_of_month());
        }

        let per_year = i64::from(MONTHS_PER_YEAR);
        Self {
            years: total_months / per_year,
            months: total_months % per_year,
            days,
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// True if any component is negative.
    pub const fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    #[must_use]
    pub const fn negated(&self) -> Self {
        Self {
            years:  -self.years,
            months: -self.months,
            days:   -self.days,
        }
    }
}

/// Whole days from `start` to `end`; negative when `end` is earlier.
pub fn days_between(start: &CalendarDate, end: &CalendarDate) -> i64 {
    end.day_number() - start.day_number()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_between_cases() {
        struct TestCase {
            start:       (u16, u8, u8),
            end:         (u16, u8, u8),
            expected:    Period,
            description: &'static str,
        }

        let cases = [
            TestCase {
                start:       (2021, 1, 1),
                end:         (2021, 1, 1),
                expected:    Period::ZERO,
                description: "same day",
            },
            TestCase {
                start:       (2021, 1, 1),
                end:         (2022, 1, 1),
                expected:    Period::new(1, 0, 0),
                description: "one year forwards",
            },
            TestCase {
                start:       (2022, 1, 1),
                end:         (2021, 1, 1),
                expected:    Period::new(-1, 0, 0),
                description: "one year backwards",
            },
            TestCase {
                start:       (2021, 2, 1),
                end:         (2021, 3, 1),
                expected:    Period::new(0, 1, 0),
                description: "February counts as one month",
            },
            TestCase {
                start:       (2021, 1, 31),
                end:         (2021, 3, 1),
                expected:    Period::new(0, 1, 1),
                description: "forwards carry uses clamped start plus months",
            },
            TestCase {
                start:       (2021, 3, 1),
                end:         (2021, 1, 31),
                expected:    Period::new(0, -1, -1),
                description: "backwards carry subtracts end month length",
            },
            TestCase {
                start:       (2021, 1, 15),
                end:         (2021, 2, 10),
                expected:    Period::new(0, 0, 26),
                description: "under a month is days only",
            },
            TestCase {
                start:       (2020, 2, 29),
                end:         (2021, 2, 28),
                expected:    Period::new(0, 11, 30),
                description: "leap day to the next February",
            },
            TestCase {
                start:       (2019, 6, 10),
                end:         (2021, 9, 5),
                expected:    Period::new(2, 2, 26),
                description: "mixed components",
            },
        ];

        for case in &cases {
            let start = date(case.start.0, case.start.1, case.start.2);
            let end = date(case.end.0, case.end.1, case.end.2);
            assert_eq!(Period::between(&start, &end), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_sign_helpers() {
        assert!(Period::ZERO.is_zero());
        assert!(!Period::ZERO.is_negative());
        assert!(Period::new(0, 0, -1).is_negative());
        assert_eq!(Period::new(1, -2, 3).negated(), Period::new(-1, 2, -3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Period::new(2, 2, 26).to_string(), "P2Y2M26D");
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(&date(2021, 1, 1), &date(2021, 1, 3)), 2);
        assert_eq!(days_between(&date(2021, 1, 3), &date(2021, 1, 1)), -2);
        assert_eq!(days_between(&date(2020, 1, 1), &date(2021, 1, 1)), 366);
        assert_eq!(days_between(&date(2021, 5, 5), &date(2021, 5, 5)), 0);
    }
}
