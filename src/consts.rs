/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive), the largest value `yyyy` can render
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in one 400-year Gregorian cycle
pub(crate) const DAYS_PER_ERA: i64 = 146_097;
/// Day number of 1970-01-01 counted from 0000-03-01
pub(crate) const UNIX_EPOCH_DAYS: i64 = 719_468;
/// Weekday index of 1970-01-01 (Thursday, Monday = 0)
pub(crate) const EPOCH_WEEKDAY: i64 = 3;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// ISO pattern used by `Display`/`FromStr` of `CalendarDate`
pub const ISO_PATTERN: &str = "yyyy-MM-dd";

/// Pattern letter for year
pub const YEAR_LETTER: char = 'y';
/// Pattern letter for month
pub const MONTH_LETTER: char = 'M';
/// Pattern letter for day of month
pub const DAY_LETTER: char = 'd';
/// Pattern letter for day of week
pub const WEEKDAY_LETTER: char = 'E';
/// Opens and closes a quoted literal inside a pattern
pub const QUOTE: char = '\'';

/// Two-digit years parse into `TWO_DIGIT_YEAR_BASE..TWO_DIGIT_YEAR_BASE + 100`
pub const TWO_DIGIT_YEAR_BASE: u16 = 2000;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

pub const MONTHS_PER_YEAR: i32 = 12;

/// Korean weekday names, Monday first
pub const WEEKDAY_NAMES_FULL: [&str; 7] = ["월요일", "화요일", "수요일", "목요일", "금요일", "토요일", "일요일"];
/// Abbreviated Korean weekday names, Monday first
pub const WEEKDAY_NAMES_SHORT: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

/// Phrase used when both dates are the same day
pub const TODAY: &str = "오늘";
/// Suffix used when the reference day comes before the target
pub const PAST_SUFFIX: &str = "전";
/// Suffix used when the reference day comes after the target
pub const FUTURE_SUFFIX: &str = "후";
