//! Short constructors shared by the unit tests.

use crate::CalendarDate;

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

pub fn dates(ymds: &[(u16, u8, u8)]) -> Vec<CalendarDate> {
    ymds.iter().map(|&(y, m, d)| date(y, m, d)).collect()
}
