use std::iter::FusedIterator;

use crate::{CalendarDate, days_between, prelude::*};

/// An inclusive range of calendar days.
///
/// A range whose start is after its end is valid and empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}..={end}")]
pub struct DateRange {
    start: CalendarDate,
    end:   CalendarDate,
}

impl DateRange {
    pub const fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of days in the range, zero when empty.
    pub fn len(&self) -> usize {
        usize::try_from(days_between(&self.start, &self.end) + 1).unwrap_or(0)
    }

    /// Every day from start to end, ascending.
    pub fn days(&self) -> Days {
        Days {
            next: (!self.is_empty()).then_some(self.start),
            end:  self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type IntoIter = Days;
    type Item = CalendarDate;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

/// Iterator over the days of a [`DateRange`], stepping one day at a time.
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<CalendarDate>,
    end:  CalendarDate,
}

impl Iterator for Days {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|date| *date <= self.end)?;
        self.next = current.succ();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map_or(0, |next| usize::try_from(days_between(&next, &self.end) + 1).unwrap_or(0));
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}
