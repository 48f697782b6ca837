//! Index range a year must cover within a reporting window.

use std::ops::Range;

use cadence_calendar::Period;

use crate::unit::Unit;

/// Half-open range `[first, last)` of bucket indices for one year and unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodIndexes {
    first: u32,
    last: u32,
}

impl PeriodIndexes {
    /// Resolves the range `year` must cover for `period` in `unit`.
    ///
    /// Starts from the indices of the period's own bounds. A year that is not
    /// the period's last year runs to the end of its index space; a year that
    /// is not the period's first year starts at the beginning of it. Both
    /// adjustments apply to a year strictly inside a multi-year window.
    pub fn resolve(year: i32, period: &Period, unit: Unit) -> Self {
        let mut first = unit.index_of(&period.start());
        let mut last = unit.index_of(&period.end()) + 1;
        if year != period.end_year() {
            last = unit.end_of_year(year);
        }
        if year != period.start_year() {
            first = unit.start_of_year();
        }
        Self { first, last }
    }

    /// First index, inclusive.
    pub fn first(&self) -> u32 {
        self.first
    }

    /// Last index, exclusive.
    pub fn last(&self) -> u32 {
        self.last
    }

    /// Every index of the range, ascending. Empty when `first >= last`.
    pub fn indices(&self) -> Range<u32> {
        self.first..self.last
    }
}
