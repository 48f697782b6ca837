//! Bucket granularity.

use std::fmt;

use serde::{Deserialize, Serialize};

use cadence_calendar::{CalendarSpan, Instant, Period, last_week_of_year, month_index, week_index};

/// Granularity of a bucket: calendar week or calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Unit {
    Week,
    Month,
}

impl Unit {
    /// Every unit, in the order the accumulator keeps them.
    pub const ALL: [Unit; 2] = [Unit::Month, Unit::Week];

    /// Selects the granularity for a reporting window.
    ///
    /// Month when the window spans more than one whole month and months plus
    /// leftover days exceed two; week otherwise. A window of roughly two
    /// months or less is therefore bucketed by week.
    pub fn for_period(period: &Period) -> Self {
        Self::for_span(&period.span())
    }

    /// Granularity rule applied to an already computed span.
    pub fn for_span(span: &CalendarSpan) -> Self {
        let months = span.total_months();
        if months > 1 && months + span.days > 2 {
            Unit::Month
        } else {
            Unit::Week
        }
    }

    /// Bucket index of `instant` in this unit.
    pub fn index_of(self, instant: &Instant) -> u32 {
        match self {
            Unit::Month => month_index(instant),
            Unit::Week => week_index(instant),
        }
    }

    /// First index of a year's index space.
    pub fn start_of_year(self) -> u32 {
        match self {
            Unit::Month => 0,
            Unit::Week => 1,
        }
    }

    /// Exclusive upper bound of `year`'s index space.
    pub fn end_of_year(self, year: i32) -> u32 {
        match self {
            Unit::Month => 12,
            Unit::Week => last_week_of_year(year) + 1,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Week => f.write_str("Week"),
            Unit::Month => f.write_str("Month"),
        }
    }
}
