//! Reporting window with validated bounds.

use chrono::{DateTime, Datelike, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::span::CalendarSpan;
use crate::week::week_of_year;

/// A point in time carrying the offset its calendar fields are read in.
pub type Instant = DateTime<FixedOffset>;

/// Returns the 0-based month of the year (January = 0).
pub fn month_index(instant: &Instant) -> u32 {
    instant.month0()
}

/// Returns the week of the year of the instant's local date, in `1..=54`.
///
/// Late December days keep their own year's numbering instead of wrapping to
/// week 1 of the next year, so December 31st is week 53, or week 54 in a leap
/// year starting on a Saturday (2000, 2028). See [`week_of_year`].
pub fn week_index(instant: &Instant) -> u32 {
    week_of_year(instant.date_naive())
}

/// A reporting window `[start, end]` with `start <= end`.
///
/// The bounds are private so the ordering invariant cannot be broken after
/// construction. Deserialization goes through [`Period::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct Period {
    start: Instant,
    end: Instant,
}

#[derive(Deserialize)]
struct RawPeriod {
    start: Instant,
    end: Instant,
}

impl TryFrom<RawPeriod> for Period {
    type Error = CalendarError;

    fn try_from(raw: RawPeriod) -> Result<Self, Self::Error> {
        Period::new(raw.start, raw.end)
    }
}

impl Period {
    /// Creates a new period.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidPeriod`] if `start` is after `end`.
    pub fn new(start: Instant, end: Instant) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first instant of the window.
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Returns the last instant of the window.
    pub fn end(&self) -> Instant {
        self.end
    }

    /// Calendar year of the start instant.
    pub fn start_year(&self) -> i32 {
        self.start.year()
    }

    /// Calendar year of the end instant.
    pub fn end_year(&self) -> i32 {
        self.end.year()
    }

    /// Returns `true` if `instant` lies within the window, bounds included.
    pub fn contains(&self, instant: &Instant) -> bool {
        self.start <= *instant && *instant <= self.end
    }

    /// Calendar duration between start and end.
    pub fn span(&self) -> CalendarSpan {
        CalendarSpan::between(&self.start, &self.end)
    }

    /// Returns the same window with both bounds expressed in `offset`.
    pub fn with_offset(&self, offset: FixedOffset) -> Self {
        Self {
            start: self.start.with_timezone(&offset),
            end: self.end.with_timezone(&offset),
        }
    }
}
