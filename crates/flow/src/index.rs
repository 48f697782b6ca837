//! Calendar coordinates of a single event.

use chrono::Datelike;

use cadence_calendar::{Instant, month_index, week_index};

use crate::unit::Unit;

/// Where an instant lands: its calendar year and its index in every unit.
///
/// Both indices are always computed, whatever unit a run selects, because
/// the accumulator keeps month and week buckets side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BucketIndex {
    pub year: i32,
    pub month: u32,
    pub week: u32,
}

impl BucketIndex {
    /// Computes the coordinates of `instant` in its own offset.
    pub fn of(instant: &Instant) -> Self {
        Self {
            year: instant.year(),
            month: month_index(instant),
            week: week_index(instant),
        }
    }

    /// Index for one unit.
    pub fn get(&self, unit: Unit) -> u32 {
        match unit {
            Unit::Month => self.month,
            Unit::Week => self.week,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(s: &str) -> BucketIndex {
        BucketIndex::of(&s.parse().unwrap())
    }

    #[test]
    fn mid_year() {
        let idx = index("2021-08-03T09:44:24Z");
        assert_eq!(
            idx,
            BucketIndex {
                year: 2021,
                month: 7,
                week: 32
            }
        );
        assert_eq!(idx.get(Unit::Month), 7);
        assert_eq!(idx.get(Unit::Week), 32);
    }

    #[test]
    fn new_year() {
        let idx = index("2023-01-01T00:00:00Z");
        assert_eq!(idx.year, 2023);
        assert_eq!(idx.month, 0);
        assert_eq!(idx.week, 1);
    }

    #[test]
    fn new_year_eve_stays_in_year() {
        let idx = index("2023-12-31T12:00:00Z");
        assert_eq!(idx.year, 2023);
        assert_eq!(idx.month, 11);
        assert_eq!(idx.week, 53);
    }

    #[test]
    fn offset_moves_year() {
        let idx = index("2022-12-31T23:30:00-01:00");
        assert_eq!(idx.year, 2022);
        let utc = index("2023-01-01T00:30:00Z");
        assert_eq!(utc.year, 2023);
    }
}
