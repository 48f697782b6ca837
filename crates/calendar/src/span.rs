//! Calendar duration between two instants.

use chrono::{Datelike, Months, NaiveDateTime};

use crate::period::Instant;

/// A duration expressed in calendar fields, largest unit first.
///
/// Whole months are counted by calendar month addition from the start, so
/// `Jan 15 -> Mar 15` is two months regardless of February's length. Month
/// addition clamps to the end of shorter months (`Jan 31 + 1 month = Feb 28`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarSpan {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl CalendarSpan {
    /// Computes the span from `start` to `end`, read in `start`'s offset.
    ///
    /// Returns the zero span when `end` is not after `start`.
    pub fn between(start: &Instant, end: &Instant) -> Self {
        if end <= start {
            return Self::default();
        }
        let from = start.naive_local();
        let to = end.with_timezone(&start.timezone()).naive_local();

        let mut months =
            ((to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32).max(0) as u32;
        while months > 0 && add_months(from, months).is_none_or(|anchor| anchor > to) {
            months -= 1;
        }
        let anchor = add_months(from, months).unwrap_or(from);
        let rest = to - anchor;

        Self {
            years: months / 12,
            months: months % 12,
            days: rest.num_days() as u32,
            hours: (rest.num_hours() % 24) as u32,
            minutes: (rest.num_minutes() % 60) as u32,
            seconds: (rest.num_seconds() % 60) as u32,
        }
    }

    /// Whole months including those folded into `years`.
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

fn add_months(from: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
    from.checked_add_months(Months::new(months))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: &str, end: &str) -> CalendarSpan {
        CalendarSpan::between(&start.parse().unwrap(), &end.parse().unwrap())
    }

    #[test]
    fn zero_when_equal() {
        assert_eq!(
            span("2022-02-01T00:00:00Z", "2022-02-01T00:00:00Z"),
            CalendarSpan::default()
        );
    }

    #[test]
    fn zero_when_inverted() {
        assert_eq!(
            span("2022-03-01T00:00:00Z", "2022-02-01T00:00:00Z"),
            CalendarSpan::default()
        );
    }

    #[test]
    fn days_within_month() {
        let s = span("2022-02-01T00:00:00Z", "2022-02-28T00:00:00Z");
        assert_eq!(s.months, 0);
        assert_eq!(s.days, 27);
    }

    #[test]
    fn month_and_days() {
        let s = span("2023-01-01T00:00:00Z", "2023-02-10T00:00:00Z");
        assert_eq!(s.total_months(), 1);
        assert_eq!(s.days, 9);
    }

    #[test]
    fn crosses_year() {
        let s = span("2022-10-01T00:00:00Z", "2023-03-28T00:00:00Z");
        assert_eq!(s.years, 0);
        assert_eq!(s.months, 5);
        assert_eq!(s.days, 27);
    }

    #[test]
    fn years_fold_into_total_months() {
        let s = span("2020-01-01T00:00:00Z", "2021-02-03T00:00:00Z");
        assert_eq!(s.years, 1);
        assert_eq!(s.months, 1);
        assert_eq!(s.days, 2);
        assert_eq!(s.total_months(), 13);
    }

    #[test]
    fn partial_month_not_counted() {
        // Jan 15 -> Feb 14 is one day short of a month.
        let s = span("2022-01-15T00:00:00Z", "2022-02-14T00:00:00Z");
        assert_eq!(s.months, 0);
        assert_eq!(s.days, 30);
    }

    #[test]
    fn end_of_month_clamps() {
        let s = span("2022-01-31T00:00:00Z", "2022-02-28T00:00:00Z");
        assert_eq!(s.months, 1);
        assert_eq!(s.days, 0);
    }

    #[test]
    fn time_fields() {
        let s = span("2022-05-11T12:35:37Z", "2022-05-12T13:40:22Z");
        assert_eq!(s.days, 1);
        assert_eq!(s.hours, 1);
        assert_eq!(s.minutes, 4);
        assert_eq!(s.seconds, 45);
    }

    #[test]
    fn end_read_in_start_offset() {
        // Same instants, end written in a different offset.
        let a = span("2022-01-01T00:00:00+02:00", "2022-02-28T22:00:00Z");
        let b = span("2022-01-01T00:00:00+02:00", "2022-03-01T00:00:00+02:00");
        assert_eq!(a, b);
        assert_eq!(a.months, 2);
        assert_eq!(a.days, 0);
    }
}
