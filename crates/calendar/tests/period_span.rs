use chrono::Duration;
use proptest::prelude::*;

use cadence_calendar::{CalendarError, CalendarSpan, Instant, Period};

fn instant(s: &str) -> Instant {
    s.parse().unwrap()
}

#[test]
fn period_span_matches_free_function() {
    let period = Period::new(
        instant("2023-01-01T00:00:00Z"),
        instant("2023-03-24T00:00:00Z"),
    )
    .unwrap();
    let span = period.span();
    assert_eq!(span, CalendarSpan::between(&period.start(), &period.end()));
    assert_eq!(span.total_months(), 2);
    assert_eq!(span.days, 23);
}

#[test]
fn inverted_period_is_rejected() {
    let result = Period::new(
        instant("2023-01-02T00:00:00Z"),
        instant("2023-01-01T00:00:00Z"),
    );
    assert!(matches!(result, Err(CalendarError::InvalidPeriod { .. })));
}

#[test]
fn full_year_window() {
    let span = Period::new(
        instant("2020-01-01T00:00:00Z"),
        instant("2020-12-31T00:00:00Z"),
    )
    .unwrap()
    .span();
    assert_eq!(span.total_months(), 11);
    assert_eq!(span.days, 30);
}

proptest! {
    #[test]
    fn total_months_never_decreases_when_widening(
        start_days in 0i64..3650,
        width in 0i64..1000,
        extra in 0i64..200,
    ) {
        let base = instant("2015-01-01T00:00:00Z");
        let start = base + Duration::days(start_days);
        let narrow = CalendarSpan::between(&start, &(start + Duration::days(width)));
        let wide = CalendarSpan::between(&start, &(start + Duration::days(width + extra)));
        prop_assert!(wide.total_months() >= narrow.total_months());
        if wide.total_months() == narrow.total_months() {
            prop_assert!(wide.days >= narrow.days);
        }
    }
}
