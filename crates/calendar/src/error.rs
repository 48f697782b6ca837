//! Error types for the cadence-calendar crate.

use crate::period::Instant;

/// Error type for all fallible operations in the cadence-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a period starts after it ends.
    #[error("invalid period: start {start} is after end {end}")]
    InvalidPeriod {
        /// The requested start of the period.
        start: Instant,
        /// The requested end of the period.
        end: Instant,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(s: &str) -> Instant {
        s.parse().unwrap()
    }

    #[test]
    fn error_invalid_period() {
        let err = CalendarError::InvalidPeriod {
            start: instant("2023-03-01T00:00:00Z"),
            end: instant("2023-01-01T00:00:00Z"),
        };
        assert_eq!(
            err.to_string(),
            "invalid period: start 2023-03-01 00:00:00 +00:00 is after end 2023-01-01 00:00:00 +00:00"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_clone() {
        let err = CalendarError::InvalidPeriod {
            start: instant("2023-03-01T00:00:00Z"),
            end: instant("2023-01-01T00:00:00Z"),
        };
        assert_eq!(err.clone(), err);
    }
}
