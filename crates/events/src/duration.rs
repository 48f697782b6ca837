//! Lead time statistics, in hours.

use chrono::TimeDelta;
use serde::Serialize;

/// Fractional hours of `delta`.
pub(crate) fn as_hours(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 / 3600.0
}

/// Arithmetic mean of `durations` in hours. Returns 0.0 if empty.
pub fn mean_hours(durations: &[TimeDelta]) -> f64 {
    if durations.is_empty() {
        return 0.0;
    }
    let sum: f64 = durations.iter().copied().map(as_hours).sum();
    sum / durations.len() as f64
}

/// Median of `durations` in hours. For even length, averages the middle two
/// values. Returns 0.0 if empty.
pub fn median_hours(durations: &[TimeDelta]) -> f64 {
    let mut sorted = durations.to_vec();
    sorted.sort();
    let n = sorted.len();
    match n {
        0 => 0.0,
        _ if n % 2 == 1 => as_hours(sorted[n / 2]),
        _ => (as_hours(sorted[n / 2 - 1]) + as_hours(sorted[n / 2])) / 2.0,
    }
}

/// Average lead time, in days and in hours, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AverageDuration {
    pub days: f64,
    pub hours: f64,
}

impl AverageDuration {
    pub fn from_hours(hours: f64) -> Self {
        Self {
            days: round2(hours / 24.0),
            hours: round2(hours),
        }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
