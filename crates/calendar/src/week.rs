//! Week-of-year numbering.
//!
//! Weeks start on Sunday and week 1 is the week containing January 1st, so
//! the first week of a year is usually partial. Late December days keep
//! counting within their own calendar year instead of rolling over into the
//! following year's week 1. A week index therefore always belongs to the
//! calendar year of the date it was computed from, and ranges `1..=54`.

use chrono::{Datelike, NaiveDate};

/// Returns the Sunday-start week of the year for `date`.
///
/// # Examples
///
/// ```ignore
/// // 2022-01-01 is a Saturday: it alone forms week 1.
/// assert_eq!(week_of_year(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()), 1);
/// assert_eq!(week_of_year(NaiveDate::from_ymd_opt(2022, 1, 2).unwrap()), 2);
/// ```
pub fn week_of_year(date: NaiveDate) -> u32 {
    let ordinal0 = date.ordinal0();
    let weekday = date.weekday().num_days_from_sunday();
    let jan1_weekday = (weekday + 7 - ordinal0 % 7) % 7;
    (ordinal0 + jan1_weekday) / 7 + 1
}

/// Returns the week index of December 31st of `year`.
pub fn last_week_of_year(year: i32) -> u32 {
    let days = if is_leap_year(year) { 366 } else { 365 };
    (days - 1 + jan1_weekday(year)) / 7 + 1
}

/// Gregorian leap year rule.
pub(crate) fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Weekday of January 1st, counted from Sunday = 0 (Gauss).
fn jan1_weekday(year: i32) -> u32 {
    let y = year - 1;
    (1 + 5 * y.rem_euclid(4) + 4 * y.rem_euclid(100) + 6 * y.rem_euclid(400)).rem_euclid(7) as u32
}
