//! # cadence-calendar
//!
//! Calendar arithmetic for reporting windows over timestamped events.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Instant"] -->|"month_index()"| B["month 0..=11"]
//!     A -->|"week_index()"| C["week 1..=54"]
//!     D["Period::new(start, end)"] -->|".span()"| E["CalendarSpan"]
//!     F["year"] -->|"last_week_of_year()"| C
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use cadence_calendar::{Period, month_index, week_index, last_week_of_year};
//!
//! let start = "2022-10-01T00:00:00Z".parse()?;
//! let end = "2023-03-28T00:00:00Z".parse()?;
//! let period = Period::new(start, end)?;
//!
//! let span = period.span();
//! assert_eq!(span.total_months(), 5);
//!
//! assert_eq!(month_index(&period.start()), 9); // October
//! assert_eq!(last_week_of_year(2022), 53);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `period` | Validated reporting window and the `Instant` alias |
//! | `span` | Calendar duration broken into years, months, days |
//! | `week` | Sunday-start week-of-year numbering |
//! | `error` | Error types |

mod error;
mod period;
mod span;
mod week;

pub use error::CalendarError;
pub use period::{Instant, Period, month_index, week_index};
pub use span::CalendarSpan;
pub use week::{last_week_of_year, week_of_year};
