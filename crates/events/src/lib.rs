//! Change request lifecycle events for the cadence reports.
//!
//! A change request (merge request, pull request) is created, then merged or
//! closed, or stays open. This crate holds that model, the lifecycle totals
//! and lead times of a batch, consistency checks, and reading batches from
//! JSON files.
//!
//! # Quick start
//!
//! ```ignore
//! use cadence_events::{ChangeRequestSet, Lifecycle, read_change_requests};
//!
//! let requests = read_change_requests("events.json")?;
//! let set = ChangeRequestSet::new(requests, period)
//!     .for_project(42)
//!     .sorted_by(Lifecycle::Merged);
//! let summary = set.summary();
//! ```

mod duration;
mod error;
mod io;
mod request;
mod set;
mod validate;

pub use duration::{AverageDuration, mean_hours, median_hours};
pub use error::EventsError;
pub use io::{parse_change_requests, read_change_requests};
pub use request::{ChangeRequest, Lifecycle};
pub use set::{ChangeRequestSet, LifecycleSummary, LifecycleTotals};
pub use validate::validate_requests;
