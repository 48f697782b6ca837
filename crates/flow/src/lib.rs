//! Period bucketing and gap filling for timestamped events.
//!
//! Events are folded into calendar buckets ("flows") per year, by month and
//! by week, then every bucket index the reporting window covers is made
//! present, with zero counts where nothing happened.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │ Unit::for_   │────▶│ YearPartition  │────▶│ fill_gaps +      │
//!  │ period       │     │ ::record       │     │ into_series      │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! Both month and week buckets are accumulated for every year touched, but
//! only the unit selected from the period is the public output of a run
//! ([`Series::flows`]).
//!
//! # Quick start
//!
//! ```ignore
//! use cadence_calendar::Period;
//! use cadence_flow::bucket_events;
//!
//! let period = Period::new(start, end)?;
//! let series = bucket_events(&merge_requests, &period, |mr| mr.merged_at);
//! for flow in series.flows() {
//!     println!("{} {}: {}", series.unit(), flow.index(), flow.total());
//! }
//! ```

mod engine;
mod error;
mod flow;
mod index;
mod partition;
mod range;
mod series;
mod unit;

pub use engine::{bucket_events, bucket_instants, single_year_flows};
pub use error::FlowError;
pub use flow::Flow;
pub use index::BucketIndex;
pub use partition::YearPartition;
pub use range::PeriodIndexes;
pub use series::{Series, YearFlows};
pub use unit::Unit;
