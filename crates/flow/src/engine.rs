//! Entry points: bucket a batch of events over a reporting window.

use tracing::debug;

use cadence_calendar::{Instant, Period};

use crate::error::FlowError;
use crate::flow::Flow;
use crate::partition::YearPartition;
use crate::series::Series;
use crate::unit::Unit;

/// Buckets `events` over `period` using `end_instant` as the bucketing time.
///
/// Events whose end instant is `None` (not completed yet) are skipped. Events
/// are not bounded by `period`; the caller decides which events belong to the
/// window.
#[tracing::instrument(skip_all, fields(n_events = events.len()))]
pub fn bucket_events<E, F>(events: &[E], period: &Period, end_instant: F) -> Series
where
    F: Fn(&E) -> Option<Instant>,
{
    bucket_instants(events.iter().map(end_instant), period)
}

/// Buckets raw end instants over `period`; `None` entries are skipped.
pub fn bucket_instants<I>(instants: I, period: &Period) -> Series
where
    I: IntoIterator<Item = Option<Instant>>,
{
    let unit = Unit::for_period(period);

    let mut pending = 0usize;
    let mut ends: Vec<Instant> = instants
        .into_iter()
        .filter_map(|end| {
            if end.is_none() {
                pending += 1;
            }
            end
        })
        .collect();
    ends.sort();
    debug!(n_completed = ends.len(), n_pending = pending, %unit, "selected granularity");

    let mut partition = YearPartition::new();
    for end in ends {
        partition.record(end);
    }
    partition.fill_gaps(period);

    let series = partition.into_series(unit, *period);
    debug!(
        %unit,
        n_years = series.years().len(),
        n_flows = series.flows().count(),
        "bucketed events"
    );
    series
}

/// Flows of the selected unit for a window whose events fall in one year.
///
/// Returns an empty list when no event completed.
///
/// # Errors
///
/// Returns [`FlowError::MultipleYears`] if the events span several years.
pub fn single_year_flows<E, F>(
    events: &[E],
    period: &Period,
    end_instant: F,
) -> Result<Vec<Flow>, FlowError>
where
    F: Fn(&E) -> Option<Instant>,
{
    let series = bucket_events(events, period, end_instant);
    match series.years() {
        [] => Ok(Vec::new()),
        [only] => Ok(only.flows(series.unit()).to_vec()),
        [first, .., last] => Err(FlowError::MultipleYears {
            first: first.year(),
            last: last.year(),
        }),
    }
}
