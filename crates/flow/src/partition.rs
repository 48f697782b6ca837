//! Per-year accumulation of month and week buckets.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use cadence_calendar::{Instant, Period};

use crate::flow::Flow;
use crate::index::BucketIndex;
use crate::range::PeriodIndexes;
use crate::series::{Series, YearFlows};
use crate::unit::Unit;

/// Month and week buckets of one year, keyed by index.
#[derive(Debug, Default)]
struct YearBuckets {
    month: BTreeMap<u32, Flow>,
    week: BTreeMap<u32, Flow>,
}

impl YearBuckets {
    fn by_unit_mut(&mut self, unit: Unit) -> &mut BTreeMap<u32, Flow> {
        match unit {
            Unit::Month => &mut self.month,
            Unit::Week => &mut self.week,
        }
    }
}

/// Owned arena of flows keyed by `(year, unit, index)`.
///
/// A year appears as soon as one event lands in it, and always carries both
/// units. Years without any event are never created, even when they lie
/// inside the reporting window.
#[derive(Debug, Default)]
pub struct YearPartition {
    years: BTreeMap<i32, YearBuckets>,
}

impl YearPartition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one event to its month bucket and its week bucket.
    pub fn record(&mut self, instant: Instant) {
        let at = BucketIndex::of(&instant);
        trace!(year = at.year, month = at.month, week = at.week, "recording event");
        let buckets = self.years.entry(at.year).or_default();
        for unit in Unit::ALL {
            let index = at.get(unit);
            buckets
                .by_unit_mut(unit)
                .entry(index)
                .and_modify(|flow| flow.record(instant))
                .or_insert_with(|| Flow::first(unit, index, instant));
        }
    }

    /// Years with at least one event, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Inserts an empty flow at every index `period` requires for each year
    /// and unit that has none yet.
    pub fn fill_gaps(&mut self, period: &Period) {
        for (&year, buckets) in &mut self.years {
            for unit in Unit::ALL {
                let range = PeriodIndexes::resolve(year, period, unit);
                let flows = buckets.by_unit_mut(unit);
                let observed = flows.len();
                for index in range.indices() {
                    flows
                        .entry(index)
                        .or_insert_with(|| Flow::empty(unit, index));
                }
                debug!(
                    year,
                    %unit,
                    first = range.first(),
                    last = range.last(),
                    filled = flows.len() - observed,
                    "filled empty periods"
                );
            }
        }
    }

    /// Freezes the partition into a series, years and indices ascending.
    pub fn into_series(self, unit: Unit, period: Period) -> Series {
        let years = self
            .years
            .into_iter()
            .map(|(year, buckets)| {
                YearFlows::new(
                    year,
                    buckets.month.into_values().collect(),
                    buckets.week.into_values().collect(),
                )
            })
            .collect();
        Series::new(unit, period, years)
    }
}
