//! JSON report document built from a bucketed series.

use std::collections::BTreeMap;

use chrono::TimeDelta;
use serde::Serialize;

use cadence_calendar::{Instant, Period};
use cadence_events::{
    AverageDuration, ChangeRequest, Lifecycle, LifecycleSummary, LifecycleTotals, mean_hours,
    median_hours,
};
use cadence_flow::{BucketIndex, Flow, Series, Unit};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Display label of a bucket index: the month name, or `Week N`.
pub fn label(unit: Unit, index: u32) -> String {
    match unit {
        Unit::Month => MONTH_NAMES
            .get(index as usize)
            .map_or_else(|| format!("Month {index}"), |name| (*name).to_string()),
        Unit::Week => format!("Week {index}"),
    }
}

/// Lead times of requests, keyed by the year and bucket index of their end
/// instant.
#[derive(Debug, Default)]
pub struct LeadTimes {
    buckets: BTreeMap<(i32, u32), Vec<TimeDelta>>,
}

impl LeadTimes {
    /// Groups `end - created_at` of every request that reached `lifecycle`
    /// by the `unit` bucket its end instant falls in.
    pub fn collect<'r>(
        requests: impl IntoIterator<Item = &'r ChangeRequest>,
        lifecycle: Lifecycle,
        unit: Unit,
    ) -> Self {
        let mut buckets: BTreeMap<(i32, u32), Vec<TimeDelta>> = BTreeMap::new();
        for request in requests {
            let Some(end) = lifecycle.instant_of(request) else {
                continue;
            };
            let at = BucketIndex::of(&end);
            buckets
                .entry((at.year, at.get(unit)))
                .or_default()
                .push(end - request.created_at);
        }
        Self { buckets }
    }

    /// Lead times of one bucket; empty for a gap-filled bucket.
    pub fn get(&self, year: i32, index: u32) -> &[TimeDelta] {
        self.buckets
            .get(&(year, index))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub period: &'a Period,
    pub unit: Unit,
    pub lifecycle: Lifecycle,
    pub average: AverageDuration,
    pub totals: LifecycleTotals,
    pub years: Vec<YearReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct YearReport<'a> {
    pub year: i32,
    pub flows: Vec<FlowReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct FlowReport<'a> {
    pub index: u32,
    pub label: String,
    pub total: usize,
    pub average_hours: f64,
    pub median_hours: f64,
    pub events: &'a [Instant],
}

impl<'a> FlowReport<'a> {
    fn new(flow: &'a Flow, lead_times: &[TimeDelta]) -> Self {
        Self {
            index: flow.index(),
            label: label(flow.unit(), flow.index()),
            total: flow.total(),
            average_hours: mean_hours(lead_times),
            median_hours: median_hours(lead_times),
            events: flow.events(),
        }
    }
}

impl<'a> Report<'a> {
    /// Lays out the selected unit's flows of `series` per year, each with
    /// the mean and median of its lead times.
    pub fn new(
        series: &'a Series,
        lifecycle: Lifecycle,
        summary: LifecycleSummary,
        lead_times: &LeadTimes,
    ) -> Self {
        let unit = series.unit();
        let years = series
            .years()
            .iter()
            .map(|y| YearReport {
                year: y.year(),
                flows: y
                    .flows(unit)
                    .iter()
                    .map(|f| FlowReport::new(f, lead_times.get(y.year(), f.index())))
                    .collect(),
            })
            .collect();
        Self {
            period: series.period(),
            unit,
            lifecycle,
            average: summary.average,
            totals: summary.total,
            years,
        }
    }
}
