//! A batch of change requests over a reporting window.

use chrono::FixedOffset;
use serde::Serialize;
use tracing::debug;

use cadence_calendar::Period;

use crate::duration::AverageDuration;
use crate::request::{ChangeRequest, Lifecycle};

/// Counts of requests by lifecycle state.
///
/// `merged` and `closed` are counted independently, so a request carrying
/// both instants counts in both. `opened` is neither merged nor closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LifecycleTotals {
    pub merged: usize,
    pub closed: usize,
    pub opened: usize,
    pub all: usize,
}

/// Average time to merge alongside the lifecycle totals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LifecycleSummary {
    pub average: AverageDuration,
    pub total: LifecycleTotals,
}

/// Change requests paired with the window a report covers.
#[derive(Debug, Clone)]
pub struct ChangeRequestSet {
    requests: Vec<ChangeRequest>,
    period: Period,
}

impl ChangeRequestSet {
    pub fn new(requests: Vec<ChangeRequest>, period: Period) -> Self {
        Self { requests, period }
    }

    pub fn period(&self) -> &Period {
        &self.period
    }

    pub fn requests(&self) -> &[ChangeRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Keeps the requests of one project.
    pub fn for_project(self, project_id: u64) -> Self {
        self.retain(|r| r.project_id == project_id, "project")
    }

    /// Keeps the requests created within the window, bounds included.
    pub fn created_within_period(self) -> Self {
        let period = self.period;
        self.retain(|r| period.contains(&r.created_at), "created_within_period")
    }

    /// Expresses the window and every request instant in `offset`.
    pub fn with_offset(self, offset: FixedOffset) -> Self {
        Self {
            requests: self
                .requests
                .into_iter()
                .map(|r| r.with_offset(&offset))
                .collect(),
            period: self.period.with_offset(offset),
        }
    }

    /// Orders the requests by the instant of `lifecycle`, ascending.
    ///
    /// Requests without that instant come last, in their input order.
    pub fn sorted_by(mut self, lifecycle: Lifecycle) -> Self {
        self.requests.sort_by_key(|r| {
            let at = lifecycle.instant_of(r);
            (at.is_none(), at)
        });
        self
    }

    /// Lifecycle state counts over the whole batch.
    pub fn totals(&self) -> LifecycleTotals {
        self.requests
            .iter()
            .fold(LifecycleTotals::default(), |mut totals, r| {
                totals.merged += usize::from(r.is_merged());
                totals.closed += usize::from(r.is_closed());
                totals.opened += usize::from(r.is_open());
                totals.all += 1;
                totals
            })
    }

    /// Mean time from creation to merge over merged requests.
    ///
    /// Each lead time counts in whole hours, truncated. Zero when nothing
    /// was merged.
    pub fn average_merge_time(&self) -> AverageDuration {
        let hours: Vec<i64> = self
            .requests
            .iter()
            .filter_map(|r| r.lead_time(Lifecycle::Merged))
            .map(|d| d.num_hours())
            .collect();
        if hours.is_empty() {
            return AverageDuration::default();
        }
        AverageDuration::from_hours(hours.iter().sum::<i64>() as f64 / hours.len() as f64)
    }

    pub fn summary(&self) -> LifecycleSummary {
        LifecycleSummary {
            average: self.average_merge_time(),
            total: self.totals(),
        }
    }

    fn retain(mut self, keep: impl Fn(&ChangeRequest) -> bool, filter: &str) -> Self {
        let before = self.requests.len();
        self.requests.retain(|r| keep(r));
        debug!(
            filter,
            kept = self.requests.len(),
            dropped = before - self.requests.len(),
            "filtered change requests"
        );
        self
    }
}
