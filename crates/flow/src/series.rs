//! Finished, gap-free bucket series.

use cadence_calendar::Period;

use crate::flow::Flow;
use crate::unit::Unit;

/// Month and week flows of one calendar year, each sorted by index.
#[derive(Debug, Clone, PartialEq)]
pub struct YearFlows {
    year: i32,
    month: Vec<Flow>,
    week: Vec<Flow>,
}

impl YearFlows {
    pub(crate) fn new(year: i32, month: Vec<Flow>, week: Vec<Flow>) -> Self {
        Self { year, month, week }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Flows of `unit`, ascending by index.
    pub fn flows(&self, unit: Unit) -> &[Flow] {
        match unit {
            Unit::Month => &self.month,
            Unit::Week => &self.week,
        }
    }
}

/// Result of one bucketing run.
///
/// Years are ascending and every flow list is gap-free over the range the
/// reporting window requires. Only the flows of [`Series::unit`] are meant for
/// consumers; the other unit is kept per year because it was accumulated
/// alongside, and is reachable through [`YearFlows::flows`].
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    unit: Unit,
    period: Period,
    years: Vec<YearFlows>,
}

impl Series {
    pub(crate) fn new(unit: Unit, period: Period, years: Vec<YearFlows>) -> Self {
        Self {
            unit,
            period,
            years,
        }
    }

    /// Granularity selected for the run.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn period(&self) -> &Period {
        &self.period
    }

    /// Years that received at least one event, ascending.
    pub fn years(&self) -> &[YearFlows] {
        &self.years
    }

    pub fn year(&self, year: i32) -> Option<&YearFlows> {
        self.years.iter().find(|y| y.year == year)
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Flows of the selected unit in chronological order across years.
    pub fn flows(&self) -> impl Iterator<Item = &Flow> + '_ {
        self.years.iter().flat_map(|y| y.flows(self.unit))
    }

    /// Indices of [`Series::flows`], in the same order.
    pub fn indices(&self) -> Vec<u32> {
        self.flows().map(Flow::index).collect()
    }

    /// Number of bucketed events.
    pub fn total(&self) -> usize {
        self.flows().map(Flow::total).sum()
    }
}
