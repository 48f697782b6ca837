//! A single calendar bucket.

use serde::Serialize;

use cadence_calendar::Instant;

use crate::unit::Unit;

/// Count of events landing in one calendar bucket, with their instants.
///
/// `total` always equals `events.len()`; a gap-filled flow has neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flow {
    unit: Unit,
    index: u32,
    total: usize,
    events: Vec<Instant>,
}

impl Flow {
    /// Creates a flow holding its first event.
    pub(crate) fn first(unit: Unit, index: u32, instant: Instant) -> Self {
        Self {
            unit,
            index,
            total: 1,
            events: vec![instant],
        }
    }

    /// Creates a zero-count flow for an index with no events.
    pub fn empty(unit: Unit, index: u32) -> Self {
        Self {
            unit,
            index,
            total: 0,
            events: Vec::new(),
        }
    }

    /// Appends one more event to this bucket.
    pub(crate) fn record(&mut self, instant: Instant) {
        self.events.push(instant);
        self.total += 1;
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Number of events in the bucket.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Instants of the events in the bucket, in recording order.
    pub fn events(&self) -> &[Instant] {
        &self.events
    }

    /// Returns `true` for a gap-filled bucket.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
