//! A single change request and its lifecycle instants.

use std::fmt;

use chrono::{FixedOffset, TimeDelta};
use serde::{Deserialize, Serialize};

use cadence_calendar::Instant;

/// A change request as reported by a code hosting service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRequest {
    pub project_id: u64,
    pub id: u64,
    pub created_at: Instant,
    #[serde(default)]
    pub merged_at: Option<Instant>,
    #[serde(default)]
    pub closed_at: Option<Instant>,
}

impl ChangeRequest {
    pub fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.closed_at.is_some()
    }

    /// Neither merged nor closed yet.
    pub fn is_open(&self) -> bool {
        !self.is_merged() && !self.is_closed()
    }

    /// Time from creation to the instant of `lifecycle`, if it happened.
    pub fn lead_time(&self, lifecycle: Lifecycle) -> Option<TimeDelta> {
        lifecycle.instant_of(self).map(|end| end - self.created_at)
    }

    /// Returns the request with every instant expressed in `offset`.
    pub fn with_offset(self, offset: &FixedOffset) -> Self {
        Self {
            created_at: self.created_at.with_timezone(offset),
            merged_at: self.merged_at.map(|t| t.with_timezone(offset)),
            closed_at: self.closed_at.map(|t| t.with_timezone(offset)),
            ..self
        }
    }
}

/// Which lifecycle instant of a request a report counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    Created,
    Merged,
    Closed,
}

impl Lifecycle {
    /// The instant of `request` for this lifecycle step, if it happened.
    pub fn instant_of(self, request: &ChangeRequest) -> Option<Instant> {
        match self {
            Lifecycle::Created => Some(request.created_at),
            Lifecycle::Merged => request.merged_at,
            Lifecycle::Closed => request.closed_at,
        }
    }
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lifecycle::Created => f.write_str("created"),
            Lifecycle::Merged => f.write_str("merged"),
            Lifecycle::Closed => f.write_str("closed"),
        }
    }
}
