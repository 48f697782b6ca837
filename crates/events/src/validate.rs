//! Consistency checks on change request batches.
//!
//! Provides [`ValidationCollector`] for gathering every violation into a
//! single [`EventsError::Validation`], and [`validate_requests`] which checks
//! the lifecycle ordering and identity of a batch.

use std::collections::HashSet;

use crate::error::EventsError;
use crate::request::ChangeRequest;

/// Accumulates validation messages and converts them into a single
/// [`EventsError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// `Ok(())` if nothing was recorded, otherwise every message joined
    /// with `"; "`.
    pub(crate) fn finish(self) -> Result<(), EventsError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(EventsError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Checks that no request completes before it was created and that no
/// `(project_id, id)` pair appears twice.
///
/// # Errors
///
/// Returns [`EventsError::Validation`] listing every violation found.
pub fn validate_requests(requests: &[ChangeRequest]) -> Result<(), EventsError> {
    let mut collector = ValidationCollector::new();
    let mut seen = HashSet::new();

    for r in requests {
        if !seen.insert((r.project_id, r.id)) {
            collector.push(format!("duplicate request {} in project {}", r.id, r.project_id));
        }
        if let Some(merged) = r.merged_at
            && merged < r.created_at
        {
            collector.push(format!("request {} merged before it was created", r.id));
        }
        if let Some(closed) = r.closed_at
            && closed < r.created_at
        {
            collector.push(format!("request {} closed before it was created", r.id));
        }
    }

    collector.finish()
}
