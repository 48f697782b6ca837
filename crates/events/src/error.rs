//! Error types for cadence-events.

use std::path::PathBuf;

/// Error type for all fallible operations in the cadence-events crate.
#[derive(Debug, thiserror::Error)]
pub enum EventsError {
    /// Returned when the event file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when the event file exists but cannot be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Returned when the event file is not a valid JSON array of requests.
    #[error("invalid event data: {reason}")]
    Parse {
        /// Description of the decoding failure.
        reason: String,
    },

    /// Returned when one or more consistency checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

impl From<serde_json::Error> for EventsError {
    fn from(e: serde_json::Error) -> Self {
        EventsError::Parse {
            reason: e.to_string(),
        }
    }
}
