//! Reading change request batches from JSON.

use std::path::Path;

use tracing::{debug, info};

use crate::error::EventsError;
use crate::request::ChangeRequest;

/// Reads a JSON array of change requests from `path`.
///
/// # Errors
///
/// Returns [`EventsError::FileNotFound`] if the file does not exist,
/// [`EventsError::Io`] if it cannot be read, and [`EventsError::Parse`] if
/// its content is not a JSON array of requests.
pub fn read_change_requests(path: impl AsRef<Path>) -> Result<Vec<ChangeRequest>, EventsError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(EventsError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), "reading change requests");
    let content = std::fs::read_to_string(path).map_err(|source| EventsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let requests = parse_change_requests(&content)?;
    info!(path = %path.display(), n_requests = requests.len(), "change requests loaded");
    Ok(requests)
}

/// Parses a JSON array of change requests.
///
/// # Errors
///
/// Returns [`EventsError::Parse`] on malformed input.
pub fn parse_change_requests(json: &str) -> Result<Vec<ChangeRequest>, EventsError> {
    Ok(serde_json::from_str(json)?)
}
