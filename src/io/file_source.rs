//! File-read collaborator for the analysis pipelines.
//!
//! Two read disciplines: the *primary* artifact of a request must exist and
//! be readable, or the whole operation fails with an error naming the path.
//! *Secondary* files (bug-pipeline context and frame files) are best-effort:
//! a missing or unreadable file is logged and dropped, and the operation
//! continues with partial results.

use std::path::Path;

use tracing::warn;

use crate::core::errors::{CodesightError, Result};

/// Read the primary target file of a request. Fatal on absence or read
/// failure.
pub fn read_primary<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CodesightError::file_not_found(path.display().to_string()));
    }

    std::fs::read_to_string(path)
        .map_err(|e| CodesightError::io(format!("Failed to read file: {}", path.display()), e))
}

/// Read a secondary file. Returns `None` (with a logged warning) when the
/// file is absent or unreadable; never fails the caller.
pub fn read_secondary<P: AsRef<Path>>(path: P) -> Option<String> {
    let path = path.as_ref();

    if !path.exists() {
        return None;
    }

    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Could not read file");
            None
        }
    }
}
