//! Read-only file access with path-aware errors

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read a file if it exists.
///
/// Returns `Ok(None)` when the file is missing; any other failure is an error.
pub fn read_text_if_exists(path: &Path) -> Result<Option<String>> {
    match read_text(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
