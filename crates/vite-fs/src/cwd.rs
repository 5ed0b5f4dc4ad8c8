//! Scoped working-directory changes
//!
//! The process working directory is global state. [`WorkingDirGuard`] restores
//! the previous directory when dropped, which also happens while unwinding
//! from a panic.

use std::env;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Restores the previous working directory on drop.
#[derive(Debug)]
#[must_use = "the previous directory is restored as soon as the guard is dropped"]
pub struct WorkingDirGuard {
    previous: PathBuf,
}

impl WorkingDirGuard {
    /// Change into `dir`, remembering the current directory.
    pub fn enter(dir: &Path) -> Result<Self> {
        let previous = env::current_dir().map_err(|source| Error::WorkingDir {
            path: dir.to_path_buf(),
            source,
        })?;
        env::set_current_dir(dir).map_err(|source| Error::WorkingDir {
            path: dir.to_path_buf(),
            source,
        })?;
        tracing::debug!(from = %previous.display(), to = %dir.display(), "Changed working directory");
        Ok(Self { previous })
    }

    /// The directory that will be restored.
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            tracing::warn!(
                path = %self.previous.display(),
                error = %e,
                "Failed to restore working directory"
            );
        }
    }
}

/// Run `f` with the working directory set to `dir`.
pub fn within_dir<T>(dir: &Path, f: impl FnOnce() -> T) -> Result<T> {
    let _guard = WorkingDirGuard::enter(dir)?;
    Ok(f())
}
