//! Error types for vite-fs

use std::path::PathBuf;

/// Result type for vite-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vite-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to change working directory to {path}: {source}")]
    WorkingDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the underlying I/O error is `NotFound`.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io { source, .. } | Self::WorkingDir { source, .. } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
        }
    }
}
