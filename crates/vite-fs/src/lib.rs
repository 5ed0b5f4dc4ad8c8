//! Filesystem helpers for vite-config
//!
//! Provides lexical path resolution, text reads with path-aware errors,
//! and a scoped working-directory guard.

pub mod cwd;
pub mod error;
pub mod io;
pub mod path;

pub use cwd::{WorkingDirGuard, within_dir};
pub use error::{Error, Result};
pub use path::{absolutize, clean, resolve_under};
