//! Lexical path resolution
//!
//! Paths are resolved without touching the filesystem, so a project root
//! does not have to exist yet for its derived paths to be computed.

use std::path::{Component, Path, PathBuf};

/// Remove `.` components and fold `..` into the preceding segment.
///
/// Leading `..` segments of a relative path are kept; `..` directly under the
/// filesystem root is dropped.
pub fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    out.pop();
                    depth -= 1;
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(segment) => {
                out.push(segment);
                depth += 1;
            }
        }
    }

    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}

/// Make `path` absolute by joining it onto `base` when it is relative.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        clean(path)
    } else {
        clean(&base.join(path))
    }
}

/// Resolve `relative` under `root`.
///
/// An absolute `relative` replaces `root`, matching `Path::join`.
pub fn resolve_under(root: &Path, relative: impl AsRef<Path>) -> PathBuf {
    clean(&root.join(relative))
}
