//! JavaScript package manager detection

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The package managers a project may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Bun,
    Yarn,
}

/// Lockfiles checked during detection, in priority order
const LOCKFILES: &[(&str, PackageManager)] = &[
    ("package-lock.json", PackageManager::Npm),
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
    ("yarn.lock", PackageManager::Yarn),
];

impl PackageManager {
    pub const ALL: [PackageManager; 4] = [Self::Npm, Self::Pnpm, Self::Bun, Self::Yarn];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
            Self::Yarn => "yarn",
        }
    }

    /// Infer the package manager from the lockfile present under `root`.
    ///
    /// Falls back to npm when no lockfile is found.
    pub fn detect(root: &Path) -> Self {
        LOCKFILES
            .iter()
            .find(|(lockfile, _)| root.join(lockfile).exists())
            .map(|&(lockfile, manager)| {
                tracing::debug!(lockfile, manager = manager.as_str(), "Detected package manager");
                manager
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown package manager name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPackageManager(pub String);

impl fmt::Display for UnknownPackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown package manager '{}'", self.0)
    }
}

impl std::error::Error for UnknownPackageManager {}

impl FromStr for PackageManager {
    type Err = UnknownPackageManager;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|manager| manager.as_str() == s)
            .ok_or_else(|| UnknownPackageManager(s.to_string()))
    }
}
