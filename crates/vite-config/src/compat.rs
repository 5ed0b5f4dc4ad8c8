//! Compatibility check against the companion Vite plugin
//!
//! The project's `package.json` declares a `vite-plugin-ruby` requirement.
//! Its base version must fall inside the range this crate supports, otherwise
//! the plugin and the resolved configuration may disagree.

use semver::{Version, VersionReq};
use serde_json::Value;
use std::path::Path;

use crate::error::{Error, Result};

/// npm package name of the companion plugin
pub const PLUGIN_PACKAGE: &str = "vite-plugin-ruby";

/// Plugin versions this crate is compatible with
pub const SUPPORTED_PLUGIN_REQUIREMENT: &str = "^5.1.0";

/// Verify the plugin requirement declared under `root`.
///
/// Projects without a `package.json`, without the plugin, or with a
/// requirement that is not a plain version range pass the check.
pub fn verify_plugin_version(root: &Path) -> Result<()> {
    let Some(requirement) = plugin_requirement(root)? else {
        tracing::debug!(root = %root.display(), "No {PLUGIN_PACKAGE} requirement found");
        return Ok(());
    };

    if is_compatible(&requirement, SUPPORTED_PLUGIN_REQUIREMENT) {
        tracing::debug!(%requirement, "Plugin version is compatible");
        Ok(())
    } else {
        Err(Error::IncompatiblePluginVersion {
            requirement,
            supported: SUPPORTED_PLUGIN_REQUIREMENT.to_string(),
        })
    }
}

/// Read the plugin requirement from `devDependencies` or `dependencies`.
pub fn plugin_requirement(root: &Path) -> Result<Option<String>> {
    let path = root.join("package.json");
    let Some(content) = vite_fs::io::read_text_if_exists(&path)? else {
        return Ok(None);
    };

    let package: Value = match serde_json::from_str(&content) {
        Ok(package) => package,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Unreadable package.json");
            return Ok(None);
        }
    };

    Ok(["devDependencies", "dependencies"]
        .iter()
        .find_map(|section| package.get(section)?.get(PLUGIN_PACKAGE)?.as_str())
        .map(str::to_string))
}

/// Whether an npm requirement such as `^5.1.4` falls within `supported`.
///
/// Requirements that carry no parseable version (tags, URLs, workspaces)
/// are treated as compatible.
pub fn is_compatible(npm_requirement: &str, supported: &str) -> bool {
    let Ok(supported) = VersionReq::parse(supported) else {
        return true;
    };
    match base_version(npm_requirement) {
        Some(version) => supported.matches(&version),
        None => true,
    }
}

/// Extract the lowest version named by an npm requirement.
///
/// Handles aliases (`npm:vite-plugin-ruby@^5.0`), range operators and
/// partial versions (`5.1` -> `5.1.0`).
fn base_version(requirement: &str) -> Option<Version> {
    let range = requirement.rsplit('@').next()?;
    let first = range.split_whitespace().next()?;
    let version = first.trim_start_matches(['^', '~', '>', '<', '=', 'v']);

    Version::parse(version)
        .or_else(|_| Version::parse(&format!("{version}.0")))
        .or_else(|_| Version::parse(&format!("{version}.0.0")))
        .ok()
}
