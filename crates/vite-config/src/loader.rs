//! JSON config file loading
//!
//! The config file holds one section per mode plus a shared `all` section:
//!
//! ```json
//! {
//!   "all": { "sourceCodeDir": "app/frontend" },
//!   "development": { "autoBuild": true, "port": 3036 },
//!   "test": { "autoBuild": true, "port": 3037 }
//! }
//! ```
//!
//! Loading for a mode yields `all` deep-merged with that mode's section.

use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::merge::{RawOptionMap, deep_merge};
use crate::normalize::normalize_map;

/// Name of the section shared by every mode
pub const SHARED_SECTION: &str = "all";

/// Outcome of loading the config file
#[derive(Debug, Clone, PartialEq)]
pub enum FileConfig {
    /// The file was read; holds the options for the requested mode
    Loaded(RawOptionMap),

    /// No file exists at the expected location
    Missing { path: PathBuf },
}

impl FileConfig {
    /// The options contributed by the file (empty when missing).
    pub fn into_values(self) -> RawOptionMap {
        match self {
            Self::Loaded(values) => values,
            Self::Missing { .. } => RawOptionMap::new(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }
}

/// Load the options for `mode` from the JSON file at `path`.
pub fn load(path: &Path, mode: &str) -> Result<FileConfig> {
    let Some(content) = vite_fs::io::read_text_if_exists(path)? else {
        return Ok(FileConfig::Missing {
            path: path.to_path_buf(),
        });
    };

    let values = parse(&content, mode).map_err(|message| Error::MalformedConfigFile {
        path: path.to_path_buf(),
        message,
    })?;
    Ok(FileConfig::Loaded(values))
}

/// Parse a multi-mode document and extract the options for `mode`.
pub fn parse(content: &str, mode: &str) -> std::result::Result<RawOptionMap, String> {
    let document = match serde_json::from_str::<Value>(content).map_err(|e| e.to_string())? {
        Value::Object(map) => normalize_map(map),
        other => return Err(format!("expected a JSON object, found {}", kind(&other))),
    };
    Ok(select_mode(document, mode))
}

/// Merge the `all` section with the `mode` section of a normalized document.
///
/// Sections that are absent or not objects contribute nothing.
pub fn select_mode(mut document: RawOptionMap, mode: &str) -> RawOptionMap {
    let mut values = section(&mut document, SHARED_SECTION);
    deep_merge(&mut values, section(&mut document, mode));
    values
}

fn section(document: &mut RawOptionMap, name: &str) -> RawOptionMap {
    match document.remove(name) {
        Some(Value::Object(map)) => map,
        Some(other) => {
            tracing::debug!(section = name, kind = kind(&other), "Ignoring non-object config section");
            RawOptionMap::new()
        }
        None => RawOptionMap::new(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;

    const DOCUMENT: &str = r#"{
        "all": { "sourceCodeDir": "frontend", "x": 1, "server": { "host": "a", "open": false } },
        "production": { "x": 2, "server": { "host": "b" } },
        "development": { "autoBuild": true }
    }"#;

    #[test]
    fn mode_section_overrides_shared_section() {
        let values = parse(DOCUMENT, "production").unwrap();

        assert_eq!(values["x"], 2);
        assert_eq!(values["source_code_dir"], "frontend");
        assert_eq!(values["server"], json!({ "host": "b", "open": false }));
    }

    #[test]
    fn shared_section_applies_when_mode_section_is_absent() {
        let values = parse(DOCUMENT, "staging").unwrap();
        assert_eq!(values["x"], 1);
        assert!(!values.contains_key("auto_build"));
    }

    #[test]
    fn mode_only_keys_are_kept() {
        let values = parse(DOCUMENT, "development").unwrap();
        assert_eq!(values["auto_build"], true);
        assert_eq!(values["x"], 1);
    }

    #[test]
    fn section_names_are_normalized_too() {
        let values = parse(r#"{ "myStaging": { "port": 4000 } }"#, "my_staging").unwrap();
        assert_eq!(values["port"], 4000);
    }

    #[test]
    fn non_object_document_is_rejected() {
        let err = parse("[1, 2]", "development").unwrap_err();
        assert!(err.contains("an array"), "unexpected message: {err}");
    }

    #[test]
    fn load_reports_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config/vite.json");

        let loaded = load(&path, "development").unwrap();

        assert!(loaded.is_missing());
        assert_eq!(loaded, FileConfig::Missing { path });
        assert!(loaded.into_values().is_empty());
    }

    #[test]
    fn load_fails_on_malformed_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vite.json");
        std::fs::write(&path, "{ \"all\": ").unwrap();

        let err = load(&path, "development").unwrap_err();

        assert!(matches!(err, Error::MalformedConfigFile { .. }));
        assert!(err.to_string().contains("vite.json"));
    }
}
