//! Key normalization
//!
//! External config keys arrive in camelCase (`sourceCodeDir`), kebab-case or
//! namespaced (`Foo::Bar`) form. Everything is stored in snake_case.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());

static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").unwrap());

/// Convert a key to its canonical snake_case form.
///
/// ```
/// use vite_config::normalize_key;
///
/// assert_eq!(normalize_key("sourceCodeDir"), "source_code_dir");
/// assert_eq!(normalize_key("HTTPSPort"), "https_port");
/// assert_eq!(normalize_key("Vite::Config"), "vite/config");
/// assert_eq!(normalize_key("public-dir"), "public_dir");
/// ```
pub fn normalize_key(key: &str) -> String {
    let key = key.replace("::", "/");
    let key = ACRONYM_BOUNDARY.replace_all(&key, "${1}_${2}");
    let key = WORD_BOUNDARY.replace_all(&key, "${1}_${2}");
    key.replace('-', "_").to_lowercase()
}

/// Normalize every object key in `value`, at any depth.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(normalize_map(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

/// Normalize the keys of a map and all maps nested inside it.
pub fn normalize_map(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| (normalize_key(&key), normalize_keys(value)))
        .collect()
}
