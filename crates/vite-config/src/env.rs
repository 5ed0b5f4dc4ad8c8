//! Environment variable overlay
//!
//! Options are read from and written to variables named
//! `VITE_RUBY_<OPTION>` (e.g. `VITE_RUBY_SOURCE_CODE_DIR`). List-valued
//! options cannot be expressed this way and are never read from the
//! environment.

use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::defaults::baseline;
use crate::merge::RawOptionMap;

/// Prefix shared by every option variable
pub const ENV_PREFIX: &str = "VITE_RUBY";

/// Options that can not be provided as environment variables
pub const NOT_CONFIGURABLE_WITH_ENV: [&str; 2] = ["additional_entrypoints", "watch_additional_paths"];

static CONFIGURABLE_WITH_ENV: LazyLock<Vec<String>> = LazyLock::new(|| {
    let mut options: Vec<String> = baseline()
        .keys()
        .map(String::as_str)
        .chain(["mode", "root"])
        .filter(|option| !NOT_CONFIGURABLE_WITH_ENV.contains(option))
        .map(str::to_string)
        .collect();
    options.sort();
    options.dedup();
    options
});

/// Options that may be supplied through environment variables, sorted.
pub fn configurable_with_env() -> &'static [String] {
    &CONFIGURABLE_WITH_ENV
}

/// Variable name for an option: `asset_host` -> `VITE_RUBY_ASSET_HOST`.
pub fn env_var_name(option: &str) -> String {
    format!("{ENV_PREFIX}_{}", option.to_uppercase())
}

/// An explicit snapshot of environment variables.
///
/// The resolver only ever reads from this map, so tests can describe the
/// environment without touching the real process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// An empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    /// Add or replace a variable.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Look up a single option in the environment.
pub fn option_from_env<'a>(env: &'a Environment, option: &str) -> Option<&'a str> {
    env.get(&env_var_name(option))
}

/// Extract every env-configurable option present in `env` as a raw string.
pub fn from_env(env: &Environment) -> RawOptionMap {
    configurable_with_env()
        .iter()
        .filter_map(|option| {
            option_from_env(env, option).map(|value| (option.clone(), Value::from(value)))
        })
        .collect()
}

/// Serialize option values into `VITE_RUBY_*` variables.
///
/// Only env-configurable options with a non-null value are written.
/// `overrides` are applied last and always win.
pub fn to_env(values: &RawOptionMap, overrides: &Environment) -> BTreeMap<String, String> {
    let mut vars: BTreeMap<String, String> = configurable_with_env()
        .iter()
        .filter_map(|option| {
            let value = env_string(values.get(option)?)?;
            Some((env_var_name(option), value))
        })
        .collect();

    vars.extend(overrides.iter().map(|(k, v)| (k.to_string(), v.to_string())));
    vars
}

fn env_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
