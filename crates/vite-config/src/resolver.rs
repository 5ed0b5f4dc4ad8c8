//! Configuration resolution with layered merge
//!
//! The `ConfigResolver` merges configuration from several sources, with later
//! sources overriding earlier ones:
//!
//! 1. Packaged baseline defaults (`default.vite.json`)
//! 2. The JSON config file, `all` section then the section for the mode
//! 3. `VITE_RUBY_*` environment variables
//! 4. Call-time defaults (`mode`, `root`, ...) overridden by explicit attributes
//!
//! Explicit attributes therefore win over everything, including the
//! environment.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::compat;
use super::defaults::{self, baseline};
use super::env::{self, Environment};
use super::loader::{self, FileConfig};
use super::merge::{RawOptionMap, overlay};
use super::normalize::{normalize_key, normalize_map};
use super::options::Options;
use super::resolved::{Diagnostic, ResolvedConfig};
use crate::error::{Error, Result};

/// Explicit, caller-supplied option values
///
/// Keys are normalized on insertion, so `sourceCodeDir` and
/// `source_code_dir` address the same option.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(RawOptionMap);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option.
    pub fn with(mut self, option: &str, value: impl Into<Value>) -> Self {
        self.0.insert(normalize_key(option), value.into());
        self
    }

    pub fn get(&self, option: &str) -> Option<&Value> {
        self.0.get(&normalize_key(option))
    }

    pub fn into_map(self) -> RawOptionMap {
        self.0
    }
}

impl From<Map<String, Value>> for Attributes {
    fn from(map: Map<String, Value>) -> Self {
        Self(normalize_map(map))
    }
}

impl<K: AsRef<str>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |attrs, (k, v)| attrs.with(k.as_ref(), v))
    }
}

/// Resolves configuration by merging multiple sources
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    /// Environment variables consulted during resolution
    env: Environment,

    /// Override for the directory relative paths are resolved against.
    /// When `None`, the process working directory is used.
    working_dir_override: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create a resolver reading from the given environment.
    pub fn new(env: Environment) -> Self {
        Self {
            env,
            working_dir_override: None,
        }
    }

    /// Create a resolver reading from the current process environment.
    pub fn from_process_env() -> Self {
        Self::new(Environment::from_process())
    }

    /// Resolve relative roots against `dir` instead of the process working
    /// directory. `dir` is also the default `root`.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir_override = Some(dir.into());
        self
    }

    fn working_dir(&self) -> Result<PathBuf> {
        match &self.working_dir_override {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(|e| Error::Fs(vite_fs::Error::io(".", e))),
        }
    }

    /// Resolve the configuration by merging all sources
    ///
    /// Fails when the config file is malformed, a value cannot be coerced,
    /// or the companion plugin is incompatible. A missing config file only
    /// produces a [`Diagnostic`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vite_config::{Attributes, ConfigResolver};
    ///
    /// let config = ConfigResolver::from_process_env()
    ///     .resolve(Attributes::new().with("mode", "production"))?;
    /// println!("{}", config.origin());
    /// # Ok::<(), vite_config::Error>(())
    /// ```
    pub fn resolve(&self, attrs: Attributes) -> Result<ResolvedConfig> {
        let working_dir = self.working_dir()?;

        // Layer 4 is computed first: it decides which file and section to read.
        let mut call_time = defaults::call_time_defaults(&self.env, &working_dir);
        overlay(&mut call_time, attrs.into_map());

        let mode = mode_of(&call_time);
        let config_file = config_file_of(&call_time, &working_dir);

        let mut diagnostics = Vec::new();
        let file_values = match loader::load(&config_file, &mode)? {
            FileConfig::Loaded(values) => {
                tracing::debug!(path = %config_file.display(), %mode, "Loaded config file (layer 2)");
                values
            }
            FileConfig::Missing { path } => {
                let diagnostic = Diagnostic::MissingConfigFile { path };
                tracing::warn!("{diagnostic}");
                diagnostics.push(diagnostic);
                RawOptionMap::new()
            }
        };

        let env_values = env::from_env(&self.env);
        if !env_values.is_empty() {
            tracing::debug!(options = ?env_values.keys().collect::<Vec<_>>(), "Applying environment overrides (layer 3)");
        }

        let mut merged = baseline().clone();
        overlay(&mut merged, file_values);
        overlay(&mut merged, env_values);
        overlay(&mut merged, call_time);

        let options = Options::from_raw(merged, &working_dir)?;

        if options.skip_compatibility_check {
            tracing::debug!("Skipping plugin compatibility check");
        } else {
            compat::verify_plugin_version(&options.root)?;
        }

        Ok(ResolvedConfig::new(options, config_file, diagnostics))
    }
}

fn mode_of(call_time: &RawOptionMap) -> String {
    match call_time.get("mode") {
        Some(Value::String(mode)) => mode.clone(),
        Some(Value::Null) | None => defaults::DEFAULT_MODE.to_string(),
        Some(other) => other.to_string(),
    }
}

fn config_file_of(call_time: &RawOptionMap, working_dir: &Path) -> PathBuf {
    let root = match call_time.get("root") {
        Some(Value::String(root)) => vite_fs::absolutize(Path::new(root), working_dir),
        _ => working_dir.to_path_buf(),
    };
    let config_path = call_time
        .get("config_path")
        .and_then(Value::as_str)
        .or_else(|| baseline().get("config_path").and_then(Value::as_str))
        .unwrap_or_default();
    vite_fs::resolve_under(&root, config_path)
}
