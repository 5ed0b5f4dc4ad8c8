//! The resolved, immutable configuration
//!
//! Derived values (origin, manifest paths, watched paths, subprocess
//! environment) are computed from the frozen options on every call.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::env::{self, Environment};
use crate::error::Result;
use crate::merge::RawOptionMap;
use crate::options::Options;
use crate::package_manager::PackageManager;

/// Files that invalidate a cached build when modified
pub const DEFAULT_WATCHED_PATHS: &[&str] = &[
    "bun.lockb",
    "package-lock.json",
    "package.json",
    "pnpm-lock.yaml",
    "postcss.config.js",
    "tailwind.config.js",
    "vite.config.js",
    "vite.config.mjs",
    "vite.config.mts",
    "vite.config.ts",
    "windi.config.ts",
    "yarn.lock",
];

/// Directory under the build output where Vite writes its manifests
const MANIFEST_DIR: &str = ".vite";

/// Manifest written by Vite itself
const VITE_MANIFEST: &str = "manifest.json";

/// Assets manifest written by vite-plugin-ruby
const ASSETS_MANIFEST: &str = "manifest-assets.json";

/// A non-fatal finding recorded during resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The JSON config file was not found; defaults were used
    MissingConfigFile { path: PathBuf },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingConfigFile { path } => write!(
                f,
                "Check that your vite.json configuration file is available at the expected location: {}",
                path.display()
            ),
        }
    }
}

/// Resolved configuration
///
/// Built once by [`ConfigResolver`](crate::ConfigResolver) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    options: Options,
    config_file: PathBuf,
    diagnostics: Vec<Diagnostic>,
}

macro_rules! copy_accessors {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(pub fn $name(&self) -> $ty { self.options.$name })*
    };
}

macro_rules! str_accessors {
    ($($name:ident),* $(,)?) => {
        $(pub fn $name(&self) -> &str { &self.options.$name })*
    };
}

macro_rules! optional_str_accessors {
    ($($name:ident),* $(,)?) => {
        $(pub fn $name(&self) -> Option<&str> { self.options.$name.as_deref() })*
    };
}

macro_rules! path_accessors {
    ($($name:ident),* $(,)?) => {
        $(pub fn $name(&self) -> &Path { &self.options.$name })*
    };
}

macro_rules! list_accessors {
    ($($name:ident),* $(,)?) => {
        $(pub fn $name(&self) -> &[String] { &self.options.$name })*
    };
}

impl ResolvedConfig {
    pub(crate) fn new(options: Options, config_file: PathBuf, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            options,
            config_file,
            diagnostics,
        }
    }

    copy_accessors! {
        auto_build: bool,
        dev_server_connect_timeout: f64,
        hide_build_console_output: bool,
        https: bool,
        package_manager: PackageManager,
        port: u16,
        skip_compatibility_check: bool,
        skip_proxy: bool,
        ssr_build_enabled: bool,
    }

    str_accessors! {
        assets_dir,
        base,
        config_path,
        entrypoints_dir,
        host,
        mode,
        public_dir,
        public_output_dir,
        source_code_dir,
        ssr_entrypoint,
    }

    optional_str_accessors! { asset_host, vite_bin_path }

    path_accessors! { build_cache_dir, root, ssr_output_dir }

    list_accessors! { additional_entrypoints, watch_additional_paths }

    /// The typed options record.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Look up any option by its canonical name, including unrecognized keys
    /// loaded from the config file.
    pub fn get(&self, option: &str) -> Option<Value> {
        self.options.to_raw().remove(option)
    }

    /// All options as an untyped map.
    pub fn to_raw(&self) -> RawOptionMap {
        self.options.to_raw()
    }

    /// Path of the JSON config file consulted during resolution.
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Non-fatal findings, such as a missing config file.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn protocol(&self) -> &'static str {
        if self.options.https { "https" } else { "http" }
    }

    pub fn host_with_port(&self) -> String {
        format!("{}:{}", self.options.host, self.options.port)
    }

    /// Dev server origin, e.g. `http://localhost:3036`.
    pub fn origin(&self) -> String {
        format!("{}://{}", self.protocol(), self.host_with_port())
    }

    /// Directory where Vite writes built assets.
    pub fn build_output_dir(&self) -> PathBuf {
        vite_fs::resolve_under(
            &self.options.root,
            Path::new(&self.options.public_dir).join(&self.options.public_output_dir),
        )
    }

    /// Directory Vite uses as its root.
    pub fn vite_root_dir(&self) -> PathBuf {
        vite_fs::resolve_under(&self.options.root, &self.options.source_code_dir)
    }

    /// Directory holding the entrypoints.
    pub fn resolved_entrypoints_dir(&self) -> PathBuf {
        vite_fs::resolve_under(&self.vite_root_dir(), &self.options.entrypoints_dir)
    }

    /// Directory where Vite keeps its processing cache.
    pub fn vite_cache_dir(&self) -> PathBuf {
        self.options.root.join("node_modules").join(".vite")
    }

    /// Every manifest location Vite and the plugin may write to.
    pub fn known_manifest_paths(&self) -> Vec<PathBuf> {
        let dir = self.build_output_dir().join(MANIFEST_DIR);
        vec![dir.join(VITE_MANIFEST), dir.join(ASSETS_MANIFEST)]
    }

    /// The known manifests that exist right now.
    pub fn manifest_paths(&self) -> Vec<PathBuf> {
        self.known_manifest_paths()
            .into_iter()
            .filter(|path| path.exists())
            .collect()
    }

    /// Files and globs whose modification should trigger a rebuild.
    ///
    /// Additional paths under `~/` or inside `source_code_dir` are already
    /// covered by the source glob and are skipped.
    pub fn watched_paths(&self) -> Vec<String> {
        let source_code_dir = &self.options.source_code_dir;

        let additional = self
            .options
            .watch_additional_paths
            .iter()
            .chain(&self.options.additional_entrypoints)
            .filter(|dir| !dir.starts_with("~/") && !dir.starts_with(source_code_dir.as_str()))
            .cloned();

        let config_glob = match self.options.config_path.strip_suffix(".json") {
            Some(stem) => format!("{stem}.{{rb,json}}"),
            None => self.options.config_path.clone(),
        };

        additional
            .chain([format!("{source_code_dir}/**/*"), config_glob])
            .chain(DEFAULT_WATCHED_PATHS.iter().map(|path| path.to_string()))
            .collect()
    }

    /// Variables to pass to a Vite subprocess.
    ///
    /// `overrides` always win over the serialized options.
    pub fn to_env(&self, overrides: &Environment) -> BTreeMap<String, String> {
        env::to_env(&self.options.to_raw(), overrides)
    }

    /// Run `f` with the working directory set to `root`.
    ///
    /// The previous directory is restored when `f` returns or panics.
    pub fn within_root<T>(&self, f: impl FnOnce() -> T) -> Result<T> {
        Ok(vite_fs::within_dir(&self.options.root, f)?)
    }
}
