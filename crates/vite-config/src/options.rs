//! Typed configuration options
//!
//! Raw values may come from JSON (typed) or from environment variables
//! (always strings), so every field is coerced from an untyped value.

use serde_json::{Value, json};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::merge::RawOptionMap;
use crate::package_manager::PackageManager;

/// Every recognized option, fully coerced.
///
/// Keys that are not recognized are kept untyped in `extra`.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub additional_entrypoints: Vec<String>,
    pub asset_host: Option<String>,
    pub assets_dir: String,
    pub auto_build: bool,
    pub base: String,
    /// Absolute, resolved under `root`
    pub build_cache_dir: PathBuf,
    pub config_path: String,
    /// Seconds to wait when probing the dev server
    pub dev_server_connect_timeout: f64,
    pub entrypoints_dir: String,
    pub hide_build_console_output: bool,
    pub host: String,
    pub https: bool,
    pub mode: String,
    pub package_manager: PackageManager,
    pub port: u16,
    pub public_dir: String,
    pub public_output_dir: String,
    /// Absolute project root
    pub root: PathBuf,
    pub skip_compatibility_check: bool,
    pub skip_proxy: bool,
    pub source_code_dir: String,
    pub ssr_build_enabled: bool,
    pub ssr_entrypoint: String,
    /// Absolute, resolved under `root`
    pub ssr_output_dir: PathBuf,
    pub vite_bin_path: Option<String>,
    pub watch_additional_paths: Vec<String>,
    pub extra: RawOptionMap,
}

impl Options {
    /// Coerce a merged raw map into typed options.
    ///
    /// A relative `root` is resolved against `working_dir`. When
    /// `package_manager` is unset it is detected from lockfiles under `root`.
    pub fn from_raw(mut raw: RawOptionMap, working_dir: &Path) -> Result<Self> {
        let mut take = |option: &str| raw.remove(option).unwrap_or(Value::Null);

        let root = vite_fs::absolutize(Path::new(&string("root", take("root"))?), working_dir);
        let package_manager = match optional_string("package_manager", take("package_manager"))? {
            Some(name) if !name.is_empty() => name.parse::<PackageManager>().map_err(|_| {
                Error::invalid(
                    "package_manager",
                    &Value::String(name),
                    "one of npm, pnpm, bun, yarn",
                )
            })?,
            _ => PackageManager::detect(&root),
        };

        let options = Self {
            additional_entrypoints: string_list("additional_entrypoints", take("additional_entrypoints"))?,
            asset_host: optional_string("asset_host", take("asset_host"))?,
            assets_dir: string("assets_dir", take("assets_dir"))?,
            auto_build: boolean("auto_build", take("auto_build")),
            base: string("base", take("base"))?,
            build_cache_dir: vite_fs::resolve_under(
                &root,
                string("build_cache_dir", take("build_cache_dir"))?,
            ),
            config_path: string("config_path", take("config_path"))?,
            dev_server_connect_timeout: float(
                "dev_server_connect_timeout",
                take("dev_server_connect_timeout"),
            )?,
            entrypoints_dir: string("entrypoints_dir", take("entrypoints_dir"))?,
            hide_build_console_output: boolean(
                "hide_build_console_output",
                take("hide_build_console_output"),
            ),
            host: string("host", take("host"))?,
            https: boolean("https", take("https")),
            mode: string("mode", take("mode"))?,
            package_manager,
            port: port(take("port"))?,
            public_dir: string("public_dir", take("public_dir"))?,
            public_output_dir: string("public_output_dir", take("public_output_dir"))?,
            skip_compatibility_check: boolean(
                "skip_compatibility_check",
                take("skip_compatibility_check"),
            ),
            skip_proxy: boolean("skip_proxy", take("skip_proxy")),
            source_code_dir: string("source_code_dir", take("source_code_dir"))?,
            ssr_build_enabled: boolean("ssr_build_enabled", take("ssr_build_enabled")),
            ssr_entrypoint: string("ssr_entrypoint", take("ssr_entrypoint"))?,
            ssr_output_dir: vite_fs::resolve_under(
                &root,
                string("ssr_output_dir", take("ssr_output_dir"))?,
            ),
            vite_bin_path: optional_string("vite_bin_path", take("vite_bin_path"))?,
            watch_additional_paths: string_list("watch_additional_paths", take("watch_additional_paths"))?,
            root,
            extra: RawOptionMap::new(),
        };

        Ok(Self { extra: raw, ..options })
    }

    /// All options as an untyped map, paths rendered as strings.
    pub fn to_raw(&self) -> RawOptionMap {
        let mut raw = self.extra.clone();
        let typed = json!({
            "additional_entrypoints": self.additional_entrypoints,
            "asset_host": self.asset_host,
            "assets_dir": self.assets_dir,
            "auto_build": self.auto_build,
            "base": self.base,
            "build_cache_dir": self.build_cache_dir.display().to_string(),
            "config_path": self.config_path,
            "dev_server_connect_timeout": self.dev_server_connect_timeout,
            "entrypoints_dir": self.entrypoints_dir,
            "hide_build_console_output": self.hide_build_console_output,
            "host": self.host,
            "https": self.https,
            "mode": self.mode,
            "package_manager": self.package_manager.as_str(),
            "port": self.port,
            "public_dir": self.public_dir,
            "public_output_dir": self.public_output_dir,
            "root": self.root.display().to_string(),
            "skip_compatibility_check": self.skip_compatibility_check,
            "skip_proxy": self.skip_proxy,
            "source_code_dir": self.source_code_dir,
            "ssr_build_enabled": self.ssr_build_enabled,
            "ssr_entrypoint": self.ssr_entrypoint,
            "ssr_output_dir": self.ssr_output_dir.display().to_string(),
            "vite_bin_path": self.vite_bin_path,
            "watch_additional_paths": self.watch_additional_paths,
        });
        if let Value::Object(typed) = typed {
            raw.extend(typed);
        }
        raw
    }
}

/// Literal `true` or `"true"` is true; anything else is false.
pub fn boolean(option: &str, value: Value) -> bool {
    match value {
        Value::Bool(b) => b,
        Value::Null => false,
        Value::String(ref s) if s == "true" => true,
        Value::String(ref s) if s == "false" => false,
        other => {
            tracing::debug!(option, value = %other, "Treating unrecognized boolean value as false");
            false
        }
    }
}

fn string(option: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(Error::invalid(option, &other, "a string")),
    }
}

fn optional_string(option: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        other => string(option, other).map(Some),
    }
}

fn string_list(option: &str, value: Value) -> Result<Vec<String>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(s) => Ok(vec![s]),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(Error::invalid(option, &other, "a list of strings")),
            })
            .collect(),
        other => Err(Error::invalid(option, &other, "a list of strings")),
    }
}

fn port(value: Value) -> Result<u16> {
    let parsed = match &value {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u16>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| Error::invalid("port", &value, "a port number between 0 and 65535"))
}

fn float(option: &str, value: Value) -> Result<f64> {
    let parsed = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| Error::invalid(option, &value, "a number"))
}
