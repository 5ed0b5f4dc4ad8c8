//! Default option values
//!
//! Two layers:
//!
//! - the **baseline** packaged with the crate (`default.vite.json`, shared with
//!   the Vite plugin), which also defines which options exist;
//! - **call-time** defaults for `mode`, `root`, `config_path` and
//!   `asset_host`, computed per resolution from the environment.

use serde_json::Value;
use std::path::Path;
use std::sync::LazyLock;

use crate::env::{Environment, option_from_env};
use crate::merge::RawOptionMap;
use crate::normalize::normalize_keys;

/// The packaged baseline document
pub const DEFAULT_CONFIG_JSON: &str = include_str!("../default.vite.json");

/// Environment variable holding the runtime mode of the host application
pub const RUNTIME_MODE_VAR: &str = "RACK_ENV";

/// Mode used when neither the caller nor the environment names one
pub const DEFAULT_MODE: &str = "development";

static BASELINE: LazyLock<RawOptionMap> = LazyLock::new(|| {
    match normalize_keys(
        serde_json::from_str(DEFAULT_CONFIG_JSON).expect("default.vite.json is valid JSON"),
    ) {
        Value::Object(map) => map,
        _ => panic!("default.vite.json must contain a JSON object"),
    }
});

/// Baseline values for every recognized option, with snake_case keys.
pub fn baseline() -> &'static RawOptionMap {
    &BASELINE
}

/// Defaults computed for a single resolution.
///
/// Each value may be overridden by its `VITE_RUBY_*` variable. Options without
/// a value (such as `asset_host`) are left out rather than set to null.
pub fn call_time_defaults(env: &Environment, working_dir: &Path) -> RawOptionMap {
    let mut defaults = RawOptionMap::new();

    if let Some(asset_host) = option_from_env(env, "asset_host") {
        defaults.insert("asset_host".into(), asset_host.into());
    }

    let config_path = option_from_env(env, "config_path")
        .map(Value::from)
        .or_else(|| baseline().get("config_path").cloned())
        .unwrap_or(Value::Null);
    if !config_path.is_null() {
        defaults.insert("config_path".into(), config_path);
    }

    let mode = option_from_env(env, "mode")
        .or_else(|| env.get(RUNTIME_MODE_VAR))
        .unwrap_or(DEFAULT_MODE);
    defaults.insert("mode".into(), mode.into());

    let root = option_from_env(env, "root")
        .map(str::to_string)
        .unwrap_or_else(|| working_dir.display().to_string());
    defaults.insert("root".into(), root.into());

    defaults
}
