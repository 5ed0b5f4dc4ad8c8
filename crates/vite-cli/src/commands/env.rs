//! Environment export for Vite subprocesses

use vite_config::{Environment, ResolvedConfig};

use crate::error::Result;

/// Print `KEY=value` lines, one per variable
pub fn run_env(config: &ResolvedConfig, vars: Vec<(String, String)>) -> Result<()> {
    let overrides: Environment = vars.into_iter().collect();

    for (key, value) in config.to_env(&overrides) {
        println!("{key}={value}");
    }

    Ok(())
}
