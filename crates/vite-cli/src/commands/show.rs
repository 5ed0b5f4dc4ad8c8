//! Display of the resolved configuration

use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use vite_config::{RawOptionMap, ResolvedConfig};

use crate::error::Result;

/// Machine-readable form of `show --json`
#[derive(Debug, Serialize)]
struct ShowReport<'a> {
    config_file: &'a Path,
    origin: String,
    options: &'a RawOptionMap,
    diagnostics: Vec<String>,
}

/// Display every resolved option
pub fn run_show(config: &ResolvedConfig, json: bool) -> Result<()> {
    let options = config.to_raw();

    if json {
        let report = ShowReport {
            config_file: config.config_file(),
            origin: config.origin(),
            options: &options,
            diagnostics: config.diagnostics().iter().map(ToString::to_string).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Vite Ruby Configuration".bold());
    println!();
    println!("  {:<28} {}", "config file".dimmed(), config.config_file().display());
    println!("  {:<28} {}", "origin".dimmed(), config.origin());
    println!();

    for (name, value) in &options {
        println!("  {:<28} {}", name.cyan(), display_value(value));
    }

    if !config.diagnostics().is_empty() {
        println!();
        for diagnostic in config.diagnostics() {
            println!("  {} {}", "!".yellow(), diagnostic);
        }
    }

    Ok(())
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "(none)".dimmed().to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
