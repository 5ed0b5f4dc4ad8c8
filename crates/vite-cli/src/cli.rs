//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect the configuration shared by Vite Ruby and vite-plugin-ruby
#[derive(Parser, Debug)]
#[command(name = "vite-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root (defaults to VITE_RUBY_ROOT or the current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Mode whose config file section is applied
    #[arg(long, global = true)]
    pub mode: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show every resolved option
    Show {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the VITE_RUBY_* variables passed to a Vite process
    ///
    /// Examples:
    ///   vite-config env
    ///   vite-config env --var NODE_ENV=production
    Env {
        /// Extra variables that take precedence (KEY=VALUE)
        #[arg(long = "var", value_parser = parse_var)]
        vars: Vec<(String, String)>,
    },

    /// List the files and globs that invalidate a build
    Watched,

    /// List manifest files in the build output directory
    Manifests {
        /// Include manifests that do not exist yet
        #[arg(long)]
        all: bool,
    },

    /// Print the dev server origin
    Origin,
}

fn parse_var(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}
