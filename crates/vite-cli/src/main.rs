//! Vite Ruby configuration CLI
//!
//! Resolves the project configuration and prints it or one of its derived
//! values.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use vite_config::{Attributes, ConfigResolver, ResolvedConfig};

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let Some(command) = cli.command.clone() else {
        println!("{} Vite Ruby configuration", "vite-config".green().bold());
        println!();
        println!("Run {} for available commands.", "vite-config --help".cyan());
        return Ok(());
    };

    let config = resolve(&cli)?;
    execute_command(command, &config)
}

/// Log to stderr so command output stays machine-readable.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();

    tracing::debug!("Verbose mode enabled");
}

fn resolve(cli: &Cli) -> Result<ResolvedConfig> {
    let mut attrs = Attributes::new();

    if let Some(root) = &cli.root {
        if !root.is_dir() {
            return Err(CliError::user(format!(
                "Project root {} is not a directory",
                root.display()
            )));
        }
        attrs = attrs.with("root", root.display().to_string());
    }
    if let Some(mode) = &cli.mode {
        attrs = attrs.with("mode", mode.as_str());
    }

    Ok(ConfigResolver::from_process_env().resolve(attrs)?)
}

fn execute_command(cmd: Commands, config: &ResolvedConfig) -> Result<()> {
    match cmd {
        Commands::Show { json } => commands::run_show(config, json),
        Commands::Env { vars } => commands::run_env(config, vars),
        Commands::Watched => commands::run_watched(config),
        Commands::Manifests { all } => commands::run_manifests(config, all),
        Commands::Origin => commands::run_origin(config),
    }
}
