//! Commands printing derived paths

use colored::Colorize;
use vite_config::ResolvedConfig;

use crate::error::Result;

/// Print one watched path or glob per line
pub fn run_watched(config: &ResolvedConfig) -> Result<()> {
    for path in config.watched_paths() {
        println!("{path}");
    }
    Ok(())
}

/// Print manifest paths
///
/// Without `all`, only manifests that exist are listed and a hint is
/// written to stderr when there are none.
pub fn run_manifests(config: &ResolvedConfig, all: bool) -> Result<()> {
    let paths = if all {
        config.known_manifest_paths()
    } else {
        config.manifest_paths()
    };

    if paths.is_empty() {
        eprintln!(
            "{} No manifest found in {}. Run a build first.",
            "!".yellow(),
            config.build_output_dir().display()
        );
    }

    for path in paths {
        println!("{}", path.display());
    }
    Ok(())
}

/// Print the dev server origin
pub fn run_origin(config: &ResolvedConfig) -> Result<()> {
    println!("{}", config.origin());
    Ok(())
}
