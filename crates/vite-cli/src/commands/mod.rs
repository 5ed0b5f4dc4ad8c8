//! Command implementations for vite-cli

pub mod env;
pub mod paths;
pub mod show;

pub use env::run_env;
pub use paths::{run_manifests, run_origin, run_watched};
pub use show::run_show;
