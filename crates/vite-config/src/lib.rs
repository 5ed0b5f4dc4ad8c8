//! Layered configuration resolution for Vite build integrations
//!
//! This crate resolves the effective configuration shared by a host
//! application and its Vite build:
//!
//! - **Key normalization**: camelCase and namespaced keys become snake_case
//! - **JSON config file**: per-mode sections layered over a shared `all` section
//! - **Environment overlay**: `VITE_RUBY_*` variables, injected explicitly
//! - **Typed result**: coerced options plus derived paths, origin and the
//!   environment to hand to a Vite subprocess
//!
//! # Architecture
//!
//! ```text
//!                   ConfigResolver
//!                         |
//!     +---------+---------+---------+----------+
//!     |         |         |         |          |
//! defaults   loader      env     options    compat
//!               |                   |
//!           normalize         package_manager
//!                         |
//!                   ResolvedConfig
//! ```
//!
//! # Example
//!
//! ```
//! use vite_config::{Attributes, ConfigResolver, Environment};
//!
//! let dir = tempfile::tempdir()?;
//! let env = Environment::new().with("VITE_RUBY_PORT", "4000");
//!
//! let config = ConfigResolver::new(env)
//!     .with_working_dir(dir.path())
//!     .resolve(Attributes::new().with("host", "vite.test"))?;
//!
//! assert_eq!(config.origin(), "http://vite.test:4000");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod compat;
pub mod defaults;
pub mod env;
pub mod error;
pub mod loader;
pub mod merge;
pub mod normalize;
pub mod options;
pub mod package_manager;
pub mod resolved;
pub mod resolver;

pub use env::{ENV_PREFIX, Environment, env_var_name};
pub use error::{Error, Result};
pub use loader::FileConfig;
pub use merge::RawOptionMap;
pub use normalize::{normalize_key, normalize_keys};
pub use options::Options;
pub use package_manager::PackageManager;
pub use resolved::{DEFAULT_WATCHED_PATHS, Diagnostic, ResolvedConfig};
pub use resolver::{Attributes, ConfigResolver};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn error_malformed_config_file_displays_path() {
        let error = Error::MalformedConfigFile {
            path: PathBuf::from("/app/config/vite.json"),
            message: "expected value at line 1 column 1".into(),
        };

        let display = error.to_string();
        assert!(display.contains("/app/config/vite.json"), "got: {display}");
        assert!(display.contains("line 1"), "got: {display}");
    }

    #[test]
    fn resolved_config_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResolvedConfig>();
    }
}
