//! [`TestProject`] builder for configuration test scenarios.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Default location of the JSON config file inside a project
pub const CONFIG_FILE: &str = "config/vite.json";

/// A temporary project directory with helpers to lay down the files the
/// resolver reads.
///
/// # Example
///
/// ```rust,no_run
/// use vite_test_utils::TestProject;
///
/// let project = TestProject::new()
///     .with_config(serde_json::json!({ "all": { "port": 3037 } }))
///     .with_lockfile("pnpm-lock.yaml")
///     .with_plugin_requirement("^5.1.0");
/// project.assert_file_exists("config/vite.json");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the project root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the project.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestProject::write: {}: {e}", path.display()));
        self
    }

    /// Write `config/vite.json`.
    pub fn with_config(self, document: Value) -> Self {
        self.with_config_at(CONFIG_FILE, document)
    }

    /// Write a JSON config document at a custom location.
    pub fn with_config_at(self, relative: &str, document: Value) -> Self {
        self.write(relative, &serde_json::to_string_pretty(&document).unwrap());
        self
    }

    /// Create an empty lockfile such as `yarn.lock`.
    pub fn with_lockfile(self, name: &str) -> Self {
        self.write(name, "");
        self
    }

    /// Write a `package.json` declaring `vite-plugin-ruby` at `requirement`.
    pub fn with_plugin_requirement(self, requirement: &str) -> Self {
        let package = serde_json::json!({
            "name": "test-project",
            "private": true,
            "devDependencies": { "vite-plugin-ruby": requirement }
        });
        self.write("package.json", &serde_json::to_string_pretty(&package).unwrap());
        self
    }

    /// Create the build manifests Vite would write under `output_dir`
    /// (relative to the root, e.g. `public/vite`).
    pub fn with_manifests(self, output_dir: &str, names: &[&str]) -> Self {
        for name in names {
            self.write(&format!("{output_dir}/.vite/{name}"), "{}");
        }
        self
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}
