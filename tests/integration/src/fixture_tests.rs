//! End-to-end resolution against the checked-in Rails fixture project
//!
//! The fixture at `test-fixtures/projects/rails-app` has per-mode sections,
//! a pnpm lockfile, a compatible plugin requirement and a production build.

use pretty_assertions::assert_eq;
use std::path::PathBuf;
use vite_config::{Attributes, ConfigResolver, Environment, PackageManager, ResolvedConfig};

fn fixture_root() -> PathBuf {
    vite_fs::clean(
        &PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/projects/rails-app"),
    )
}

fn resolve_fixture(env: Environment) -> ResolvedConfig {
    ConfigResolver::new(env)
        .with_working_dir(fixture_root())
        .resolve(Attributes::new())
        .expect("fixture should resolve")
}

#[test]
fn test_development_defaults() {
    let config = resolve_fixture(Environment::new());

    assert_eq!(config.root(), fixture_root());
    assert_eq!(config.mode(), "development");
    assert!(config.auto_build());
    assert_eq!(config.port(), 3036);
    assert_eq!(config.package_manager(), PackageManager::Pnpm);
    assert_eq!(config.build_output_dir(), fixture_root().join("public/vite-dev"));
    assert!(config.manifest_paths().is_empty());
    assert!(config.diagnostics().is_empty());
    assert_eq!(
        config.resolved_entrypoints_dir(),
        fixture_root().join("app/frontend/entrypoints")
    );
    assert!(config.resolved_entrypoints_dir().join("application.js").is_file());
}

#[test]
fn test_runtime_mode_selects_production_section() {
    let config = resolve_fixture(Environment::new().with("RACK_ENV", "production"));

    assert_eq!(config.mode(), "production");
    assert!(!config.auto_build());
    assert!(config.hide_build_console_output());
    assert_eq!(config.port(), 3036, "production inherits the baseline port");
    assert_eq!(
        config.manifest_paths(),
        vec![fixture_root().join("public/vite-production/.vite/manifest.json")]
    );
}

#[test]
fn test_test_mode_uses_its_own_port() {
    let config = resolve_fixture(Environment::new().with("VITE_RUBY_MODE", "test"));

    assert_eq!(config.port(), 3037);
    assert_eq!(config.origin(), "http://localhost:3037");
    assert_eq!(config.public_output_dir(), "vite-test");
}

#[test]
fn test_watched_paths_for_fixture() {
    let watched = resolve_fixture(Environment::new()).watched_paths();

    assert_eq!(
        &watched[..4],
        &[
            "app/views/**/*.erb".to_string(),
            "app/components/**/*.ts".to_string(),
            "app/frontend/**/*".to_string(),
            "config/vite.{rb,json}".to_string(),
        ]
    );
    assert!(!watched.iter().any(|path| path.starts_with("app/frontend/admin")));
    assert!(watched.contains(&"pnpm-lock.yaml".to_string()));
}

#[test]
fn test_exported_env_reproduces_configuration() {
    let original = resolve_fixture(Environment::new().with("RACK_ENV", "production"));

    let exported: Environment = original.to_env(&Environment::new()).into_iter().collect();
    let elsewhere = tempfile::tempdir().unwrap();
    let reproduced = ConfigResolver::new(exported)
        .with_working_dir(elsewhere.path())
        .resolve(Attributes::new())
        .unwrap();

    assert_eq!(reproduced.to_raw(), original.to_raw());
}

#[test]
fn test_within_root_runs_in_fixture() {
    let _lock = vite_test_utils::cwd_lock();
    let config = resolve_fixture(Environment::new());
    let before = std::env::current_dir().unwrap();

    let inside = config.within_root(|| std::env::current_dir().unwrap()).unwrap();

    assert_eq!(inside.canonicalize().unwrap(), fixture_root().canonicalize().unwrap());
    assert_eq!(std::env::current_dir().unwrap(), before);
}
