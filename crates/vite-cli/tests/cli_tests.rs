//! Integration tests for the vite-config CLI binary.
//!
//! These tests exercise the actual compiled binary using assert_cmd. The
//! process environment is cleared so ambient `VITE_RUBY_*` variables cannot
//! leak into resolution.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use vite_test_utils::TestProject;

/// Get a Command for the vite-config binary with an empty environment
fn vite_config_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vite-config"));
    cmd.env_clear();
    cmd
}

fn project() -> TestProject {
    TestProject::new()
        .with_config(json!({
            "all": { "sourceCodeDir": "app/frontend", "port": 3036 },
            "production": { "publicOutputDir": "vite-production" }
        }))
        .with_lockfile("pnpm-lock.yaml")
}

fn show_json(project: &TestProject, extra_args: &[&str]) -> Value {
    let output = vite_config_cmd()
        .arg("--root")
        .arg(project.root())
        .args(extra_args)
        .args(["show", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_lists_commands() {
    vite_config_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("manifests"));
}

#[test]
fn test_version_output() {
    vite_config_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vite-config"));
}

#[test]
fn test_no_command_shows_help_hint() {
    vite_config_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("--help"));
}

// ============================================================================
// Show Tests
// ============================================================================

#[test]
fn test_show_json_reports_resolved_options() {
    let project = project();

    let report = show_json(&project, &[]);
    let options = &report["options"];

    assert_eq!(options["port"], 3036);
    assert_eq!(options["mode"], "development");
    assert_eq!(options["package_manager"], "pnpm");
    assert_eq!(options["public_output_dir"], "vite");
    assert_eq!(options["root"], project.root().display().to_string());
    assert_eq!(report["origin"], "http://localhost:3036");
    assert_eq!(
        report["config_file"],
        project.path("config/vite.json").display().to_string()
    );
    assert_eq!(report["diagnostics"], json!([]));
}

#[test]
fn test_show_json_applies_mode_section() {
    let report = show_json(&project(), &["--mode", "production"]);
    let options = &report["options"];

    assert_eq!(options["mode"], "production");
    assert_eq!(options["public_output_dir"], "vite-production");
}

#[test]
fn test_show_json_includes_missing_file_diagnostic() {
    let report = show_json(&TestProject::new(), &[]);

    let diagnostics = report["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].as_str().unwrap().contains("config/vite.json"));
}

#[test]
fn test_show_table_output() {
    let project = project();

    vite_config_cmd()
        .arg("--root")
        .arg(project.root())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("source_code_dir"))
        .stdout(predicate::str::contains("app/frontend"))
        .stdout(predicate::str::contains("http://localhost:3036"));
}

#[test]
fn test_env_variables_override_file() {
    let project = project();

    vite_config_cmd()
        .current_dir(project.root())
        .env("VITE_RUBY_PORT", "4000")
        .arg("origin")
        .assert()
        .success()
        .stdout("http://localhost:4000\n");
}

#[test]
fn test_missing_config_file_warns_and_uses_defaults() {
    let project = TestProject::new();

    vite_config_cmd()
        .arg("--root")
        .arg(project.root())
        .arg("origin")
        .assert()
        .success()
        .stdout("http://localhost:3036\n")
        .stderr(predicate::str::contains("config/vite.json"));
}

// ============================================================================
// Derived Value Tests
// ============================================================================

#[test]
fn test_origin_with_https() {
    let project = TestProject::new().with_config(json!({
        "all": { "https": true, "host": "example.com", "port": 3036 }
    }));

    vite_config_cmd()
        .arg("--root")
        .arg(project.root())
        .arg("origin")
        .assert()
        .success()
        .stdout("https://example.com:3036\n");
}

#[test]
fn test_env_prints_prefixed_variables() {
    let project = project();

    vite_config_cmd()
        .arg("--root")
        .arg(project.root())
        .args(["env", "--var", "VITE_RUBY_HOST=override.test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VITE_RUBY_PORT=3036\n"))
        .stdout(predicate::str::contains("VITE_RUBY_PACKAGE_MANAGER=pnpm\n"))
        .stdout(predicate::str::contains("VITE_RUBY_HOST=override.test\n"))
        .stdout(predicate::str::contains("VITE_RUBY_HOST=localhost").not())
        .stdout(predicate::str::contains("ADDITIONAL_ENTRYPOINTS").not());
}

#[test]
fn test_watched_lists_source_glob_and_config() {
    let project = project();

    vite_config_cmd()
        .arg("--root")
        .arg(project.root())
        .arg("watched")
        .assert()
        .success()
        .stdout(predicate::str::contains("app/frontend/**/*\n"))
        .stdout(predicate::str::contains("config/vite.{rb,json}\n"))
        .stdout(predicate::str::contains("pnpm-lock.yaml\n"));
}

#[test]
fn test_manifests_without_build() {
    let project = project();

    vite_config_cmd()
        .arg("--root")
        .arg(project.root())
        .arg("manifests")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No manifest found"));
}

#[test]
fn test_manifests_after_build() {
    let project = project().with_manifests("public/vite", &["manifest.json"]);
    let manifest = project.path("public/vite/.vite/manifest.json");

    vite_config_cmd()
        .arg("--root")
        .arg(project.root())
        .arg("manifests")
        .assert()
        .success()
        .stdout(format!("{}\n", manifest.display()));

    vite_config_cmd()
        .arg("--root")
        .arg(project.root())
        .args(["manifests", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("manifest-assets.json"));
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_invalid_port_fails() {
    let project = TestProject::new().with_config(json!({ "all": { "port": "vite" } }));

    vite_config_cmd()
        .arg("--root")
        .arg(project.root())
        .arg("origin")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("port"));
}

#[test]
fn test_incompatible_plugin_fails_unless_skipped() {
    let project = TestProject::new().with_plugin_requirement("^3.0.0");

    vite_config_cmd()
        .arg("--root")
        .arg(project.root())
        .arg("origin")
        .assert()
        .failure()
        .stderr(predicate::str::contains("vite-plugin-ruby"));

    vite_config_cmd()
        .arg("--root")
        .arg(project.root())
        .env("VITE_RUBY_SKIP_COMPATIBILITY_CHECK", "true")
        .arg("origin")
        .assert()
        .success();
}

#[test]
fn test_missing_root_directory() {
    let project = TestProject::new();

    vite_config_cmd()
        .arg("--root")
        .arg(project.path("does-not-exist"))
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}
