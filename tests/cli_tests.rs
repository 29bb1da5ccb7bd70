//! CLI and basic command tests

mod common;

use common::{fixture_config, weigh, weigh_with_config};
use predicates::prelude::*;

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    weigh()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tolerance"));
}

#[test]
fn test_version_displays() {
    weigh()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("weigh"));
}

#[test]
fn test_unknown_command_fails() {
    weigh()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    weigh()
        .args(["-v", "-q", "config", "path"])
        .assert()
        .failure();
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn test_config_path_follows_env() {
    let expected = fixture_config("grams.yaml");
    weigh_with_config("grams.yaml")
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_string_lossy().to_string()));
}

#[test]
fn test_config_show_defaults() {
    weigh()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_unit: mg"))
        .stdout(predicate::str::contains("weighing-calc-cache-v9"));
}

#[test]
fn test_config_show_fixture_as_json() {
    weigh_with_config("grams.yaml")
        .args(["config", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"default_total_unit\": \"g\""))
        .stdout(predicate::str::contains("lab-shell-v2"));
}

#[test]
fn test_config_show_missing_explicit_file_fails() {
    weigh_with_config("does-not-exist.yaml")
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn test_check_with_malformed_explicit_config_fails() {
    weigh_with_config("malformed.yaml")
        .args(["check", "-w", "1", "-t", "1", "-a", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse YAML"));
}

#[test]
fn test_calc_with_malformed_explicit_config_fails() {
    weigh_with_config("malformed.yaml")
        .args(["calc", "1", "+", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse YAML"));
}

#[test]
fn test_assets_list_with_missing_explicit_config_fails() {
    weigh_with_config("does-not-exist.yaml")
        .args(["assets", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn test_completions_bash() {
    weigh()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("weigh"));
}
