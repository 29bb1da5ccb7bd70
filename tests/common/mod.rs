//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Path to a config fixture under `tests/fixtures/config`
pub fn fixture_config(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/config")
        .join(name)
}

/// Helper to get a weigh command isolated from the user's config
pub fn weigh() -> Command {
    weigh_with_config("defaults.yaml")
}

/// Helper to get a weigh command reading the named config fixture
pub fn weigh_with_config(name: &str) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("weigh"));
    cmd.env("WEIGH_CONFIG", fixture_config(name));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Helper to lay out an app-shell directory containing the given URLs
pub fn setup_app_shell(urls: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for url in urls {
        let relative = url.trim_start_matches('/');
        let path = if relative.is_empty() {
            tmp.path().join("index.html")
        } else {
            tmp.path().join(relative)
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, format!("content of {}", url)).unwrap();
    }
    tmp
}

/// Every file in the default precache list
pub const DEFAULT_SHELL: &[&str] = &[
    "/index.html",
    "/manifest.json",
    "/icons/android-launcher-icon-48-48.png",
    "/icons/android-launcher-icon-72-72.png",
    "/icons/android-launcher-icon-96-96.png",
    "/icons/android-launcher-icon-144-144.png",
    "/icons/android-launcher-icon-192-192.png",
    "/icons/android-launcher-icon-512-512.png",
];
