//! Smoke tests for the farmkeeper binary's argument handling

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("farmkeeper").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Tab to open on start"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("farmkeeper").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("farmkeeper"));
}

#[test]
fn test_unknown_tab_rejected() {
    let mut cmd = Command::cargo_bin("farmkeeper").unwrap();
    cmd.arg("--tab").arg("settings");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tab 'settings'"));
}

#[test]
fn test_missing_config_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");

    let mut cmd = Command::cargo_bin("farmkeeper").unwrap();
    cmd.arg("--config").arg(&missing);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_invalid_config_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[ui]\ninitial_tab = \"settings\"").unwrap();

    let mut cmd = Command::cargo_bin("farmkeeper").unwrap();
    cmd.arg("--config").arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}
