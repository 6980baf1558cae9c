use assert_cmd::Command;
use predicates::str::contains;
use std::fs;

const BINARY_NAME: &str = "risk-wall";

/// Helper to get a temporary home directory without a config file
fn temp_home() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Terminal dashboard"))
        .stdout(contains("snapshot"));
}

#[test]
/// Snapshot prints every panel title and the pie labels.
fn snapshot_prints_dashboard() {
    let home = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["snapshot", "--width", "160"])
        .env("HOME", home.path())
        .env("RUST_LOG", "error")
        .assert()
        .success()
        .stdout(contains("Risk Wall"))
        .stdout(contains("Scenario Distribution"))
        .stdout(contains("Relief 28%"))
        .stdout(contains("Secondary Sanctions Risk"));
}

#[test]
/// Snapshot rejects widths the layout cannot fit.
fn snapshot_rejects_narrow_width() {
    let home = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["snapshot", "--width", "10"])
        .env("HOME", home.path())
        .assert()
        .failure()
        .stderr(contains("at least"));
}

/// Index of the first stdout line containing `text`.
fn line_of(stdout: &str, text: &str) -> usize {
    stdout
        .lines()
        .position(|line| line.contains(text))
        .unwrap_or_else(|| panic!("{text:?} not printed"))
}

#[test]
/// An explicit config file is honoured by snapshots.
fn snapshot_reads_config_file() {
    let home = temp_home();
    let path = home.path().join("config.json");
    fs::write(&path, r#"{ "small_breakpoint": 200, "wide_breakpoint": 300 }"#).unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    let output = cmd
        .arg("--config")
        .arg(&path)
        .args(["snapshot", "--width", "160"])
        .env("HOME", home.path())
        .env("RUST_LOG", "error")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    // 160 columns is narrow under these breakpoints: one panel per row.
    assert!(line_of(&stdout, "Scenario Distribution") < line_of(&stdout, "Probability Timeline"));
}

#[test]
/// Without a config file the same width pairs the first two panels.
fn snapshot_pairs_panels_by_default() {
    let home = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    let output = cmd
        .args(["snapshot", "--width", "160"])
        .env("HOME", home.path())
        .env("RUST_LOG", "error")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    assert_eq!(
        line_of(&stdout, "Scenario Distribution"),
        line_of(&stdout, "Probability Timeline")
    );
}

#[test]
/// A broken config file fails before anything is drawn.
fn invalid_config_is_reported() {
    let home = temp_home();
    let path = home.path().join("config.json");
    fs::write(&path, "not json").unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--config")
        .arg(&path)
        .arg("snapshot")
        .env("HOME", home.path())
        .assert()
        .failure()
        .stderr(contains("ConfigParse"));
}
