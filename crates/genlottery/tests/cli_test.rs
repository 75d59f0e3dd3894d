//! Integration tests for the `genlottery` binary.
//!
//! These exercise the text surface end to end: argument parsing, the
//! generate / print / delete flows, and exit codes. Every test isolates
//! its save directory and config so nothing touches the user's files.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `genlottery` binary with env isolation.
///
/// Points the save directory at `save_dir` and config lookup at a
/// nonexistent path, and clears any ambient `GENLOTTERY_*` overrides.
fn genlottery_cmd(save_dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("genlottery");
    cmd.env("HOME", save_dir.path())
        .env("XDG_CONFIG_HOME", "/tmp/genlottery-test-nonexistent")
        .env("GENLOTTERY_SAVE_DIR", save_dir.path())
        .env_remove("GENLOTTERY_DEFAULT_TYPE")
        .env_remove("GENLOTTERY_DEFAULT_LINES");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    for flag in ["-v", "--version"] {
        genlottery_cmd(&dir)
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("genlottery Version: 1.0.5"));
    }
}

#[test]
fn test_help_flag() {
    let dir = TempDir::new().unwrap();
    genlottery_cmd(&dir).arg("--help").assert().success().stdout(
        predicate::str::contains("lottery")
            .and(predicate::str::contains("--delete"))
            .and(predicate::str::contains("--no_save"))
            .and(predicate::str::contains("--print"))
            .and(predicate::str::contains("mutually exclusive")),
    );
}

// ── Argument validation ─────────────────────────────────────────────

#[test]
fn test_lines_out_of_range_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    for bad in ["0", "101"] {
        let output = genlottery_cmd(&dir)
            .args(["--text", "-l", bad])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(2), "expected usage error for -l {bad}");
        let text = combined_output(&output);
        assert!(
            text.contains("valid range"),
            "expected range message in:\n{text}"
        );
    }
}

#[test]
fn test_unknown_lottery_type_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = genlottery_cmd(&dir)
        .args(["--text", "-t", "POWERBALL"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("POWERBALL"));
}

#[test]
fn test_action_flags_are_mutually_exclusive() {
    let dir = TempDir::new().unwrap();
    for args in [["-d", "-p"], ["-d", "-n"], ["-n", "-p"]] {
        let output = genlottery_cmd(&dir)
            .arg("--text")
            .args(args)
            .output()
            .unwrap();
        assert_eq!(
            output.status.code(),
            Some(2),
            "expected conflict for {args:?}"
        );
    }
}

// ── Generate ────────────────────────────────────────────────────────

#[test]
fn test_generate_no_save_prints_lines_and_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    genlottery_cmd(&dir)
        .args(["--text", "-n", "-t", "EURO", "-l", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("EURO Line 1:")
                .and(predicate::str::contains("not been saved")),
        );

    assert!(!dir.path().join("EURO.db").exists());
}

#[test]
fn test_generate_saves_by_default() {
    let dir = TempDir::new().unwrap();
    genlottery_cmd(&dir)
        .args(["--text", "-t", "EURO", "-l", "3"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("EURO Line 3:")
                .and(predicate::str::contains("3 lines were generated")),
        );

    assert!(dir.path().join("EURO.db").exists());
}

// ── Print saved ─────────────────────────────────────────────────────

#[test]
fn test_print_after_generate_shows_the_saved_batch() {
    let dir = TempDir::new().unwrap();
    genlottery_cmd(&dir)
        .args(["--text", "-t", "THUNDER", "-l", "2"])
        .assert()
        .success();

    genlottery_cmd(&dir)
        .args(["--text", "-p", "-t", "THUNDER"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Displaying a previously saved set")
                .and(predicate::str::contains("Saved on "))
                .and(predicate::str::contains("SAVED THUNDER Line 1:"))
                .and(predicate::str::contains("SAVED THUNDER Line 2:")),
        );
}

#[test]
fn test_print_without_a_saved_file_reports_missing() {
    let dir = TempDir::new().unwrap();
    genlottery_cmd(&dir)
        .args(["--text", "-p", "-t", "SET4LIFE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is missing"));
}

// ── Delete ──────────────────────────────────────────────────────────

#[test]
fn test_delete_removes_the_file_then_reports_not_found() {
    let dir = TempDir::new().unwrap();
    genlottery_cmd(&dir)
        .args(["--text", "-t", "THUNDER", "-l", "2"])
        .assert()
        .success();
    assert!(dir.path().join("THUNDER.db").exists());

    genlottery_cmd(&dir)
        .args(["--text", "-d", "-t", "THUNDER"])
        .assert()
        .success()
        .stdout(predicate::str::contains("was deleted"));
    assert!(!dir.path().join("THUNDER.db").exists());

    genlottery_cmd(&dir)
        .args(["--text", "-d", "-t", "THUNDER"])
        .assert()
        .success()
        .stdout(predicate::str::contains("was not found"));
}
