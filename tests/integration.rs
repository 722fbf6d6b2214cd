// Integration tests for the ici CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// argument handling, exit codes and stderr output.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the ici binary.
fn ici() -> Command {
    Command::cargo_bin("ici").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    ici()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ici"));
}

#[test]
fn cli_help_flag() {
    ici()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("coherence audit"));
}

#[test]
fn aggregate_requires_scores_path() {
    ici()
        .arg("aggregate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn evaluate_rejects_path_and_text_together() {
    ici()
        .args(["evaluate", "sentencia.txt", "--text", "duda razonable"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    ici()
        .args(["-q", "-v", "criteria"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn evaluate_missing_file_is_a_runtime_failure() {
    ici()
        .args(["evaluate", "/nonexistent/sentencia.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}
