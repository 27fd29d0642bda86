//! Smoke tests to verify CLI wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn top_level_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"))
        .stdout(predicate::str::contains("seed"));
}

#[test]
fn serve_help_documents_bind_flag() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind"));
}

#[test]
fn database_url_flag_is_global() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("migrate").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("frobnicate");

    cmd.assert().failure();
}
