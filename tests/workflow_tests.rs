//! End-to-end workflows: interactive sessions and config initialization

use predicates::prelude::*;

mod common;
use common::{bin_in, scratch};

#[test]
fn test_interactive_session_from_stdin() {
    let dir = scratch();
    bin_in(dir.path())
        .arg("--no-emoji")
        .write_stdin("100\n50\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter values to calculate Δ%"))
        .stdout(predicate::str::contains("Δ% = 50.00%"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_interactive_subcommand_matches_default() {
    let dir = scratch();
    bin_in(dir.path())
        .arg("interactive")
        .write_stdin("3.58\n4.23\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Δ% = 15.37%"));
}

#[test]
fn test_interactive_recovers_from_invalid_input() {
    let dir = scratch();
    bin_in(dir.path())
        .write_stdin("oops\n10\n0\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input"))
        .stdout(predicate::str::contains("Δ% = 100.00%"));
}

#[test]
fn test_interactive_clear_resets_session() {
    let dir = scratch();
    bin_in(dir.path())
        .write_stdin("10\nclear\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Values cleared"));
}

#[test]
fn test_init_then_calc_uses_written_config() {
    let dir = scratch();

    bin_in(dir.path())
        .args(["--no-emoji", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".delta-calc.toml"));

    let written = std::fs::read_to_string(dir.path().join(".delta-calc.toml"))
        .expect("init should write config");
    assert!(written.contains("[input]"));
    assert!(written.contains("percent-places = 2"));

    bin_in(dir.path())
        .args(["calc", "100", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Δ% = 50.00%"));
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let dir = scratch();
    std::fs::write(dir.path().join(".delta-calc.toml"), "").expect("write config");

    bin_in(dir.path())
        .arg("init")
        .assert()
        .code(73)
        .stderr(predicate::str::contains("already exists"));

    bin_in(dir.path()).args(["init", "--force"]).assert().success();
}
