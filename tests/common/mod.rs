//! Common test utilities and helpers
//!
//! Shared setup for CLI integration tests: a binary handle and a scratch
//! directory so each test reads (or writes) its own `.delta-calc.toml`.

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Handle to the delta-calc binary with colors disabled
pub fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_delta-calc"));
    cmd.env("NO_COLOR", "1").env("CLICOLOR", "0");
    cmd
}

/// Binary handle running inside `dir`
pub fn bin_in(dir: &Path) -> Command {
    let mut cmd = bin();
    cmd.current_dir(dir);
    cmd
}

/// Empty scratch directory
pub fn scratch() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Scratch directory holding the given config file contents
#[allow(dead_code)]
pub fn scratch_with_config(contents: &str) -> TempDir {
    let dir = scratch();
    std::fs::write(dir.path().join(".delta-calc.toml"), contents)
        .expect("Failed to write config");
    dir
}
