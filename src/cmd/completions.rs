//! Completions command implementation
//!
//! Handles the `delta-calc completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::{Arg, ArgAction, Command};
use clap_complete::{generate, Shell};
use std::io::Write;

/// Command tree used for completion generation
///
/// Mirrors the derive-based CLI in `main.rs`, which the library cannot see.
pub fn completion_command() -> Command {
    Command::new("delta-calc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Percentage difference (Δ%) calculator")
        .arg(
            Arg::new("no-emoji")
                .long("no-emoji")
                .help("Disable emoji output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("calc")
                .about("Compare two values once")
                .allow_negative_numbers(true)
                .arg(Arg::new("value1").required(true))
                .arg(Arg::new("value2").required(true))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("field"),
                )
                .arg(
                    Arg::new("field")
                        .long("field")
                        .value_parser(["larger", "smaller", "delta", "proportion"]),
                )
                .arg(
                    Arg::new("no-formula")
                        .long("no-formula")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("interactive").about("Prompt for values repeatedly"))
        .subcommand(
            Command::new("init")
                .about("Write a default .delta-calc.toml")
                .arg(
                    Arg::new("force")
                        .long("force")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(clap::value_parser!(Shell)),
                ),
        )
}

/// Write a completion script for `shell`
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = completion_command();
    generate(shell, &mut cmd, "delta-calc", out);
}

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
///
/// # Examples
///
/// ```bash
/// # Bash
/// delta-calc completions bash > /etc/bash_completion.d/delta-calc
///
/// # Zsh
/// delta-calc completions zsh > ~/.zfunc/_delta-calc
/// ```
pub fn cmd_completions(shell: Shell) {
    write_completions(shell, &mut std::io::stdout());
}
