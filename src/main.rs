use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::process;

use delta_calc::cmd;
use delta_calc::session::Field;

/// Percentage difference (Δ%) calculator
///
/// Compares two values and reports the larger and smaller magnitude, how far
/// the smaller falls short of the larger, and what share of it the smaller is.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for scripts or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two values once
    #[command(allow_negative_numbers = true)]
    Calc {
        /// First value
        value1: String,

        /// Second value
        value2: String,

        /// Output as JSON
        #[arg(long, conflicts_with = "field")]
        json: bool,

        /// Print only the raw value of one result field
        #[arg(long, value_enum)]
        field: Option<Field>,

        /// Do not print the formula line
        #[arg(long)]
        no_formula: bool,
    },

    /// Prompt for values repeatedly (default when no command is given)
    Interactive,

    /// Write a default .delta-calc.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    delta_calc::fmt::set_plain_icons(cli.no_emoji);

    let result = match cli.command {
        Some(Commands::Calc {
            value1,
            value2,
            json,
            field,
            no_formula,
        }) => cmd::cmd_calc(
            &value1,
            &value2,
            &cmd::CalcOptions {
                json,
                field,
                no_formula,
            },
        ),
        Some(Commands::Interactive) | None => cmd::cmd_interactive(),
        Some(Commands::Init { force }) => cmd::cmd_init(force),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        use delta_calc::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
