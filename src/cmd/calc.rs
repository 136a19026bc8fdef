//! Calc command implementation
//!
//! Handles the `delta-calc calc` command which compares two values given on
//! the command line and prints the result once.

use anyhow::{Context, Result};
use std::env;
use std::io::{self, Write};

use crate::calculator::compute;
use crate::config::{ConfigFile, ConfigLoader};
use crate::error::DeltaCalcError;
use crate::input::parse_value;
use crate::report::Report;
use crate::session::Field;

/// Output options for a single calculation
#[derive(Debug, Clone, Default)]
pub struct CalcOptions {
    /// Print the outcome as JSON
    pub json: bool,
    /// Print only the raw value of one field
    pub field: Option<Field>,
    /// Suppress the formula line
    pub no_formula: bool,
}

/// Compare two values and print the result
///
/// Reads `.delta-calc.toml` from the current directory if present.
///
/// # Examples
///
/// ```no_run
/// use delta_calc::cmd::calc::{cmd_calc, CalcOptions};
///
/// cmd_calc("3.58", "4.23", &CalcOptions::default())?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - Either value is not a number or is out of range
/// - The config file exists but is unreadable or invalid
pub fn cmd_calc(value1: &str, value2: &str, options: &CalcOptions) -> Result<()> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let config = ConfigLoader::load(&cwd)?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    run_calc(value1, value2, options, &config, &mut stdout.lock(), &mut stderr.lock())
}

/// Calculation against an explicit config, result writer and status writer
pub fn run_calc<W: Write, E: Write>(
    value1: &str,
    value2: &str,
    options: &CalcOptions,
    config: &ConfigFile,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    let limits = config.limits();
    let first = parse_value(value1, &limits).map_err(|source| DeltaCalcError::InvalidValue {
        argument: "first".to_string(),
        source,
    })?;
    let second = parse_value(value2, &limits).map_err(|source| DeltaCalcError::InvalidValue {
        argument: "second".to_string(),
        source,
    })?;

    let outcome = compute(first, second);

    if let Some(field) = options.field {
        match field.value_in(&outcome) {
            Some(value) => writeln!(out, "{}", value.normalize())?,
            None => {
                // Status states have no numeric fields
                let report = Report::from_outcome(&outcome, &config.display);
                writeln!(err, "{}", report.larger)?;
            }
        }
        return Ok(());
    }

    if options.json {
        let json =
            serde_json::to_string_pretty(&outcome).context("Failed to serialize result")?;
        writeln!(out, "{}", json)?;
        return Ok(());
    }

    let mut display = config.display.clone();
    display.show_formula &= !options.no_formula;
    Report::from_outcome(&outcome, &display).write_to(out)?;

    Ok(())
}
