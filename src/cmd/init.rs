//! Init command implementation
//!
//! Handles the `delta-calc init` command which writes a `.delta-calc.toml`
//! with every setting at its default value.

use anyhow::{Context, Result};
use console::style;
use std::env;
use std::path::{Path, PathBuf};

use crate::config::{self, ConfigFile, ConfigLoader};
use crate::error::DeltaCalcError;
use crate::fmt::{icon, CHECKMARK, INFO, SPARKLES};

/// Create a default configuration file in the current directory
///
/// # Examples
///
/// ```no_run
/// use delta_calc::cmd::init::cmd_init;
///
/// cmd_init(false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init(force: bool) -> Result<()> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let config = ConfigFile::default();
    let path = init_in(&cwd, &config, force)?;

    println!(
        "{} {} Created {}",
        icon(SPARKLES),
        style("delta-calc init").bold(),
        style(path.display()).cyan()
    );
    println!();
    println!("{}  Defaults written:", icon(INFO));
    println!(
        "   {} input.max-magnitude = {}",
        style("•").dim(),
        style(config.input.max_magnitude).green()
    );
    println!(
        "   {} input.precision = {}",
        style("•").dim(),
        style(config.input.precision).green()
    );
    println!(
        "   {} display.value-places = {}",
        style("•").dim(),
        style(config.display.value_places).green()
    );
    println!(
        "   {} display.percent-places = {}",
        style("•").dim(),
        style(config.display.percent_places).green()
    );
    println!(
        "   {} display.show-formula = {}",
        style("•").dim(),
        style(config.display.show_formula).green()
    );
    println!();
    println!("{} Edit the file to customize.", icon(CHECKMARK));

    Ok(())
}

/// Write `config` into `dir`, refusing to overwrite unless `force`
pub fn init_in(dir: &Path, config: &ConfigFile, force: bool) -> Result<PathBuf> {
    let path = dir.join(config::CONFIG_FILE_NAME);

    if ConfigLoader::exists(dir) && !force {
        return Err(DeltaCalcError::ConfigExists { path }.into());
    }

    ConfigLoader::save(config, dir)?;
    Ok(path)
}
