//! Configuration file loading and saving

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::Path;

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .delta-calc.toml in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use delta_calc::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Values shown with {} places", config.display.value_places);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(dir: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(dir, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(dir: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(e).context("Failed to read .delta-calc.toml");
            }
        };

        let config: ConfigFile =
            toml_edit::de::from_str(&contents).context("Failed to parse .delta-calc.toml")?;

        config.validate()?;

        log::debug!("loaded config from {}: {:?}", config_path.display(), config);
        Ok(config)
    }

    /// Save config to .delta-calc.toml in the given directory
    pub fn save(config: &ConfigFile, dir: &Path) -> Result<()> {
        Self::save_with_fs(config, dir, &RealFileSystem)
    }

    /// Save config with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(config: &ConfigFile, dir: &Path, fs: &FS) -> Result<()> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        let contents =
            toml_edit::ser::to_string_pretty(config).context("Failed to serialize config")?;

        fs.write(&config_path, contents)
            .context("Failed to write .delta-calc.toml")?;

        Ok(())
    }

    /// Check if config file exists in the directory
    pub fn exists(dir: &Path) -> bool {
        Self::exists_with_fs(dir, &RealFileSystem)
    }

    /// Check for the config file with a custom filesystem implementation
    pub fn exists_with_fs<FS: FileSystem>(dir: &Path, fs: &FS) -> bool {
        fs.exists(&dir.join(CONFIG_FILE_NAME))
    }
}
