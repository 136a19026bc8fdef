//! Configuration for delta-calc
//!
//! This module provides:
//! - The `.delta-calc.toml` file structure (input limits, display settings)
//! - Loading and saving through the [`crate::infra::FileSystem`] abstraction

pub mod file;
pub mod loader;

pub use file::{ConfigFile, DisplaySettings, InputSettings, CONFIG_FILE_NAME, MAX_PLACES};
pub use loader::ConfigLoader;
