//! Configuration file data structures

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DeltaCalcError;
use crate::input::{InputLimits, DEFAULT_MAX_MAGNITUDE, DEFAULT_PRECISION};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".delta-calc.toml";

/// Upper bound for any configurable number of decimal places
pub const MAX_PLACES: u32 = 10;

/// delta-calc configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// How raw inputs are bounded and rounded
    #[serde(default)]
    pub input: InputSettings,

    /// How results are rendered
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Input range and precision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InputSettings {
    /// Largest accepted absolute value
    #[serde(default = "default_max_magnitude")]
    pub max_magnitude: Decimal,

    /// Fractional digits kept from each input
    #[serde(default = "default_precision")]
    pub precision: u32,
}

fn default_max_magnitude() -> Decimal {
    DEFAULT_MAX_MAGNITUDE
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            max_magnitude: default_max_magnitude(),
            precision: default_precision(),
        }
    }
}

/// Result rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DisplaySettings {
    /// Decimal places for the larger/smaller values
    #[serde(default = "default_value_places")]
    pub value_places: u32,

    /// Decimal places for percentages
    #[serde(default = "default_percent_places")]
    pub percent_places: u32,

    /// Print the `Δ% = (1 - a/b) × 100` line after results
    #[serde(default = "default_show_formula")]
    pub show_formula: bool,
}

fn default_value_places() -> u32 {
    4
}

fn default_percent_places() -> u32 {
    2
}

fn default_show_formula() -> bool {
    true
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            value_places: default_value_places(),
            percent_places: default_percent_places(),
            show_formula: default_show_formula(),
        }
    }
}

impl ConfigFile {
    /// Validate configuration constraints
    ///
    /// # Examples
    ///
    /// ```
    /// use delta_calc::config::ConfigFile;
    /// use rust_decimal::Decimal;
    ///
    /// let mut config = ConfigFile::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.input.max_magnitude = Decimal::ZERO;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), DeltaCalcError> {
        if self.input.max_magnitude <= Decimal::ZERO {
            return Err(DeltaCalcError::ConfigInvalid {
                field: "input.max-magnitude".to_string(),
                reason: format!("must be positive, got {}", self.input.max_magnitude),
            });
        }

        let places = [
            ("input.precision", self.input.precision),
            ("display.value-places", self.display.value_places),
            ("display.percent-places", self.display.percent_places),
        ];
        for (field, value) in places {
            if value > MAX_PLACES {
                return Err(DeltaCalcError::ConfigInvalid {
                    field: field.to_string(),
                    reason: format!("must be at most {}, got {}", MAX_PLACES, value),
                });
            }
        }

        Ok(())
    }

    /// Input limits derived from the `[input]` table
    pub fn limits(&self) -> InputLimits {
        InputLimits {
            max_magnitude: self.input.max_magnitude,
            precision: self.input.precision,
        }
    }
}
