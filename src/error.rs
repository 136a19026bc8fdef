//! Error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes
//! - Proper exit codes for scripting
//!
//! # Examples
//!
//! ```
//! use delta_calc::error::DeltaCalcError;
//! use delta_calc::input::{parse_value, InputLimits};
//!
//! let err = parse_value("twelve", &InputLimits::default()).unwrap_err();
//! let err = DeltaCalcError::InvalidValue {
//!     argument: "first".to_string(),
//!     source: err,
//! };
//! assert_eq!(err.exit_code(), 65);
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::input::InputError;

/// delta-calc errors with contextual suggestions
#[derive(Error, Debug)]
pub enum DeltaCalcError {
    /// A command-line value could not be used as input
    #[error("Invalid {argument} value")]
    InvalidValue {
        /// Which argument ("first" or "second")
        argument: String,
        #[source]
        /// Parse failure
        source: InputError,
    },

    /// A configuration value violates its constraints
    #[error("Invalid configuration: {field} {reason}")]
    ConfigInvalid {
        /// Offending key, dotted (`display.value-places`)
        field: String,
        /// What is wrong with it
        reason: String,
    },

    /// Refusing to overwrite an existing config file
    #[error("Configuration file already exists: {path}")]
    ConfigExists {
        /// Path to the existing file
        path: PathBuf,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl DeltaCalcError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use delta_calc::error::DeltaCalcError;
    /// use std::path::PathBuf;
    ///
    /// let error = DeltaCalcError::ConfigExists {
    ///     path: PathBuf::from(".delta-calc.toml"),
    /// };
    /// assert!(error.suggestion().unwrap().contains("--force"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InvalidValue { source, .. } => match source {
                InputError::Empty => Some("Provide a number, e.g. 4.23".to_string()),
                InputError::NotANumber(_) => Some(
                    "Use a plain decimal such as -3.58, 1,234.5 or 1e3".to_string(),
                ),
                InputError::OutOfRange { max, .. } => Some(format!(
                    "Values must lie between -{max} and {max}; raise input.max-magnitude in .delta-calc.toml to widen the range"
                )),
            },
            Self::ConfigInvalid { .. } => {
                Some("Fix the value in .delta-calc.toml or regenerate it with 'delta-calc init --force'".to_string())
            }
            Self::ConfigExists { .. } => {
                Some("Edit the file directly, or rerun with --force to overwrite it".to_string())
            }
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes following sysexits.h conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidValue { .. } => 65,  // EX_DATAERR
            Self::ConfigInvalid { .. } => 78, // EX_CONFIG
            Self::ConfigExists { .. } => 73,  // EX_CANTCREAT
            Self::Io { .. } => 74,            // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(suggestion) = Self::find(error).and_then(DeltaCalcError::suggestion) {
            output.push_str(&format!(
                "\n{} {}\n",
                style("help:").cyan().bold(),
                suggestion
            ));
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map_or(1, DeltaCalcError::exit_code)
    }

    /// First `DeltaCalcError` in the chain, including ones wrapped in context
    fn find(error: &anyhow::Error) -> Option<&DeltaCalcError> {
        error.chain().find_map(|e| e.downcast_ref::<DeltaCalcError>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use rust_decimal::Decimal;

    fn invalid(source: InputError) -> DeltaCalcError {
        DeltaCalcError::InvalidValue {
            argument: "first".to_string(),
            source,
        }
    }

    #[test]
    fn test_invalid_value_message_names_argument() {
        let err = invalid(InputError::NotANumber("abc".to_string()));
        assert_eq!(err.to_string(), "Invalid first value");
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn test_out_of_range_suggestion_mentions_limit() {
        let err = invalid(InputError::OutOfRange {
            value: Decimal::from(2_000_000),
            max: Decimal::from(1_000_000),
        });

        let suggestion = err
            .suggestion()
            .expect("OutOfRange should have suggestion");
        assert!(suggestion.contains("1000000"));
        assert!(suggestion.contains("max-magnitude"));
    }

    #[test]
    fn test_exit_codes_follow_conventions() {
        let config_err = DeltaCalcError::ConfigInvalid {
            field: "input.precision".to_string(),
            reason: "too big".to_string(),
        };
        assert_eq!(config_err.exit_code(), 78);

        let exists_err = DeltaCalcError::ConfigExists {
            path: PathBuf::from(".delta-calc.toml"),
        };
        assert_eq!(exists_err.exit_code(), 73);

        let io_err = DeltaCalcError::Io {
            context: "reading stdin".to_string(),
            source: std::io::Error::other("test"),
        };
        assert_eq!(io_err.exit_code(), 74);
    }

    #[test]
    fn test_all_error_variants_have_suggestions() {
        let errors = vec![
            invalid(InputError::Empty),
            invalid(InputError::NotANumber("x".to_string())),
            invalid(InputError::OutOfRange {
                value: Decimal::TEN,
                max: Decimal::ONE,
            }),
            DeltaCalcError::ConfigInvalid {
                field: "display.value-places".to_string(),
                reason: "must be at most 10".to_string(),
            },
            DeltaCalcError::ConfigExists {
                path: PathBuf::from("test"),
            },
            DeltaCalcError::Io {
                context: "reading file".to_string(),
                source: std::io::Error::other("test"),
            },
        ];

        for err in &errors {
            let suggestion = err.suggestion();
            assert!(
                suggestion.is_some(),
                "Error {:?} should have a suggestion",
                err
            );
            assert!(err.exit_code() > 0 && err.exit_code() < 256);
        }
    }

    #[test]
    fn test_formatter_includes_cause_and_help() {
        let err = anyhow::Error::new(invalid(InputError::NotANumber("abc".to_string())));
        let formatted = ErrorFormatter::format(&err);

        assert!(formatted.contains("Invalid first value"));
        assert!(formatted.contains("'abc' is not a valid number"));
        assert!(formatted.contains("plain decimal"));
        assert_eq!(ErrorFormatter::exit_code(&err), 65);
    }

    #[test]
    fn test_formatter_finds_error_behind_context() {
        let err: anyhow::Result<()> = Err(DeltaCalcError::ConfigInvalid {
            field: "input.precision".to_string(),
            reason: "must be at most 10".to_string(),
        })
        .context("Failed to load configuration");

        let err = err.unwrap_err();
        assert_eq!(ErrorFormatter::exit_code(&err), 78);
        assert!(ErrorFormatter::format(&err).contains("init --force"));
    }

    #[test]
    fn test_formatter_falls_back_to_generic_exit_code() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(ErrorFormatter::exit_code(&err), 1);
        assert!(!ErrorFormatter::format(&err).contains("help:"));
    }
}
