#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! delta-calc library
//!
//! This library computes the percentage difference (Δ%) between two values
//! and renders the result. It can be used programmatically in addition to
//! the CLI interface.
//!
//! # Basic Example
//!
//! ```
//! use delta_calc::calculator::{compute, Outcome};
//! use rust_decimal::Decimal;
//!
//! let outcome = compute(Decimal::from(100), Decimal::from(50));
//! let c = outcome.comparison().unwrap();
//! assert_eq!(c.delta_percent, Decimal::from(50));
//! assert_eq!(c.delta_percent + c.proportion_percent, Decimal::ONE_HUNDRED);
//!
//! assert_eq!(compute(Decimal::ZERO, Decimal::ZERO), Outcome::BothZero);
//! ```
//!
//! # Advanced Example: Live Session
//!
//! A front end keeps a [`session::Session`] and renders every change:
//!
//! ```
//! use delta_calc::config::DisplaySettings;
//! use delta_calc::input::InputLimits;
//! use delta_calc::report::Report;
//! use delta_calc::session::{Field, Session};
//! use rust_decimal::Decimal;
//!
//! let mut session = Session::new(InputLimits::default());
//! session.set_first("3.58").unwrap();
//! let outcome = session.set_second("4.23").unwrap();
//!
//! let report = Report::from_outcome(&outcome, &DisplaySettings::default());
//! assert_eq!(report.delta, "Δ% = 15.37%");
//! assert_eq!(session.field_value(Field::Larger), Some(Decimal::new(423, 2)));
//!
//! session.clear();
//! assert!(session.outcome().is_none());
//! ```

/// Percentage difference computation
pub mod calculator;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Input parsing and range checks
pub mod input;
/// Rendering outcomes for display
pub mod report;
/// Live two-input calculator state
pub mod session;
