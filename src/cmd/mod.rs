//! Command handlers for delta-calc CLI
//!
//! Each submodule handles a specific CLI command.

pub mod calc;
pub mod completions;
pub mod init;
pub mod interactive;

// Re-export command functions for convenient access
pub use calc::{cmd_calc, CalcOptions};
pub use completions::cmd_completions;
pub use init::cmd_init;
pub use interactive::cmd_interactive;
