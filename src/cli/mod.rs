//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command};

use crate::config::ConfigError;

/// Process exit code for an error returned by a command.
///
/// Configuration problems map to `EX_CONFIG`, everything else to
/// `EX_SOFTWARE`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ConfigError>().is_some() {
        exitcode::CONFIG
    } else {
        exitcode::SOFTWARE
    }
}
