//! freqcoord CLI library.
//!
//! Argument parsing, configuration, the per-variant pipelines and console
//! output for the `freqcoord` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod prompt;
pub mod scan;
pub mod summary;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use summary::RunSummary;
