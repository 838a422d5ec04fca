//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extraction configuration or document error
    #[error(transparent)]
    Extractor(#[from] freqcoord_extractor::ExtractorError),

    /// Workbook could not be written
    #[error(transparent)]
    Report(#[from] freqcoord_report::ReportError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Nothing usable to process; no workbook is written
    #[error("No usable input: {0}")]
    NoInput(String),

    /// Interactive prompt failed
    #[error("Prompt error: {0}")]
    Readline(String),
}
