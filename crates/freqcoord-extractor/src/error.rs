//! Error types for the Extractor

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading notice documents.
///
/// Parsing itself never fails; only reading the file or loading a
/// configuration can.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The document could not be read (missing, unreadable, not UTF-8)
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path of the document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
