//! Error types for report writing

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing a workbook
#[derive(Error, Debug)]
pub enum ReportError {
    /// Spreadsheet encoding or save failure
    #[error("Workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Output location could not be prepared
    #[error("Failed to prepare {}: {source}", path.display())]
    Io {
        /// Directory or file involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
