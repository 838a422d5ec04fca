//! Interactive input directory prompt.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Ask for the input directory on the terminal.
pub fn prompt_directory(formatter: &Formatter, title: &str) -> Result<PathBuf> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Readline(format!("Failed to initialize editor: {}", e)))?;

    println!("{}", formatter.info(&format!("{}: directory with notice files", title)));

    match editor.readline("directory> ") {
        Ok(line) => parse_directory(&line),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
            Err(CliError::InvalidInput("No directory given".to_string()))
        }
        Err(err) => Err(CliError::Readline(err.to_string())),
    }
}

/// Trim a typed or pasted path, dropping surrounding quotes.
pub fn parse_directory(line: &str) -> Result<PathBuf> {
    let trimmed = line.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| trimmed.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(trimmed)
        .trim();

    if unquoted.is_empty() {
        return Err(CliError::InvalidInput("No directory given".to_string()));
    }
    Ok(PathBuf::from(unquoted))
}
