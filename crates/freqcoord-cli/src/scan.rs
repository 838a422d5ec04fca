//! Input directory listing

use crate::error::{CliError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Names of the regular files in `dir` ending in `.{extension}`, sorted.
///
/// A missing directory and an empty result are both fatal: the run stops
/// before anything is written.
pub fn list_input_files(dir: &Path, extension: &str) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(CliError::NoInput(format!(
            "directory not found: {}",
            dir.display()
        )));
    }

    let suffix = format!(".{}", extension);
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            debug!("Skipping non UTF-8 file name {:?}", entry.file_name());
            continue;
        };
        if name.ends_with(&suffix) {
            names.push(name);
        }
    }

    if names.is_empty() {
        return Err(CliError::NoInput(format!(
            "no {} files in {}",
            suffix,
            dir.display()
        )));
    }

    names.sort();
    debug!("Found {} input file(s) in {}", names.len(), dir.display());
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_matching_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.txt", "a.txt", "notes.md", "c.TXT"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let names = list_input_files(dir.path(), "txt").unwrap();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_input_files(&dir.path().join("absent"), "txt").unwrap_err();
        assert!(matches!(err, CliError::NoInput(_)));
    }

    #[test]
    fn test_no_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), "").unwrap();
        let err = list_input_files(dir.path(), "txt").unwrap_err();
        assert!(err.to_string().contains("no .txt files"));
    }
}
