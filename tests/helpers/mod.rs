//! Test helpers for quickcsv integration tests
//!
//! This module provides helper functions to simplify writing integration
//! tests for the quickcsv library and command-line tool.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Helper function to create a temp directory for tests, respecting CARGO_TARGET_TMPDIR if set
pub fn create_temp_dir() -> Result<TempDir, Box<dyn std::error::Error>> {
    if let Ok(cargo_target_tmpdir) = env::var("CARGO_TARGET_TMPDIR") {
        // If CARGO_TARGET_TMPDIR is set, ensure the directory exists
        fs::create_dir_all(&cargo_target_tmpdir)?;
        Ok(TempDir::new_in(cargo_target_tmpdir)?)
    } else {
        Ok(TempDir::new()?)
    }
}

/// Helper function to create a standard people file (comma separated, with headers)
pub fn prepare_test_file(dir: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    create_custom_csv(
        dir,
        "people.csv",
        "name,age,city\nAlice,25,Berlin\nBob,30,Munich\nCarol,22,Berlin\n",
    )
}

/// Helper function to create a test file with custom content
pub fn create_custom_csv(
    dir: &Path,
    filename: &str,
    content: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Collect every record of a decoded file as plain strings
pub fn as_strings(records: &[quickcsv::cell::Record]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}
