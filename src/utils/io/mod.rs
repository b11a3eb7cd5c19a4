//! IO utilities for dataset files
//!
//! Thin wrappers around `std::fs` that attach the path and purpose to any
//! failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{EstimatorError, Result};

/// Check that a directory exists and is readable
///
/// # Arguments
/// * `path` - Directory to check
/// * `purpose` - Why the directory is needed (for error context)
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.is_dir() {
        return Err(EstimatorError::io(
            path,
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory not found, needed for {purpose}"),
            ),
        ));
    }

    fs::read_dir(path)
        .map(|_| ())
        .map_err(|e| EstimatorError::io(path, e))
}

/// Read a file to string with rich error information
///
/// # Arguments
/// * `path` - The file to read
/// * `purpose` - Why the file is being read (for error context)
///
/// # Returns
/// * `Result<String>` - The file content or a detailed error
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    if !path.is_file() {
        return Err(EstimatorError::io(
            path,
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found, needed for {purpose}"),
            ),
        ));
    }

    fs::read_to_string(path).map_err(|e| {
        let source = match e.kind() {
            io::ErrorKind::InvalidData => io::Error::new(
                io::ErrorKind::InvalidData,
                format!("file contains invalid UTF-8, cannot read {purpose}"),
            ),
            _ => e,
        };
        EstimatorError::io(path, source)
    })
}
