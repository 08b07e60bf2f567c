//! Utility functions for error handling
//!
//! Wraps file access so that failures carry the path and the reason the file
//! was needed.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ClamlError, Result};

/// Safely read a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
pub fn safe_read(path: &Path, purpose: &str) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| {
        let context = match source.kind() {
            io::ErrorKind::NotFound => format!("File not found - needed for: {purpose}"),
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            _ => format!("Failed to read file content for: {purpose}"),
        };

        ClamlError::File {
            path: path.to_path_buf(),
            context,
            source,
        }
    })
}
