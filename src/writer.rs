//! Stylesheet output.

use std::fs;
use std::path::Path;

use crate::error::{Result, StarfieldError};

/// Default output path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "src/stars.css";

/// Write a stylesheet, replacing any existing file.
///
/// The parent directory must already exist; it is not created.
pub fn write_stylesheet(path: &Path, css: &str) -> Result<()> {
    fs::write(path, css).map_err(|e| StarfieldError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write stylesheet: {}", e),
    })
}
