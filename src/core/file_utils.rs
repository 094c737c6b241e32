//! File utilities for safe and robust manifest rewriting.
//!
//! Manifests in a workspace tree are expected to be UTF-8 text, but the
//! renamer still has to survive the odd file that is not. Reads fall back to
//! lossy conversion with a warning; writes only touch disk when the content
//! actually changed.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::core::errors::{DevtoolsError, Result};

/// Safe file reading with UTF-8 validation and fallback handling
pub struct FileReader;

impl FileReader {
    /// Read a file to string, handling non-UTF-8 files gracefully
    pub fn read_to_string(file_path: &Path) -> Result<String> {
        match fs::read_to_string(file_path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                let bytes = fs::read(file_path)
                    .map_err(|err| DevtoolsError::io("Failed to read file as bytes", err))?;
                let content = String::from_utf8_lossy(&bytes).to_string();
                warn!(
                    "File contained invalid UTF-8, converted with lossy encoding: {}",
                    file_path.display()
                );
                Ok(content)
            }
            Err(e) => Err(DevtoolsError::io(
                format!("Failed to read file: {}", file_path.display()),
                e,
            )),
        }
    }
}

/// Write `content` to `file_path` only when it differs from `original`.
///
/// Returns `true` when the file was written. Comparing before writing is what
/// makes repeated rename runs report zero changes.
pub fn write_if_changed(file_path: &Path, original: &str, content: &str) -> Result<bool> {
    if original == content {
        return Ok(false);
    }
    fs::write(file_path, content).map_err(|e| {
        DevtoolsError::io(format!("Failed to write file: {}", file_path.display()), e)
    })?;
    Ok(true)
}
