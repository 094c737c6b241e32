//! Error types for the moeru-devtools library.
//!
//! Structured error variants preserve context (file paths, configuration
//! fields) so failures surface with enough information to act on, whether
//! they come from the rename engine or the converter service.

use std::io;
use std::path::Path;

use thiserror::Error;

/// Main result type for devtools operations.
pub type Result<T> = std::result::Result<T, DevtoolsError>;

/// Error type covering both devtools units and their shared infrastructure.
#[derive(Error, Debug)]
pub enum DevtoolsError {
    /// I/O related errors (file operations, sockets)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// JSON errors tied to a specific manifest file
    #[error("JSON error in {file_path}: {message}")]
    Json {
        /// Error description
        message: String,
        /// Manifest file the error occurred in
        file_path: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Serialization/deserialization errors without file context
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
    },

    /// Converter service errors (bind, serve)
    #[error("Server error: {message}")]
    Server {
        /// Error description
        message: String,
    },
}

impl DevtoolsError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new JSON error tied to a manifest file
    pub fn json_in_file(file_path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            message: source.to_string(),
            file_path: file_path.display().to_string(),
            source: Some(source),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new validation error with field context
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }
}

impl From<io::Error> for DevtoolsError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for DevtoolsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for DevtoolsError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}
