//! Shared error types for the configuration and I/O surfaces
//!
//! The scoring and encoding code never fails; every degenerate input maps to a
//! sentinel value. Errors only arise while loading configuration or records.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for impact-tracker operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// TOML parse errors
    #[error(transparent)]
    TomlParse(#[from] toml::de::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a file system error wrapping the underlying I/O failure
    pub fn file_system_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        Self::FileSystem {
            message: format!("{}: {}", path.display(), source),
            path: Some(path),
            source: Some(source),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
