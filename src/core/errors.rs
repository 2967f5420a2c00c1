//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for trackmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying byte source could not be read. Fatal for the whole
    /// combine operation: there is no partial-success mode.
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content was empty, so no header row could be parsed.
    #[error("Empty CSV export: {name}")]
    EmptyFile { name: String },

    /// The CSV reader rejected the content outright (e.g. invalid UTF-8).
    /// Row-level mess never produces this; it is defaulted instead.
    #[error("Malformed CSV in {name}: {source}")]
    Csv {
        name: String,
        #[source]
        source: csv::Error,
    },

    /// Roster configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a file read error with path context
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Convenience Result type using the trackmap error
pub type Result<T> = std::result::Result<T, Error>;
