//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level failures live in [`crate::domain::ValidationError`] and are wrapped here
//! when they surface through a store operation.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in address book operations.
#[derive(Error, Debug)]
pub enum BookError {
    /// Reading or writing the book file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The book file is not a valid document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field in the book file failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No record is filed under the given name
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Another record is already filed under the given name
    #[error("Contact already exists: {0}")]
    NameTaken(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
