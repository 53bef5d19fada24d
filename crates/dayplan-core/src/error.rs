//! Core error types for dayplan-core.
//!
//! This module defines the error hierarchy using thiserror. Nothing in the
//! plan engine itself can fail; errors only arise at the edges, when
//! parsing input, validating entities, or touching the state file.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dayplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Import-related errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to load the state or config file
    #[error("Failed to load {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save the state or config file
    #[error("Failed to save {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Could not determine a data directory for this platform
    #[error("No data directory available")]
    NoDataDir,
}

/// Import-specific errors.
///
/// An import is atomic: any error here means the whole batch was rejected
/// and no record was merged.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The payload was not parseable as JSON
    #[error("Payload is not valid JSON: {0}")]
    Parse(String),

    /// A record inside the payload violates an entity invariant
    #[error("Invalid {kind} record at index {index}: {source}")]
    InvalidRecord {
        kind: &'static str,
        index: usize,
        #[source]
        source: ValidationError,
    },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Time-of-day text that is not well-formed HH:MM
    #[error("Invalid time of day '{0}': expected HH:MM")]
    InvalidTime(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
