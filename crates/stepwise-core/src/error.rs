//! Error types for the stepwise library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for form construction, navigation and storage.
#[derive(Error, Debug)]
pub enum StepwiseError {
    /// Malformed construction input (empty or mismatched step lists)
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
    /// A step-indexed operation received an index outside the form
    #[error("Step index {index} is out of range for a form with {len} steps")]
    IndexOutOfRange { index: usize, len: usize },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Form session not found for the given ID
    #[error("Form with ID {id} not found")]
    SessionNotFound { id: u64 },
    /// Form session already submitted and can no longer change
    #[error("Form with ID {id} has already been submitted")]
    SessionSubmitted { id: u64 },
    /// Submission requested before the final step was reached and completed
    #[error("Form with ID {id} is not ready to be submitted")]
    NotReadyToSubmit { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> StepwiseError {
        StepwiseError::Database {
            message: self.message,
            source,
        }
    }
}

impl StepwiseError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates an invalid configuration error.
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        StepwiseError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Creates an index error for a form of `len` steps.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        StepwiseError::IndexOutOfRange { index, len }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| StepwiseError::database(message).with_source(e))
    }
}

/// Result type alias for stepwise operations
pub type Result<T> = std::result::Result<T, StepwiseError>;
