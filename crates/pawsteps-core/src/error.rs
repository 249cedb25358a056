//! Error types for the trainer library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all trainer operations.
#[derive(Error, Debug)]
pub enum TrainerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Lesson not found in the loaded curriculum
    #[error("Lesson '{id}' not found in the curriculum")]
    LessonNotFound { id: String },
    /// Week not found in the loaded curriculum
    #[error("Week {number} not found in the curriculum")]
    WeekNotFound { number: u32 },
    /// No puppy profile has been saved yet
    #[error("No puppy profile found; create one first")]
    ProfileMissing,
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
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

impl TrainerError {
    /// Creates a database error with additional context.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrainerError::database(message, e))
    }
}

/// Result type alias for trainer operations
pub type Result<T> = std::result::Result<T, TrainerError>;
