//! Error types for the codesight library.
//!
//! Failure policy: only failures on the *primary* requested artifact (the
//! analyzed file, the repository being queried) are fatal and surface to the
//! caller. Per-item failures inside a batch — an unreadable snippet file, a
//! commit whose file list cannot be fetched — are logged and dropped locally
//! and never abort the batch.

use std::io;

use thiserror::Error;

/// Main result type for codesight operations.
pub type Result<T> = std::result::Result<T, CodesightError>;

/// Error type for all codesight operations.
#[derive(Error, Debug)]
pub enum CodesightError {
    /// Primary target file is absent. Fatal for the whole operation.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was requested
        path: String,
    },

    /// The queried path is not inside a git repository. Fatal for the git
    /// insight pipeline only.
    #[error("Not in a git repository: {path}")]
    NotARepository {
        /// Path where repository discovery started
        path: String,
    },

    /// I/O failure on a primary artifact.
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Git collaborator failure on the history query itself.
    #[error("Git error: {message}")]
    Git {
        /// Error description
        message: String,
        /// Underlying libgit2 error
        #[source]
        source: Option<git2::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl CodesightError {
    /// Create a file-not-found error for a primary target.
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a not-a-repository error.
    pub fn not_a_repository(path: impl Into<String>) -> Self {
        Self::NotARepository { path: path.into() }
    }

    /// Create a new I/O error with context.
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new git error with context.
    pub fn git(message: impl Into<String>, source: git2::Error) -> Self {
        Self::Git {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a new configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context.
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new serialization error.
    pub fn serialization(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Serialization {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error is fatal for the operation that produced it.
    /// All surfaced errors are; batch-internal failures never become a
    /// `CodesightError` in the first place.
    pub fn is_fatal(&self) -> bool {
        true
    }
}

impl From<serde_yaml::Error> for CodesightError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::serialization("YAML serialization failed", err)
    }
}

impl From<serde_json::Error> for CodesightError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization("JSON serialization failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_artifact() {
        let err = CodesightError::file_not_found("src/missing.js");
        assert_eq!(err.to_string(), "File not found: src/missing.js");

        let err = CodesightError::not_a_repository("/tmp/scratch");
        assert_eq!(err.to_string(), "Not in a git repository: /tmp/scratch");
    }

    #[test]
    fn config_field_is_preserved() {
        let err = CodesightError::config_field("must be positive", "git.max_results");
        match err {
            CodesightError::Config { field, .. } => {
                assert_eq!(field.as_deref(), Some("git.max_results"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
