//! Error types for the project manager library.

use std::fmt;

use thiserror::Error;

use crate::models::{DraftField, ProjectId};

/// Comprehensive error type for all project manager operations.
#[derive(Error, Debug)]
pub enum SproutError {
    /// The remote store could not be reached (connect, timeout, transport)
    #[error("Remote store unreachable: {message}")]
    Unreachable { message: String },
    /// The remote store failed with a server-side error
    #[error("Remote store error ({status}): {message}")]
    ServerError { status: u16, message: String },
    /// The remote store rejected the submitted payload
    #[error("Remote store rejected the project: {message}")]
    ValidationRejected { message: String },
    /// The target project does not exist on the remote store
    #[error("Project with ID {id} not found on the remote store")]
    NotFound { id: ProjectId },
    /// Required draft fields are empty; nothing was sent to the remote store
    #[error("Missing required fields: {}", MissingList(.fields))]
    MissingFields { fields: Vec<DraftField> },
    /// Project not present in the local collection
    #[error("Project with ID {id} not found")]
    ProjectNotFound { id: ProjectId },
    /// The collection already holds a project with this ID
    #[error("Project with ID {id} already exists")]
    DuplicateId { id: ProjectId },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Response bodies that could not be decoded
    #[error("Failed to decode remote store response: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

struct MissingList<'a>(&'a [DraftField]);

impl fmt::Display for MissingList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> SproutError {
        SproutError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl SproutError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an unreachable error from any transport failure.
    pub fn unreachable(message: impl fmt::Display) -> Self {
        Self::Unreachable {
            message: message.to_string(),
        }
    }

    /// True for failures reported by the remote store gateway.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Unreachable { .. }
                | Self::ServerError { .. }
                | Self::ValidationRejected { .. }
                | Self::NotFound { .. }
        )
    }
}

/// Specialized extension trait for configuration-related Results.
pub trait ConfigResultExt<T> {
    /// Map any error into a configuration error with a message.
    fn config_context(self, message: &str) -> Result<T>;
}

impl<T, E> ConfigResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn config_context(self, message: &str) -> Result<T> {
        self.map_err(|e| SproutError::Configuration {
            message: format!("{message}: {e}"),
        })
    }
}

/// Result type alias for project manager operations
pub type Result<T> = std::result::Result<T, SproutError>;
