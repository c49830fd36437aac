//! Error types for the filter crate.

use thiserror::Error;

/// Errors that can occur when filtering or building specifications.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// A required argument was absent or could not be understood.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl FilterError {
    /// Create an error for a required argument that was not supplied.
    pub fn missing(name: &'static str) -> Self {
        Self::InvalidArgument {
            name,
            reason: "value is required".to_string(),
        }
    }

    /// Create an error for an argument whose value was rejected.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
