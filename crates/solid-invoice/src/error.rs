//! Error types for invoice writing.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while writing an invoice.
#[derive(Debug, thiserror::Error)]
pub enum InvoiceError {
    /// A required argument was absent or unusable.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The report could not be written.
    #[error("failed to write invoice to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InvoiceError {
    /// Create an invalid-argument error.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for invoice operations.
pub type Result<T> = std::result::Result<T, InvoiceError>;
