//! Error types for SajaruBox.

use std::fmt;
use thiserror::Error;

/// Broad classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A file, topic, resource or tool that does not exist.
    NotFound,
    /// Arguments that could not be used as given. Raised by the tool layer,
    /// never by [`Error`] itself.
    InvalidInput,
    /// Failures coming from the storage layer.
    FileSystem,
}

/// Stable machine-readable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// File missing from the document root.
    pub const FILE_NOT_FOUND: Self = Self("FILE_NOT_FOUND");
    /// File could not be read.
    pub const FILE_READ_ERROR: Self = Self("FILE_READ_ERROR");
    /// File or directory could not be written.
    pub const FILE_WRITE_ERROR: Self = Self("FILE_WRITE_ERROR");
    /// Topic key not present in the catalog.
    pub const TOPIC_NOT_FOUND: Self = Self("TOPIC_NOT_FOUND");
    /// Resource URI not present in the catalog.
    pub const RESOURCE_NOT_FOUND: Self = Self("RESOURCE_NOT_FOUND");

    /// The code as a string.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The main error type for SajaruBox operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Something looked up by name does not exist.
    #[error("{message}")]
    NotFound {
        /// Error code.
        code: ErrorCode,
        /// Human-readable message naming the missing identifier.
        message: String,
    },

    /// Storage failure.
    #[error("{message}")]
    FileSystem {
        /// Error code.
        code: ErrorCode,
        /// Human-readable message.
        message: String,
        /// Path involved, if any.
        path: Option<String>,
        /// Underlying error.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a not-found error with the given code.
    pub fn not_found(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            message: message.into(),
        }
    }

    /// Category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::FileSystem { .. } => ErrorCategory::FileSystem,
        }
    }

    /// Stable code of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { code, .. } | Self::FileSystem { code, .. } => *code,
        }
    }

    /// Whether this error means "does not exist".
    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }
}

/// Result type alias using SajaruBox's Error.
pub type Result<T> = std::result::Result<T, Error>;
