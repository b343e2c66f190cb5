//! Error types for tools.

use sajarubox_common_core::{Error, ErrorCategory};
use thiserror::Error;

/// Errors that can occur while handling a request.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Lookup or storage failure.
    #[error(transparent)]
    Core(#[from] Error),

    /// No tool with this name.
    #[error("Tool desconocido: {name}")]
    UnknownTool {
        /// Requested tool name.
        name: String,
    },

    /// Arguments missing or of the wrong shape.
    #[error("argumentos invalidos para {tool}: {reason}")]
    InvalidArguments {
        /// Tool that rejected the arguments.
        tool: String,
        /// What was wrong.
        reason: String,
    },
}

impl ToolError {
    /// Category used to pick the protocol error code.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(e) => e.category(),
            Self::UnknownTool { .. } => ErrorCategory::NotFound,
            Self::InvalidArguments { .. } => ErrorCategory::InvalidInput,
        }
    }
}

/// Result type alias for tools.
pub type ToolResult<T> = std::result::Result<T, ToolError>;
