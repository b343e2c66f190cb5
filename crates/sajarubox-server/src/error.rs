//! Server errors.

use thiserror::Error;

/// Failures that stop the protocol loop.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("stdio transport failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}
