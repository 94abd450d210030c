//! Render error types.

use thiserror::Error;

/// Errors that can occur while drawing a snapshot
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output failed
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a snapshot as JSON failed
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}
