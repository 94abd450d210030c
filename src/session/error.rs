//! Session error types.

use crate::render::RenderError;
use thiserror::Error;

/// Errors that end a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("render failed: {0}")]
    Render(#[from] RenderError),

    #[error("failed to read input: {0}")]
    Input(#[from] std::io::Error),
}
