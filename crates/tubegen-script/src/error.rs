//! Script generation error types.

use thiserror::Error;

/// Result type for script generation.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Reasons a text-generation call did not produce usable text.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Text generation is not configured")]
    NotConfigured,

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Text generation request failed: {0}")]
    Request(String),

    #[error("Text generation API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid text generation response: {0}")]
    InvalidResponse(String),
}

impl ScriptError {
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }
}
