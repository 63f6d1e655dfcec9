//! Upload error types.

use thiserror::Error;

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

/// Errors that can occur while preparing or performing an upload.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Invalid OAuth redirect URI: {0}")]
    InvalidRedirectUri(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Token refresh failed: {0}")]
    TokenRefresh(String),

    #[error("Upload request failed: {0}")]
    Request(String),

    #[error("YouTube API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid YouTube response: {0}")]
    InvalidResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl UploadError {
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }
}
