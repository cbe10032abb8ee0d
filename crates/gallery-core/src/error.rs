//! Error types for the media gallery

use thiserror::Error;

use crate::resource::ResourceId;

/// Main error type for gallery operations
#[derive(Error, Debug)]
pub enum GalleryError {
    /// The request never produced a response (connection refused, DNS, reset)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status
    #[error("Backend returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The backend answered but reported the operation as failed
    #[error("Rejected by backend: {0}")]
    Rejected(String),

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Upload form in file mode with no file selected
    #[error("No file selected for upload")]
    MissingUploadSource,

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PDF thumbnail generation failed
    #[error("Thumbnail error: {0}")]
    Thumbnail(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Resource is not in the local gallery
    #[error("Resource not found: {0}")]
    NotFound(ResourceId),

    /// Configuration could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl GalleryError {
    /// Whether the failure happened below HTTP (no response received).
    pub fn is_transport(&self) -> bool {
        matches!(self, GalleryError::Transport(_))
    }
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;
