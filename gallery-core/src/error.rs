use thiserror::Error;

/// Errors talking to the gallery API or the image host
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// Request could not be sent or no response arrived
    #[error("Network error: {0}")]
    Network(String),
    /// Server answered with a non-success status
    #[error("Server returned status: {0}")]
    Status(u16),
    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// Client could not be built from the configuration
    #[error("Client configuration error: {0}")]
    Config(String),
}

/// Errors of a submission that already passed field validation
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UploadError {
    /// No hosted URL exists for the draft's file
    #[error("Image is required")]
    ImageMissing,
    /// Creating the image on the server failed
    #[error("Submission failed: {0}")]
    Submission(#[from] ApiError),
}
