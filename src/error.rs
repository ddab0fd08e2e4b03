use gallery_core::ApiError;
use thiserror::Error;

/// Errors while starting the gallery app
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] std::io::Error),
    /// Configuration file is not valid TOML
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// Configuration values are unusable
    #[error("Configuration error: {0}")]
    Config(String),
    /// HTTP clients could not be set up
    #[error("API client error: {0}")]
    Api(#[from] ApiError),
}

/// User-friendly error messages for UI
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Filesystem(_) => "The configuration file could not be read.".to_string(),
            AppError::Parse(e) => format!("The configuration file is invalid: {}", e),
            AppError::Config(msg) => msg.clone(),
            AppError::Api(_) => "Could not connect to the gallery service.".to_string(),
        }
    }
}
