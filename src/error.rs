//! Error types for geosearch

use thiserror::Error;

/// Main error type for geosearch operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Geolocation error: {0}")]
    Geo(String),

    #[error("Places error: {0}")]
    Places(String),
}

impl Error {
    /// Whether the error came from one of the remote providers
    pub fn is_upstream(&self) -> bool {
        matches!(self, Error::Geo(_) | Error::Places(_))
    }
}

/// Result type alias for geosearch operations
pub type Result<T> = std::result::Result<T, Error>;
