//! Error types for postx

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PostxError>;

#[derive(Error, Debug)]
pub enum PostxError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PostxError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PostxError::InvalidInput(_) => 3,
            PostxError::Platform(PlatformError::Authentication(_)) => 2,
            PostxError::Config(ConfigError::MissingCredential(_)) => 2,
            PostxError::Platform(_) => 1,
            PostxError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing credential: environment variable {0} is not set")]
    MissingCredential(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Failures reported by the remote platform or the network in between.
///
/// Messages carry the remote response verbatim.
#[derive(Error, Debug, Clone)]
pub enum PlatformError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Duplicate content rejected: {0}")]
    Duplicate(String),

    #[error("Posting failed: {0}")]
    Posting(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),
}
