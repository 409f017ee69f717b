//! Error types for SocialHub

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SocialHubError>;

#[derive(Error, Debug)]
pub enum SocialHubError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SocialHubError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SocialHubError::Validation(_) => 3,
            SocialHubError::InvalidInput(_) => 3,
            SocialHubError::Generation(_) => 1,
            SocialHubError::Config(_) => 1,
        }
    }
}

/// User-input failures surfaced before any state mutation.
///
/// Every variant is recoverable: the draft and history are left exactly
/// as they were when the failing operation was invoked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Topic cannot be empty")]
    EmptyTopic,

    #[error("Post needs text or an attached media file")]
    EmptyContent,

    #[error("Select at least one platform")]
    NoPlatformSelected,
}

/// Failures of the external text-generation exchange.
///
/// A generation failure never mutates the draft; the busy gate is cleared
/// before the error is surfaced.
#[derive(Error, Debug, Clone)]
pub enum GenerationError {
    #[error("Generation API key is not configured")]
    MissingApiKey,

    #[error("A generation request is already in flight")]
    Busy,

    #[error("Generation request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Generation API returned status {0}")]
    Status(u16),

    #[error("Generation API returned no usable text")]
    MalformedResponse,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}
