//! Error types for the Figma adapter

use thiserror::Error;

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// API-related errors
///
/// The adapter keeps no error taxonomy of its own: a non-success response
/// becomes [`ApiError::Request`] carrying the remote status and body
/// verbatim, and the host owns user-visible reporting and retry policy.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Figma API request failed with status {status}: {body}")]
    Request { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error(
        "Access token not configured. Set FIGMA_ACCESS_TOKEN or add access_token to the config file."
    )]
    MissingAccessToken,

    #[error("No team id available. Pass one explicitly or set FIGMA_TEAM_ID.")]
    MissingTeamId,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
