use thiserror::Error;

/// Common error type for the Victron exporter components.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using the exporter's Error.
pub type Result<T> = std::result::Result<T, Error>;
