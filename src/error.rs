use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when talking to the episodes API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to fetch {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response from {url}: {source}")]
    DecodeFailed {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Errors that can occur while normalizing a raw episode record
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Failed to parse publication date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("Episode '{id}' has a non-numeric duration '{value}'")]
    InvalidDuration { id: String, value: String },
}

/// Errors that can occur when writing generated page artifacts
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write artifact {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize page props: {0}")]
    SerializeFailed(#[from] serde_json::Error),
}

/// Top-level errors for page generation
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Normalize error: {0}")]
    Normalize(#[from] NormalizeError),
}
