/// Error types for the content API layer
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the connection failed
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The payload was not the JSON shape we expect
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Reading a local plan file failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
