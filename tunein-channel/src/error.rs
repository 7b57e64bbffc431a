//! Error types for the TuneIn channel engine

/// Result type alias for channel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while navigating or resolving
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned an error status
    #[error("API error: {0}")]
    ApiError(String),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The outline document could not be parsed
    #[error("Malformed outline document: {0}")]
    MalformedDocument(#[from] tunein_formats::FormatError),

    /// An identifier token could not be decoded
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// Upstream explicitly reported nothing available at this location
    #[error("No stations or shows available")]
    EmptyResult,

    /// Presets were requested without a configured username
    #[error("Presets require a configured username")]
    MissingUsername,
}

impl Error {
    /// Create an API error
    pub fn api_error(msg: impl Into<String>) -> Self {
        Self::ApiError(msg.into())
    }

    /// Create a malformed-token error
    pub fn malformed_token(token: impl Into<String>) -> Self {
        Self::MalformedToken(token.into())
    }
}
