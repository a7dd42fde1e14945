//! Error types for the weather service.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Failures that are not reduced to a friendly message.
///
/// Transport problems never show up here: the fetch helper logs them and
/// reports "no data" instead.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("malformed JSON from {url}: {source}")]
    MalformedJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected response shape from {url}: {source}")]
    UnexpectedShape {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, WeatherError>;

impl From<WeatherError> for McpError {
    fn from(err: WeatherError) -> Self {
        McpError::internal_error(err.to_string(), None)
    }
}
