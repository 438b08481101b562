use thiserror::Error;

/// Errors returned by the analytics API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("not found: {url}")]
    NotFound { url: String },

    #[error("bad request: {url}")]
    BadRequest { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// A date field on the wire was not ISO-8601.
    #[error("invalid date in field '{field}': {value:?}")]
    InvalidDate { field: &'static str, value: String },
}
