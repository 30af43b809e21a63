use thiserror::Error;

/// Errors returned by the Claude API client.
#[derive(Debug, Error)]
pub enum ClaudeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-2xx status; `message` carries a body snippet.
    #[error("Claude API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// The client was constructed with an unusable base URL.
    #[error("invalid Claude base URL: {0}")]
    InvalidBaseUrl(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
