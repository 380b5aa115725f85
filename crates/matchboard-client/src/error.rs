use thiserror::Error;

/// Errors returned by the scores API client.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API error (status {0})")]
    Status(u16),

    /// The API returned an error object instead of a list, e.g. `{"error": "..."}`.
    #[error("API error: {0}")]
    Api(String),

    /// The body was valid JSON but not a list of matches.
    #[error("invalid API response (not a list)")]
    InvalidShape,

    /// The response body was not valid JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL could not be parsed.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
