use thiserror::Error;

/// Errors returned by [`crate::PlacesClient`].
#[derive(Debug, Error)]
pub enum PlacesError {
    /// No API key was configured. Raised before any request is attempted.
    #[error("places API key is not configured (set NOGI_PLACES_API_KEY)")]
    MissingCredential,

    /// The API answered with a non-2xx status. `body` is the raw response text.
    #[error("places API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The 2xx response body was not the expected JSON shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid places base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
