use thiserror::Error;

/// Failure modes of a sports-data fetch. The `Display` strings are what the
/// UI layer shows, so they are written for end users rather than operators.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API key is absent or still the placeholder. Fatal for the data
    /// source; only a configuration change can clear it.
    #[error("Please provide your API-Football key (API_FOOTBALL_KEY)")]
    NotConfigured,

    /// Non-2xx response from the provider.
    #[error("HTTP error! status: {0}")]
    Http(u16),

    /// Network-level failure (DNS, connect, timeout, body read).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not a recognizable provider envelope.
    #[error("unexpected provider response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Well-formed HTTP response carrying an application-level error
    /// message (e.g. rate limiting) in the envelope.
    #[error("{0}")]
    Api(String),
}
