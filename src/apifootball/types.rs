use serde::Deserialize;

use crate::models::Fixture;

// ---------------------------------------------------------------------------
// ApiEnvelope — the provider's two response shapes, decoded explicitly
// ---------------------------------------------------------------------------

/// The provider wraps every fixtures payload in one of two envelopes:
/// `{"response": [...]}` on success, or `{"errors": {"requests": "..."}}`
/// when the request was understood but rejected (rate limits, bad plan).
/// Variant order matters: a success body is tried first, so a body carrying
/// both fields resolves as success.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiEnvelope {
    Success { response: Vec<Fixture> },
    Failure { errors: ApiErrors },
}

#[derive(Debug, Deserialize)]
pub struct ApiErrors {
    #[serde(default)]
    pub requests: Option<String>,
}

impl ApiErrors {
    pub fn message(&self) -> String {
        self.requests
            .clone()
            .unwrap_or_else(|| "API error occurred.".to_string())
    }
}
