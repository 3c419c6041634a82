use std::env;

const DEFAULT_FOOTBALL_URL: &str = "https://v3.football.api-sports.io";
const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Sentinel meaning "the operator never supplied a real key". A key equal to
/// this value short-circuits all sports-data calls with a configuration
/// error before any network I/O.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Sports-data provider
    pub football_base_url: String,
    pub football_api_key: String,

    // Generative-AI provider
    pub gemini_base_url: String,
    pub gemini_api_key: String,
    pub gemini_model: String,

    // Live results
    pub live_poll_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            football_base_url: env::var("API_FOOTBALL_URL")
                .unwrap_or_else(|_| DEFAULT_FOOTBALL_URL.into()),
            football_api_key: env::var("API_FOOTBALL_KEY")
                .unwrap_or_else(|_| PLACEHOLDER_API_KEY.into()),

            gemini_base_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_URL.into()),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.into()),

            live_poll_secs: env::var("LIVE_POLL_SECS")
                .unwrap_or_else(|_| "30".into())
                .parse()?,
        })
    }

    /// Returns true if a real (non-placeholder) sports-data key is present.
    pub fn has_football_key(&self) -> bool {
        !self.football_api_key.is_empty() && self.football_api_key != PLACEHOLDER_API_KEY
    }
}
