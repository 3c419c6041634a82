use reqwest::Client;

use crate::config::{AppConfig, PLACEHOLDER_API_KEY};
use crate::errors::FetchError;
use crate::models::Fixture;

use super::cache::FixtureCache;
use super::types::ApiEnvelope;

const API_FOOTBALL_HOST: &str = "v3.football.api-sports.io";

// ---------------------------------------------------------------------------
// FootballClient — cached fetch layer over the sports-data provider
// ---------------------------------------------------------------------------

/// Typed client for the fixtures API. All reads flow through here: cached
/// reads for stable data (schedules, team histories) and uncached reads for
/// volatile live scores. Clones share the underlying connection pool and
/// cache.
#[derive(Debug, Clone)]
pub struct FootballClient {
    http: Client,
    base_url: String,
    api_key: String,
    cache: FixtureCache,
}

impl FootballClient {
    pub fn new(http: Client, config: &AppConfig, cache: FixtureCache) -> Self {
        Self {
            http,
            base_url: config.football_base_url.trim_end_matches('/').to_string(),
            api_key: config.football_api_key.clone(),
            cache,
        }
    }

    pub fn cache(&self) -> &FixtureCache {
        &self.cache
    }

    /// Fetch an endpoint through the session cache. The first successful
    /// fetch of a URL — an empty result included — populates the cache;
    /// every later call for the same endpoint is served without network I/O.
    /// Errors never populate the cache, so a retry re-fetches.
    pub async fn fixtures_cached(&self, endpoint: &str) -> Result<Vec<Fixture>, FetchError> {
        self.ensure_configured()?;
        let url = self.endpoint_url(endpoint);

        if let Some(hit) = self.cache.get(&url) {
            tracing::debug!(url = %url, "fixtures served from cache");
            return Ok(hit);
        }

        let fixtures = self.fetch(&url).await?;
        self.cache.insert(&url, fixtures.clone());
        Ok(fixtures)
    }

    /// All currently in-play matches. Live data is volatile, so this always
    /// goes to the network and never touches the cache.
    pub async fn fixtures_live(&self) -> Result<Vec<Fixture>, FetchError> {
        self.ensure_configured()?;
        self.fetch(&self.endpoint_url("fixtures?live=all")).await
    }

    /// A league's fixtures for one season.
    pub async fn league_fixtures(
        &self,
        league: u32,
        season: i32,
    ) -> Result<Vec<Fixture>, FetchError> {
        self.fixtures_cached(&format!("fixtures?league={league}&season={season}"))
            .await
    }

    /// A team's most recent `last` fixtures in a season.
    pub async fn team_recent(
        &self,
        team: u64,
        season: i32,
        last: u8,
    ) -> Result<Vec<Fixture>, FetchError> {
        self.fixtures_cached(&format!("fixtures?team={team}&season={season}&last={last}"))
            .await
    }

    fn ensure_configured(&self) -> Result<(), FetchError> {
        if self.api_key.is_empty() || self.api_key == PLACEHOLDER_API_KEY {
            return Err(FetchError::NotConfigured);
        }
        Ok(())
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<Fixture>, FetchError> {
        let resp = self
            .http
            .get(url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", API_FOOTBALL_HOST)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }

        let body = resp.text().await?;
        match serde_json::from_str::<ApiEnvelope>(&body)? {
            ApiEnvelope::Success { response } => {
                tracing::debug!(url = %url, count = response.len(), "fixtures fetched");
                Ok(response)
            }
            ApiEnvelope::Failure { errors } => Err(FetchError::Api(errors.message())),
        }
    }
}
