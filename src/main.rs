mod apifootball;
mod config;
mod errors;
mod gemini;
mod models;
mod prediction;
mod services;
mod share;

use chrono::{Datelike, Utc};
use tokio::time::Duration;

use crate::apifootball::{FixtureCache, FootballClient};
use crate::config::AppConfig;
use crate::gemini::GeminiClient;
use crate::prediction::{MatchPredictor, PredictionPhase};
use crate::services::live_results::{spawn_live_feed, LiveBoard};
use crate::share::{share_prediction, ShareError, SharePlatform};

const DEFAULT_LEAGUE: u32 = 39; // Premier League

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let http = reqwest::Client::new();
    let cache = FixtureCache::new();
    let football = FootballClient::new(http.clone(), &config, cache);

    match std::env::args().nth(1).as_deref() {
        Some("live") => follow_live(&config, football).await,
        Some("predict") => {
            let fixture_id = std::env::args()
                .nth(2)
                .and_then(|s| s.parse::<u64>().ok());
            let gemini = GeminiClient::new(http, &config);
            predict(football, gemini, fixture_id).await
        }
        _ => list_fixtures(football).await,
    }
}

/// Print this season's fixtures for the default league.
async fn list_fixtures(football: FootballClient) -> anyhow::Result<()> {
    let season = Utc::now().year();
    let fixtures = football.league_fixtures(DEFAULT_LEAGUE, season).await?;

    if fixtures.is_empty() {
        println!("No fixtures found for league {DEFAULT_LEAGUE}, season {season}.");
        return Ok(());
    }
    for fixture in &fixtures {
        println!("[{}] {}", fixture.fixture.id, fixture);
    }
    Ok(())
}

/// Follow the live board, reprinting it on every update.
async fn follow_live(config: &AppConfig, football: FootballClient) -> anyhow::Result<()> {
    let feed = spawn_live_feed(football, Duration::from_secs(config.live_poll_secs));
    let mut rx = feed.subscribe();

    loop {
        match rx.borrow_and_update().clone() {
            LiveBoard::Loading => {}
            LiveBoard::Unavailable(message) => {
                println!("Error fetching results: {message}");
                return Ok(());
            }
            LiveBoard::Scores(fixtures) if fixtures.is_empty() => {
                println!("No live matches currently.");
            }
            LiveBoard::Scores(fixtures) => {
                println!("--- Live matches ---");
                for m in &fixtures {
                    println!(
                        "{} {} : {} {}  ({})",
                        m.teams.home.name,
                        m.goals.home.map_or("-".into(), |g| g.to_string()),
                        m.goals.away.map_or("-".into(), |g| g.to_string()),
                        m.teams.away.name,
                        m.league.name,
                    );
                }
            }
        }
        if rx.changed().await.is_err() {
            return Ok(());
        }
    }
}

/// Run one end-to-end prediction: pick the fixture, wait for the phase
/// machine to settle, print the result, and offer it to the share sink.
async fn predict(
    football: FootballClient,
    gemini: GeminiClient,
    fixture_id: Option<u64>,
) -> anyhow::Result<()> {
    let season = Utc::now().year();
    let fixtures = football.league_fixtures(DEFAULT_LEAGUE, season).await?;

    let fixture = match fixture_id {
        Some(id) => fixtures.iter().find(|f| f.fixture.id == id).cloned(),
        None => fixtures
            .iter()
            .find(|f| f.fixture.status.short == "NS")
            .cloned(),
    };
    let Some(fixture) = fixture else {
        anyhow::bail!("no matching fixture to predict");
    };
    println!("Predicting: {fixture}");

    let predictor = MatchPredictor::new(football, gemini);
    let handle = predictor.select(fixture.clone());
    handle.await?;

    match predictor.phase() {
        PredictionPhase::Ready { result, .. } => {
            let prediction = &result.prediction;
            let (home_pct, draw_pct, away_pct) = prediction.confidence.rounded();
            println!("{}", prediction.headline(&fixture.teams));
            println!(
                "{}: {home_pct}%  Draw: {draw_pct}%  {}: {away_pct}%",
                fixture.teams.home.name, fixture.teams.away.name,
            );
            println!("\"{}\"", prediction.reasoning);

            let notice = share_prediction(&TerminalShare, &fixture, prediction);
            if let Some(message) = notice.message() {
                println!("{message}");
            }
        }
        PredictionPhase::Errored { message, .. } => println!("{message}"),
        phase => tracing::warn!(?phase, "prediction ended in a non-terminal phase"),
    }
    Ok(())
}

/// Share sink for the terminal: always available, prints the share text.
struct TerminalShare;

impl SharePlatform for TerminalShare {
    fn is_available(&self) -> bool {
        true
    }

    fn share(&self, title: &str, text: &str) -> Result<(), ShareError> {
        println!("\n--- {title} ---\n{text}");
        Ok(())
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
