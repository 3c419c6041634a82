use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::time::Duration;

use prifoot::apifootball::{FixtureCache, FootballClient};
use prifoot::config::AppConfig;
use prifoot::gemini::GeminiClient;
use prifoot::models::{Fixture, FixtureInfo, FixtureStatus, Goals, League, Score, Team, Teams};

// ---------------------------------------------------------------------------
// Stub sports-data API
// ---------------------------------------------------------------------------

/// Canned reply for one `/fixtures` query string.
#[derive(Clone)]
#[allow(dead_code)]
pub enum StubResponse {
    Fixtures(Vec<Fixture>),
    ApiError(String),
    Status(u16),
    /// Sleep before answering, to keep a request in flight while the test
    /// does something else.
    Delayed(u64, Vec<Fixture>),
}

/// In-process fixtures API. Replies are keyed by the request's raw query
/// string; every request (matched or not) bumps the hit counter.
#[derive(Clone, Default)]
pub struct FootballStub {
    hits: Arc<AtomicUsize>,
    routes: Arc<Mutex<HashMap<String, StubResponse>>>,
}

#[allow(dead_code)]
impl FootballStub {
    pub fn set(&self, query: &str, response: StubResponse) {
        self.routes
            .lock()
            .unwrap()
            .insert(query.to_string(), response);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn fixtures_handler(
    State(stub): State<FootballStub>,
    RawQuery(query): RawQuery,
) -> Response {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    let reply = {
        let routes = stub.routes.lock().unwrap();
        routes.get(query.as_deref().unwrap_or_default()).cloned()
    };

    match reply {
        Some(StubResponse::Fixtures(fixtures)) => {
            Json(json!({ "errors": [], "response": fixtures })).into_response()
        }
        Some(StubResponse::ApiError(message)) => {
            Json(json!({ "errors": { "requests": message } })).into_response()
        }
        Some(StubResponse::Status(code)) => StatusCode::from_u16(code).unwrap().into_response(),
        Some(StubResponse::Delayed(millis, fixtures)) => {
            tokio::time::sleep(Duration::from_millis(millis)).await;
            Json(json!({ "errors": [], "response": fixtures })).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[allow(dead_code)]
pub async fn spawn_football_stub() -> (String, FootballStub) {
    let stub = FootballStub::default();
    let app = Router::new()
        .route("/fixtures", get(fixtures_handler))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), stub)
}

// ---------------------------------------------------------------------------
// Stub generative-AI API
// ---------------------------------------------------------------------------

#[derive(Clone)]
#[allow(dead_code)]
pub enum GeminiReply {
    /// Completion text returned verbatim inside the first candidate.
    Completion(String),
    Status(u16),
}

#[derive(Clone)]
pub struct GeminiStub {
    hits: Arc<AtomicUsize>,
    reply: Arc<Mutex<GeminiReply>>,
}

impl Default for GeminiStub {
    fn default() -> Self {
        Self {
            hits: Arc::default(),
            reply: Arc::new(Mutex::new(GeminiReply::Status(500))),
        }
    }
}

#[allow(dead_code)]
impl GeminiStub {
    pub fn set(&self, reply: GeminiReply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn generate_handler(State(stub): State<GeminiStub>) -> Response {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    let reply = stub.reply.lock().unwrap().clone();

    match reply {
        GeminiReply::Completion(text) => Json(json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        }))
        .into_response(),
        GeminiReply::Status(code) => StatusCode::from_u16(code).unwrap().into_response(),
    }
}

#[allow(dead_code)]
pub async fn spawn_gemini_stub() -> (String, GeminiStub) {
    let stub = GeminiStub::default();
    let app = Router::new()
        .route("/models/*rest", post(generate_handler))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), stub)
}

/// A well-formed completion body matching the prediction schema.
#[allow(dead_code)]
pub fn prediction_completion(winner: &str, home: f64, draw: f64, away: f64) -> String {
    json!({
        "prediction": {
            "winner": winner,
            "confidence": { "home": home, "draw": draw, "away": away },
            "reasoning": "Recent form favors this outcome."
        }
    })
    .to_string()
}

// ---------------------------------------------------------------------------
// Client construction
// ---------------------------------------------------------------------------

#[allow(dead_code)]
pub fn test_config(football_url: &str, gemini_url: &str) -> AppConfig {
    AppConfig {
        football_base_url: football_url.to_string(),
        football_api_key: "test-key".to_string(),
        gemini_base_url: gemini_url.to_string(),
        gemini_api_key: "gemini-test-key".to_string(),
        gemini_model: "gemini-2.5-flash".to_string(),
        live_poll_secs: 30,
    }
}

#[allow(dead_code)]
pub fn football_client(base_url: &str) -> FootballClient {
    let config = test_config(base_url, "http://unused.invalid");
    FootballClient::new(reqwest::Client::new(), &config, FixtureCache::new())
}

#[allow(dead_code)]
pub fn gemini_client(base_url: &str) -> GeminiClient {
    let config = test_config("http://unused.invalid", base_url);
    GeminiClient::new(reqwest::Client::new(), &config)
}

// ---------------------------------------------------------------------------
// Fixture builders
// ---------------------------------------------------------------------------

#[allow(dead_code)]
pub fn team(id: u64, name: &str) -> Team {
    Team {
        id,
        name: name.to_string(),
        logo: None,
        winner: None,
    }
}

#[allow(dead_code)]
pub fn fixture(id: u64, date: &str, home: Team, away: Team, fulltime: (Option<u32>, Option<u32>)) -> Fixture {
    let finished = fulltime.0.is_some() && fulltime.1.is_some();
    Fixture {
        fixture: FixtureInfo {
            id,
            date: date.parse().expect("test fixture date must be RFC 3339"),
            status: FixtureStatus {
                long: if finished { "Match Finished" } else { "Not Started" }.to_string(),
                short: if finished { "FT" } else { "NS" }.to_string(),
                elapsed: None,
            },
        },
        league: League {
            id: 39,
            name: "Premier League".to_string(),
            round: "Regular Season - 10".to_string(),
            logo: None,
        },
        teams: Teams { home, away },
        goals: Goals {
            home: fulltime.0,
            away: fulltime.1,
        },
        score: Score {
            fulltime: Goals {
                home: fulltime.0,
                away: fulltime.1,
            },
        },
    }
}

/// Build a five-match history for `subject` producing exactly the given
/// outcome letters, most recent first. Sides alternate: even indices play
/// at home, odd indices away.
#[allow(dead_code)]
pub fn history_with_outcomes(subject: &Team, outcomes: &[char]) -> Vec<Fixture> {
    outcomes
        .iter()
        .enumerate()
        .map(|(i, &letter)| {
            let opponent = team(900 + i as u64, &format!("Opponent {}", i + 1));
            let at_home = i % 2 == 0;
            // Scores from the subject's perspective on the side they played.
            let (home_goals, away_goals) = match (letter, at_home) {
                ('W', true) => (2, 1),
                ('W', false) => (1, 2),
                ('L', true) => (0, 1),
                ('L', false) => (2, 0),
                _ => (1, 1),
            };
            let (home_team, away_team) = if at_home {
                (subject.clone(), opponent)
            } else {
                (opponent, subject.clone())
            };
            fixture(
                5000 + i as u64,
                &format!("2024-0{}-01T15:00:00Z", 5 - i.min(4)),
                home_team,
                away_team,
                (Some(home_goals), Some(away_goals)),
            )
        })
        .collect()
}
