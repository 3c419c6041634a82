use serde_json::{json, Value};

use crate::gemini::GeminiClient;
use crate::models::{Fixture, PredictionResult};

use super::prompt::build_prediction_prompt;

// ---------------------------------------------------------------------------
// Prediction Requester — one structured-completion call, failures absorbed
// ---------------------------------------------------------------------------

/// Outcome of a prediction request. Deliberately a tagged result rather
/// than an `Option`: `Unavailable` always means "generation failed", never
/// "legitimately empty".
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Ready(PredictionResult),
    Unavailable,
}

/// Response schema the provider is asked to enforce server-side.
pub fn prediction_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "prediction": {
                "type": "OBJECT",
                "properties": {
                    "winner": {
                        "type": "STRING",
                        "description": "The predicted winner. Must be 'home', 'away', or 'draw'."
                    },
                    "confidence": {
                        "type": "OBJECT",
                        "properties": {
                            "home": { "type": "NUMBER", "description": "Win probability for the home team (0-100)." },
                            "draw": { "type": "NUMBER", "description": "Draw probability (0-100)." },
                            "away": { "type": "NUMBER", "description": "Win probability for the away team (0-100)." }
                        },
                        "required": ["home", "draw", "away"]
                    },
                    "reasoning": {
                        "type": "STRING",
                        "description": "A brief, one-sentence explanation for the prediction."
                    }
                },
                "required": ["winner", "confidence", "reasoning"]
            }
        },
        "required": ["prediction"]
    })
}

/// Build the prompt, call the AI provider, and parse the constrained JSON
/// reply. Every failure mode — transport, HTTP, empty completion, parse —
/// is logged here and collapsed into [`PredictionOutcome::Unavailable`];
/// nothing is raised past this boundary, so the caller's failure path stays
/// uniform.
pub async fn request_match_prediction(
    gemini: &GeminiClient,
    fixture: &Fixture,
    home_history: &[Fixture],
    away_history: &[Fixture],
) -> PredictionOutcome {
    let prompt = build_prediction_prompt(fixture, home_history, away_history);

    let text = match gemini.generate_json(&prompt, prediction_schema()).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(
                error = %e,
                fixture_id = fixture.fixture.id,
                "prediction request failed"
            );
            return PredictionOutcome::Unavailable;
        }
    };

    match serde_json::from_str::<PredictionResult>(text.trim()) {
        Ok(result) => PredictionOutcome::Ready(result),
        Err(e) => {
            tracing::error!(
                error = %e,
                fixture_id = fixture.fixture.id,
                "prediction response was not valid JSON"
            );
            PredictionOutcome::Unavailable
        }
    }
}
