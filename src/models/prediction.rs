use serde::{Deserialize, Serialize};

use super::fixture::Teams;

// ---------------------------------------------------------------------------
// PredictionResult — the typed shape the AI provider must return
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: Prediction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// One of "home", "away", or "draw" by provider contract. Treated as
    /// free text and matched loosely when deriving the headline.
    pub winner: String,
    pub confidence: Confidence,
    /// One-sentence rationale supplied by the model.
    pub reasoning: String,
}

/// Win probabilities as percentages in [0, 100]. The provider is instructed
/// that the three must sum to 100; nothing here enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl Prediction {
    /// Headline text for display, e.g. "Arsenal to Win" or "Predicted Draw".
    pub fn headline(&self, teams: &Teams) -> String {
        let winner = self.winner.to_lowercase();
        if winner.contains("home") {
            format!("{} to Win", teams.home.name)
        } else if winner.contains("away") {
            format!("{} to Win", teams.away.name)
        } else {
            "Predicted Draw".to_string()
        }
    }
}

impl Confidence {
    /// Percentages rounded to the nearest integer for presentation, in
    /// (home, draw, away) order.
    pub fn rounded(&self) -> (i64, i64, i64) {
        (
            self.home.round() as i64,
            self.draw.round() as i64,
            self.away.round() as i64,
        )
    }
}
