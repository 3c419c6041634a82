use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

use crate::apifootball::FootballClient;
use crate::gemini::GeminiClient;
use crate::models::{Fixture, PredictionResult};
use crate::services::history::matchup_form;

use super::requester::{request_match_prediction, PredictionOutcome};

/// Shown when the AI call itself failed, as opposed to the data fetches.
pub const COULD_NOT_GENERATE: &str =
    "Could not generate prediction. The AI model may be temporarily unavailable.";

// ---------------------------------------------------------------------------
// MatchPredictor — view-level coordination of history + prediction
// ---------------------------------------------------------------------------

/// Lifecycle of one fixture selection. `Ready` and `Errored` are terminal
/// for that selection; selecting another fixture starts over.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionPhase {
    Idle,
    LoadingHistory {
        fixture_id: u64,
    },
    LoadingPrediction {
        fixture_id: u64,
    },
    Ready {
        fixture_id: u64,
        result: PredictionResult,
    },
    Errored {
        fixture_id: u64,
        message: String,
    },
}

/// Sequences both history fetches and the prediction request for the
/// currently selected fixture. Every state write is guarded by a generation
/// token: work belonging to a superseded selection resolves quietly without
/// touching shared state.
#[derive(Debug, Clone)]
pub struct MatchPredictor {
    football: FootballClient,
    gemini: GeminiClient,
    state: Arc<Mutex<PredictorState>>,
}

#[derive(Debug)]
struct PredictorState {
    generation: u64,
    phase: PredictionPhase,
}

impl MatchPredictor {
    pub fn new(football: FootballClient, gemini: GeminiClient) -> Self {
        Self {
            football,
            gemini,
            state: Arc::new(Mutex::new(PredictorState {
                generation: 0,
                phase: PredictionPhase::Idle,
            })),
        }
    }

    /// Snapshot of the current phase.
    pub fn phase(&self) -> PredictionPhase {
        self.state.lock().expect("predictor lock poisoned").phase.clone()
    }

    /// Select a fixture and start the pipeline for it, superseding any
    /// in-flight selection. The returned handle is for callers that want to
    /// await completion; dropping it does not cancel the work (the
    /// generation guard already makes stale work inert).
    pub fn select(&self, fixture: Fixture) -> JoinHandle<()> {
        let generation = {
            let mut state = self.state.lock().expect("predictor lock poisoned");
            state.generation += 1;
            state.phase = PredictionPhase::LoadingHistory {
                fixture_id: fixture.fixture.id,
            };
            state.generation
        };

        let this = self.clone();
        tokio::spawn(async move { this.run(generation, fixture).await })
    }

    /// Reset to idle (the prediction view closed). Also invalidates any
    /// in-flight work for the previous selection.
    pub fn close(&self) {
        let mut state = self.state.lock().expect("predictor lock poisoned");
        state.generation += 1;
        state.phase = PredictionPhase::Idle;
    }

    async fn run(&self, generation: u64, fixture: Fixture) {
        let fixture_id = fixture.fixture.id;

        // Both histories concurrently; empty histories are success.
        let (home_history, away_history) = match matchup_form(&self.football, &fixture).await {
            Ok(histories) => histories,
            Err(e) => {
                self.apply(
                    generation,
                    PredictionPhase::Errored {
                        fixture_id,
                        message: format!("Error fetching match history: {e}"),
                    },
                );
                return;
            }
        };

        if !self.apply(
            generation,
            PredictionPhase::LoadingPrediction { fixture_id },
        ) {
            return;
        }

        let phase =
            match request_match_prediction(&self.gemini, &fixture, &home_history, &away_history)
                .await
            {
                PredictionOutcome::Ready(result) => PredictionPhase::Ready { fixture_id, result },
                PredictionOutcome::Unavailable => PredictionPhase::Errored {
                    fixture_id,
                    message: COULD_NOT_GENERATE.to_string(),
                },
            };
        self.apply(generation, phase);
    }

    /// Write `phase` only if `generation` is still the active selection.
    /// Returns false when the write was discarded as stale.
    fn apply(&self, generation: u64, phase: PredictionPhase) -> bool {
        let mut state = self.state.lock().expect("predictor lock poisoned");
        if state.generation != generation {
            tracing::debug!(
                stale_generation = generation,
                active_generation = state.generation,
                "discarding result for superseded selection"
            );
            return false;
        }
        state.phase = phase;
        true
    }
}
