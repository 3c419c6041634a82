use thiserror::Error;

use crate::models::{Fixture, Prediction};

// ---------------------------------------------------------------------------
// SharePlatform — optional platform capability behind a trait
// ---------------------------------------------------------------------------

/// A platform share facility (native share sheet, clipboard, terminal).
/// Presence is feature-detected before use.
pub trait SharePlatform {
    fn is_available(&self) -> bool;

    fn share(&self, title: &str, text: &str) -> Result<(), ShareError>;
}

#[derive(Debug, Error)]
pub enum ShareError {
    /// The user dismissed the share sheet. Not a failure.
    #[error("share cancelled")]
    Cancelled,

    #[error("share failed: {0}")]
    Failed(String),
}

/// What the UI should show after a share attempt. `Dismissed` means the
/// user backed out and nothing should be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareNotice {
    Shared,
    Dismissed,
    Unsupported,
    Failed(String),
}

impl ShareNotice {
    /// User-visible notice text, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ShareNotice::Shared | ShareNotice::Dismissed => None,
            ShareNotice::Unsupported => Some("Sharing is not supported on this platform."),
            ShareNotice::Failed(msg) => Some(msg),
        }
    }
}

/// Share a prediction through `platform`. A missing capability produces a
/// visible notice instead of failing silently; a user cancellation produces
/// none.
pub fn share_prediction(
    platform: &dyn SharePlatform,
    fixture: &Fixture,
    prediction: &Prediction,
) -> ShareNotice {
    if !platform.is_available() {
        return ShareNotice::Unsupported;
    }

    let text = share_text(fixture, prediction);
    match platform.share("PriFoot AI Prediction", &text) {
        Ok(()) => ShareNotice::Shared,
        Err(ShareError::Cancelled) => ShareNotice::Dismissed,
        Err(ShareError::Failed(e)) => {
            tracing::error!(error = %e, "error sharing prediction");
            ShareNotice::Failed("An error occurred while sharing.".to_string())
        }
    }
}

/// The shareable text block: headline, rounded confidences, reasoning.
pub fn share_text(fixture: &Fixture, prediction: &Prediction) -> String {
    let teams = &fixture.teams;
    let (home_pct, draw_pct, away_pct) = prediction.confidence.rounded();
    format!(
        "🔮 PriFoot AI Prediction: {home} vs {away}\n\n\
🏆 Predicted Outcome: {headline}\n\n\
Confidence:\n\
- {home}: {home_pct}%\n\
- Draw: {draw_pct}%\n\
- {away}: {away_pct}%\n\n\
\"{reasoning}\"\n\n\
#PriFoot #AIPredictions #Football",
        home = teams.home.name,
        away = teams.away.name,
        headline = prediction.headline(teams),
        reasoning = prediction.reasoning,
    )
}
