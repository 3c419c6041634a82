use std::fmt;

use crate::models::{Fixture, Team};

/// How many recent matches feed a prediction.
pub const FORM_WINDOW: usize = 5;

// ---------------------------------------------------------------------------
// FormOutcome — W/D/L classification of one historical match
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Win,
    Draw,
    Loss,
}

impl fmt::Display for FormOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormOutcome::Win => f.write_str("W"),
            FormOutcome::Draw => f.write_str("D"),
            FormOutcome::Loss => f.write_str("L"),
        }
    }
}

/// Classify a finished match from `team`'s point of view using the
/// full-time score. Returns `None` when either score is missing; null
/// scores are never compared numerically.
pub fn classify_outcome(team: &Team, fixture: &Fixture) -> Option<FormOutcome> {
    let home_score = fixture.score.fulltime.home?;
    let away_score = fixture.score.fulltime.away?;
    let played_home = fixture.teams.home.id == team.id;

    if home_score == away_score {
        Some(FormOutcome::Draw)
    } else if (played_home && home_score > away_score)
        || (!played_home && away_score > home_score)
    {
        Some(FormOutcome::Win)
    } else {
        Some(FormOutcome::Loss)
    }
}

// ---------------------------------------------------------------------------
// Prompt building — pure, deterministic text assembly
// ---------------------------------------------------------------------------

/// Render a team's recent form as a text block for the prompt, one line per
/// match in the order given (most recent first), at most [`FORM_WINDOW`]
/// lines. Matches with a missing full-time score render as incomplete-data
/// lines. An empty history is valid input and yields a sentinel sentence.
pub fn format_team_history(team: &Team, history: &[Fixture]) -> String {
    if history.is_empty() {
        return format!("{} has no recent match data available.", team.name);
    }

    let lines: Vec<String> = history
        .iter()
        .take(FORM_WINDOW)
        .map(|m| {
            let opponent = if m.teams.home.id == team.id {
                &m.teams.away.name
            } else {
                &m.teams.home.name
            };
            match classify_outcome(team, m) {
                Some(outcome) => {
                    // Both scores are present when classification succeeds.
                    let home = m.score.fulltime.home.unwrap_or_default();
                    let away = m.score.fulltime.away.unwrap_or_default();
                    format!("  - {outcome} vs {opponent} ({home} - {away})")
                }
                None => format!("  - Incomplete data vs {opponent}"),
            }
        })
        .collect();

    format!(
        "{}'s Last {} Matches:\n{}",
        team.name,
        lines.len(),
        lines.join("\n")
    )
}

/// Assemble the full analysis prompt for one fixture. Deterministic given
/// identical inputs: no clock reads, no randomness.
pub fn build_prediction_prompt(
    fixture: &Fixture,
    home_history: &[Fixture],
    away_history: &[Fixture],
) -> String {
    let home = &fixture.teams.home;
    let away = &fixture.teams.away;
    let home_form = format_team_history(home, home_history);
    let away_form = format_team_history(away, away_history);

    format!(
        "You are PriFoot, a sophisticated football match prediction expert. \
Analyze the provided data to predict the outcome of the upcoming match.\n\
\n\
Match Details:\n\
- Home Team: {home_name}\n\
- Away Team: {away_name}\n\
- Competition: {competition}\n\
\n\
Recent Form:\n\
{home_form}\n\
\n\
{away_form}\n\
\n\
Based on this recent form, team names, and the home advantage for {home_name}, \
predict the outcome. The sum of probabilities for home, draw, and away must be 100.\n\
Return your prediction in the specified JSON format.",
        home_name = home.name,
        away_name = away.name,
        competition = fixture.league.name,
    )
}
