use futures_util::future::join;

use crate::apifootball::FootballClient;
use crate::errors::FetchError;
use crate::models::Fixture;
use crate::prediction::prompt::FORM_WINDOW;

// ---------------------------------------------------------------------------
// History Aggregator — recent form for both sides of a fixture
// ---------------------------------------------------------------------------

/// A team's last five fixtures in a season, via the cached fetch layer.
pub async fn team_form(
    client: &FootballClient,
    team: u64,
    season: i32,
) -> Result<Vec<Fixture>, FetchError> {
    client.team_recent(team, season, FORM_WINDOW as u8).await
}

/// Fetch both teams' recent form concurrently. Waits for the last of the
/// two to settle before returning; an empty history is success, not error.
/// If either side fails, the combined error names which fetch failed.
pub async fn matchup_form(
    client: &FootballClient,
    fixture: &Fixture,
) -> Result<(Vec<Fixture>, Vec<Fixture>), String> {
    let season = fixture.season();
    let (home, away) = join(
        team_form(client, fixture.teams.home.id, season),
        team_form(client, fixture.teams.away.id, season),
    )
    .await;

    match (home, away) {
        (Ok(home), Ok(away)) => Ok((home, away)),
        (Err(e), _) => Err(format!("{} history: {e}", fixture.teams.home.name)),
        (_, Err(e)) => Err(format!("{} history: {e}", fixture.teams.away.name)),
    }
}
