use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Fixture — one match record as delivered by the sports-data provider
// ---------------------------------------------------------------------------

/// A scheduled, in-play, or completed match. Immutable once received; the
/// core never mutates a fixture, it only re-fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub fixture: FixtureInfo,
    pub league: League,
    pub teams: Teams,
    pub goals: Goals,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureInfo {
    pub id: u64,
    pub date: DateTime<Utc>,
    pub status: FixtureStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureStatus {
    pub long: String,
    pub short: String,
    pub elapsed: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: u32,
    pub name: String,
    pub round: String,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teams {
    pub home: Team,
    pub away: Team,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub winner: Option<bool>,
}

/// Nullable home/away goal counts. Used both for the running score and for
/// the full-time score; `None` means the figure does not exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub fulltime: Goals,
}

impl Fixture {
    /// Season year the fixture belongs to, derived from the kickoff date.
    pub fn season(&self) -> i32 {
        self.fixture.date.year()
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {} ({}, {})",
            self.teams.home.name,
            self.teams.away.name,
            self.league.name,
            self.fixture.date.format("%Y-%m-%d %H:%M"),
        )
    }
}
