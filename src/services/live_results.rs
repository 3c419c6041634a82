use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use crate::apifootball::FootballClient;
use crate::models::Fixture;

// ---------------------------------------------------------------------------
// Live Results Poller — rolling "all live matches" board
// ---------------------------------------------------------------------------

/// Current state of the live board. `Scores` is always sorted newest-first
/// by kickoff; the ordering is recomputed on every publish rather than
/// stored in the fixtures themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum LiveBoard {
    /// Initial fetch still in flight.
    Loading,
    /// The initial fetch failed. Only the first fetch's failure is user
    /// visible; later poll failures never reach this state.
    Unavailable(String),
    Scores(Vec<Fixture>),
}

/// Handle to a running live feed. Dropping it aborts the poll task, so the
/// repeating timer is torn down exactly once when the view goes away.
#[derive(Debug)]
pub struct LiveFeed {
    rx: watch::Receiver<LiveBoard>,
    task: JoinHandle<()>,
}

impl LiveFeed {
    /// Snapshot of the current board.
    pub fn board(&self) -> LiveBoard {
        self.rx.borrow().clone()
    }

    /// Receiver for callers that want to await updates.
    pub fn subscribe(&self) -> watch::Receiver<LiveBoard> {
        self.rx.clone()
    }
}

impl Drop for LiveFeed {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Start polling live fixtures every `interval`. Live data bypasses the
/// shared cache entirely.
pub fn spawn_live_feed(client: FootballClient, interval: Duration) -> LiveFeed {
    let (tx, rx) = watch::channel(LiveBoard::Loading);
    let task = tokio::spawn(run_live_poller(client, interval, tx));
    LiveFeed { rx, task }
}

/// The poll loop. The first fetch surfaces its failure; every later tick
/// swallows failures and leaves the last-known-good scores on the board.
/// The next tick is the only retry mechanism.
async fn run_live_poller(
    client: FootballClient,
    interval: Duration,
    tx: watch::Sender<LiveBoard>,
) {
    match client.fixtures_live().await {
        Ok(fixtures) => {
            let _ = tx.send(LiveBoard::Scores(sort_newest_first(fixtures)));
        }
        Err(e) => {
            tracing::warn!(error = %e, "initial live fetch failed");
            let _ = tx.send(LiveBoard::Unavailable(e.to_string()));
        }
    }

    loop {
        sleep(interval).await;

        match client.fixtures_live().await {
            Ok(fixtures) => {
                let _ = tx.send(LiveBoard::Scores(sort_newest_first(fixtures)));
            }
            Err(e) => {
                tracing::debug!(error = %e, "live poll failed, keeping last scores");
            }
        }
    }
}

/// Newest kickoff first.
pub fn sort_newest_first(mut fixtures: Vec<Fixture>) -> Vec<Fixture> {
    fixtures.sort_by(|a, b| b.fixture.date.cmp(&a.fixture.date));
    fixtures
}
