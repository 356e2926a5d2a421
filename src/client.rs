use tracing::instrument;

use crate::error::Result;
use crate::model::{Game, MatchRecord};
use crate::pandascore::{self, ApiBase};
use crate::schedule::{self, Snapshot};

/// The main entry point for fetching match schedules.
///
/// `ScheduleClient` wraps a [`reqwest::Client`] and exposes per-game match
/// listings plus a whole-schedule refresh that aggregates every selected
/// game into one [`Snapshot`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> pandacal::Result<()> {
/// use pandacal::{ApiBase, Game, ScheduleClient};
///
/// let client = ScheduleClient::new(ApiBase::Direct);
/// let snapshot = client
///     .refresh(&[Game::Lol, Game::Csgo], "my-token")
///     .await?;
/// println!("Fetched {} matches", snapshot.matches.len());
/// # Ok(())
/// # }
/// ```
pub struct ScheduleClient {
    http: reqwest::Client,
    base: ApiBase,
}

impl ScheduleClient {
    /// Create a new client with default settings against the given endpoint.
    pub fn new(base: ApiBase) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, base: ApiBase) -> Self {
        Self { http: client, base }
    }

    /// Fetch one game's match listing (up to 100 entries), tagged with the
    /// game.
    #[instrument(skip(self, token))]
    pub async fn get_matches(&self, game: Game, token: &str) -> Result<Vec<MatchRecord>> {
        pandascore::matches::get_matches(&self.http, &self.base, game, token).await
    }

    /// Fetch every selected game sequentially and aggregate the results
    /// into a snapshot.
    ///
    /// Fail-fast: the first failed fetch aborts the whole refresh and
    /// discards any batches already received; no partial snapshot is ever
    /// produced.
    #[instrument(skip(self, token))]
    pub async fn refresh(&self, games: &[Game], token: &str) -> Result<Snapshot> {
        let mut batches = Vec::with_capacity(games.len());
        for &game in games {
            batches.push(self.get_matches(game, token).await?);
        }
        Ok(Snapshot::build(schedule::merge(batches)))
    }
}

impl Default for ScheduleClient {
    fn default() -> Self {
        Self::new(ApiBase::Direct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;

    #[tokio::test]
    async fn refresh_fails_fast_when_the_endpoint_is_unreachable() {
        // Port 9 (discard) refuses connections on loopback; the first
        // fetch error aborts the whole refresh.
        let client = ScheduleClient::new(ApiBase::Relay("http://127.0.0.1:9".to_string()));
        let err = client.refresh(&Game::all(), "token").await.unwrap_err();
        assert!(matches!(err, ScheduleError::Http { .. }));
    }
}
