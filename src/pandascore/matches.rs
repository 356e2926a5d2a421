use itertools::Itertools;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::{ApiMatch, Game, MatchRecord};
use crate::pandascore::{self, ApiBase, PER_PAGE, UPSTREAM_BASE};

/// Fetch one game's match listing and tag every record with the game.
#[instrument(skip(client, token))]
pub(crate) async fn get_matches(
    client: &reqwest::Client,
    base: &ApiBase,
    game: Game,
    token: &str,
) -> Result<Vec<MatchRecord>> {
    let per_page = PER_PAGE.to_string();
    let slug = game.to_string();

    let records: Vec<ApiMatch> = match base {
        ApiBase::Direct => {
            let url = format!("{UPSTREAM_BASE}/{slug}/matches");
            pandascore::get_json(client, &url, &[("per_page", per_page.as_str()), ("token", token)])
                .await?
        }
        ApiBase::Relay(relay) => {
            let url = format!("{}/api/matches", relay.trim_end_matches('/'));
            pandascore::get_json(client, &url, &[("game", slug.as_str()), ("token", token)]).await?
        }
    };

    let records = records
        .into_iter()
        .map(|api| MatchRecord::from_api(game, api))
        .collect_vec();
    debug!(count = records.len(), %game, "fetched match listing");
    Ok(records)
}
