pub(crate) mod matches;

use serde::de::DeserializeOwned;

use crate::error::{Result, ScheduleError};

/// One page of upstream results. The listing endpoint is not paginated
/// beyond this; date windowing happens downstream of the fetch.
pub(crate) const PER_PAGE: u32 = 100;

pub(crate) const UPSTREAM_BASE: &str = "https://api.pandascore.co";

/// Where match requests are sent: straight at the upstream provider, or at
/// a deployed relay that forwards to it.
#[derive(Debug, Clone)]
pub enum ApiBase {
    /// `https://api.pandascore.co/<game>/matches?per_page=100&token=..`
    Direct,
    /// `<base>/api/matches?game=<game>&token=..`
    Relay(String),
}

impl Default for ApiBase {
    fn default() -> Self {
        ApiBase::Direct
    }
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<T> {
    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|source| ScheduleError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScheduleError::UnexpectedStatus {
            url: url.to_string(),
            status,
        });
    }

    response
        .json()
        .await
        .map_err(|source| ScheduleError::ResponseBody {
            url: url.to_string(),
            source,
        })
}
