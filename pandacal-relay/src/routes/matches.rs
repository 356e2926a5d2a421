//! The match-listing pass-through endpoint.
//!
//! Forwards `GET /api/matches?game=..&token=..` to the upstream provider
//! and returns its body verbatim. Upstream HTTP failures keep their status
//! code; network-level failures surface as a 500. The permissive CORS
//! layer answers `OPTIONS` preflights with an empty 200.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::routes::ErrorResponse;
use crate::state::AppState;

const PER_PAGE: &str = "100";

pub fn router() -> Router<AppState> {
    Router::new().route("/api/matches", get(matches))
}

#[derive(Deserialize)]
struct MatchesQuery {
    game: Option<String>,
    token: Option<String>,
}

/// GET /api/matches?game=..&token=.. - Forward one match-listing request upstream
async fn matches(State(state): State<AppState>, Query(query): Query<MatchesQuery>) -> Response {
    let (Some(game), Some(token)) = (query.game, query.token) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing parameters",
            }),
        )
            .into_response();
    };

    let url = format!(
        "{}/{game}/matches",
        state.upstream_base.trim_end_matches('/')
    );
    let response = state
        .http
        .get(&url)
        .query(&[("per_page", PER_PAGE), ("token", token.as_str())])
        .send()
        .await;

    let response = match response {
        Ok(response) => response,
        Err(e) => {
            warn!(game, error = %e, "upstream request failed to send");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch data",
                }),
            )
                .into_response();
        }
    };

    let status = response.status();
    if !status.is_success() {
        warn!(game, %status, "upstream returned an error status");
        let status =
            StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (
            status,
            Json(ErrorResponse {
                error: "API request failed",
            }),
        )
            .into_response();
    }

    match response.text().await {
        Ok(body) => {
            debug!(game, bytes = body.len(), "forwarded upstream response");
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Err(e) => {
            warn!(game, error = %e, "failed to read upstream body");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch data",
                }),
            )
                .into_response()
        }
    }
}
