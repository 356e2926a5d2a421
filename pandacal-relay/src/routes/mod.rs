pub mod matches;

use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

/// Standard API error response body.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

/// Permissive CORS for every route; also answers `OPTIONS` preflights
/// with an empty 200.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
