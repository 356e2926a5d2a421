/// Default upstream schedule provider.
pub const UPSTREAM_BASE: &str = "https://api.pandascore.co";

/// Shared state for route handlers: one reused upstream HTTP client and
/// the upstream base URL (overridable so tests can point at a local
/// listener).
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream_base: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_upstream(UPSTREAM_BASE)
    }

    pub fn with_upstream(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            upstream_base: base.into(),
        }
    }
}
