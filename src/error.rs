use std::path::PathBuf;

/// All errors that can occur while fetching schedules or touching the token store.
#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read or decode the response body as JSON.
    #[error("failed to decode response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// Reading or writing the token store failed.
    #[error("token store I/O at {path}: {source}")]
    TokenStore {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No platform data directory is available for the file token store.
    #[error("no platform data directory available")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
