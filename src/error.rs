//! Error types for the FPL forfeit tracker

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("FPL API returned {status} for {endpoint}")]
    UpstreamStatus { endpoint: String, status: u16 },

    #[error("Failed to fetch league standings: {status}")]
    StandingsUnavailable { status: u16 },

    #[error("Invalid action: {action}")]
    InvalidAction { action: String },
}

impl FplError {
    /// Whether a failed upstream call is worth another attempt.
    ///
    /// Network failures, timeouts, 429 and 5xx are transient; every other
    /// error is returned to the caller straight away.
    pub fn is_retryable(&self) -> bool {
        match self {
            FplError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            FplError::UpstreamStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
