//! Runtime configuration read from the environment.

use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::{
    BASE_URL_ENV_VAR, BIND_ADDR_ENV_VAR, MAX_RETRIES_ENV_VAR, RETRY_BACKOFF_ENV_VAR,
    TIMEOUT_ENV_VAR,
};

/// Public FPL API root.
pub const FPL_BASE_URL: &str = "https://fantasy.premierleague.com/api";

/// The FPL API rejects requests without a browser-like agent.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 250;
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Settings for talking to the FPL API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FplConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Extra attempts for required calls (bootstrap, standings).
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each further retry.
    pub retry_backoff: Duration,
}

impl Default for FplConfig {
    fn default() -> Self {
        Self {
            base_url: FPL_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_backoff: Duration::from_millis(DEFAULT_RETRY_BACKOFF_MS),
        }
    }
}

impl FplConfig {
    /// Defaults overridden by any `FPL_*` variables that are set.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = std::env::var(BASE_URL_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.base_url);

        Self {
            base_url,
            timeout: Duration::from_secs(env_or(TIMEOUT_ENV_VAR, DEFAULT_TIMEOUT_SECS)),
            max_retries: env_or(MAX_RETRIES_ENV_VAR, DEFAULT_MAX_RETRIES),
            retry_backoff: Duration::from_millis(env_or(
                RETRY_BACKOFF_ENV_VAR,
                DEFAULT_RETRY_BACKOFF_MS,
            )),
        }
    }

    /// Point the client at another API root (used by tests against a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// URL for `path` under the API root, tolerating a trailing slash on the root.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Server bind address from `FPL_BIND_ADDR`, or the default.
pub fn bind_addr_from_env() -> String {
    std::env::var(BIND_ADDR_ENV_VAR)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
}

fn env_or<T: FromStr + Copy + std::fmt::Display>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{name}={raw:?} is not valid, using {default}");
            default
        }),
        Err(_) => default,
    }
}
