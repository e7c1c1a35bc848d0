//! HTTP client for the public FPL API

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    cli::types::{LeagueId, TeamId},
    config::{FplConfig, BROWSER_USER_AGENT},
    error::{FplError, Result},
    fpl::types::{BootstrapStatic, EntryHistory, LeagueStandings},
};


pub const BOOTSTRAP_PATH: &str = "bootstrap-static/";

pub fn standings_path(league_id: LeagueId) -> String {
    format!("leagues-classic/{}/standings/", league_id)
}

pub fn history_path(team_id: TeamId) -> String {
    format!("entry/{}/history/", team_id)
}

/// Headers sent with every FPL request.
pub fn get_common_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Read-only client for the three FPL endpoints the tracker needs.
///
/// Cheap to share: `reqwest::Client` pools connections internally.
#[derive(Debug, Clone)]
pub struct FplClient {
    client: Client,
    config: FplConfig,
}

impl FplClient {
    pub fn new(config: FplConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .default_headers(get_common_headers())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FplConfig {
        &self.config
    }

    /// `bootstrap-static/`, retried on transient failures.
    pub async fn bootstrap_static(&self) -> Result<BootstrapStatic> {
        self.get_json_with_retry(BOOTSTRAP_PATH).await
    }

    /// Classic league standings, retried on transient failures.
    ///
    /// A non-success status that survives the retries becomes
    /// [`FplError::StandingsUnavailable`].
    pub async fn league_standings(&self, league_id: LeagueId) -> Result<LeagueStandings> {
        self.get_json_with_retry(&standings_path(league_id))
            .await
            .map_err(|e| match e {
                FplError::UpstreamStatus { status, .. } => FplError::StandingsUnavailable { status },
                other => other,
            })
    }

    /// One team's gameweek history. Single attempt: callers drop the team on failure.
    pub async fn entry_history(&self, team_id: TeamId) -> Result<EntryHistory> {
        self.get_json(&history_path(team_id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.endpoint(path);
        debug!("GET {}", url);

        let res = self.client.get(&url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(FplError::UpstreamStatus {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(res.json::<T>().await?)
    }

    async fn get_json_with_retry<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let mut delay = self.config.retry_backoff;
        let mut attempt = 0;

        loop {
            match self.get_json(path).await {
                Ok(v) => return Ok(v),
                Err(e) if attempt < self.config.max_retries && e.is_retryable() => {
                    attempt += 1;
                    warn!(
                        "{} failed ({}), retry {}/{} in {:?}",
                        path, e, attempt, self.config.max_retries, delay
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
