//! HTTP API for the tracker front end.
//!
//! One endpoint, `GET /api/fpl?action=...`, with three actions:
//! `current-gameweek`, `league-standings` and `period-scores`.
//! Every request re-fetches from the FPL API; nothing is cached.

use std::{str::FromStr, sync::Arc};

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::{
    cli::types::LeagueId,
    error::{FplError, Result},
    fpl::{
        aggregate::{fetch_current_gameweek, fetch_league_standings, fetch_period_scores},
        http::FplClient,
        types::CurrentGameweek,
    },
    LEAGUE_ID_ENV_VAR,
};


/// Shared per-process state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<FplClient>,
    pub league_id: Option<LeagueId>,
}

impl AppState {
    pub fn new(client: FplClient, league_id: Option<LeagueId>) -> Self {
        Self {
            client: Arc::new(client),
            league_id,
        }
    }

    fn require_league_id(&self) -> Result<LeagueId> {
        self.league_id.ok_or_else(|| FplError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        })
    }
}

/// Operations selectable through the `action` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CurrentGameweek,
    LeagueStandings,
    PeriodScores,
}

impl FromStr for Action {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "current-gameweek" => Ok(Action::CurrentGameweek),
            "league-standings" => Ok(Action::LeagueStandings),
            "period-scores" => Ok(Action::PeriodScores),
            other => Err(FplError::InvalidAction {
                action: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FplQuery {
    pub action: Option<String>,
}

/// Maps [`FplError`] onto the JSON error responses the front end expects.
#[derive(Debug)]
pub struct ApiError(pub FplError);

impl From<FplError> for ApiError {
    fn from(err: FplError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            FplError::InvalidAction { .. } => {
                (StatusCode::BAD_REQUEST, "Invalid action".to_string())
            }
            FplError::MissingLeagueId { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "League ID not configured".to_string(),
            ),
            FplError::StandingsUnavailable { .. } => (StatusCode::BAD_GATEWAY, self.0.to_string()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch FPL data".to_string(),
            ),
        };

        if status.is_server_error() {
            error!("FPL API error: {}", self.0);
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/fpl", get(fpl_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn fpl_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<FplQuery>, QueryRejection>,
) -> std::result::Result<Response, ApiError> {
    let Query(query) = query.map_err(|rejection| FplError::InvalidAction {
        action: rejection.body_text(),
    })?;
    let action: Action = query.action.as_deref().unwrap_or_default().parse()?;

    let response = match action {
        Action::CurrentGameweek => {
            let gameweek = fetch_current_gameweek(&state.client).await?;
            Json(CurrentGameweek { gameweek }).into_response()
        }
        Action::LeagueStandings => {
            let league_id = state.require_league_id()?;
            // Only period-scores reports a standings failure explicitly.
            let standings = fetch_league_standings(&state.client, league_id)
                .await
                .map_err(|e| match e {
                    FplError::StandingsUnavailable { status } => FplError::UpstreamStatus {
                        endpoint: crate::fpl::http::standings_path(league_id),
                        status,
                    },
                    other => other,
                })?;
            Json(standings).into_response()
        }
        Action::PeriodScores => {
            let league_id = state.require_league_id()?;
            Json(fetch_period_scores(&state.client, league_id).await?).into_response()
        }
    };

    Ok(response)
}

/// Serve the API on `addr` until Ctrl-C.
pub async fn serve(addr: &str, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
