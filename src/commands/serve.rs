//! Serve command implementation

use tracing::{info, warn};

use crate::{
    config::bind_addr_from_env,
    server::{serve, AppState},
    LeagueId, Result,
};

use super::{common::client_from_env, resolve_league_id};

/// Run the HTTP API until interrupted.
///
/// A missing league ID is not fatal here: `current-gameweek` still works and
/// the league actions answer "League ID not configured".
pub async fn handle_serve(addr: Option<String>, league_id: Option<LeagueId>) -> Result<()> {
    let league_id = match resolve_league_id(league_id) {
        Ok(id) => {
            info!("Tracking league {}", id);
            Some(id)
        }
        Err(e) => {
            warn!("{}", e);
            None
        }
    };

    let client = client_from_env()?;
    info!("FPL API at {}", client.config().base_url);

    let addr = addr.unwrap_or_else(bind_addr_from_env);
    serve(&addr, AppState::new(client, league_id)).await
}
