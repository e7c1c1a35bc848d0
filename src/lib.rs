//! FPL Forfeit Tracker Library
//!
//! Tracks the rotating "forfeit" of a Fantasy Premier League mini-league: every
//! four gameweeks the team with the fewest points in that window takes the
//! forfeit. League and gameweek data are read from the public FPL API.
//!
//! ## Features
//!
//! - **Period Calculator**: Map gameweeks to the nine forfeit periods of a season
//! - **Score Aggregation**: Sum each team's points over a period window
//! - **Leaderboards**: Ascending period leaderboards (position 0 holds the forfeit)
//! - **Forfeit History**: Loser of every completed period
//! - **HTTP API**: `GET /api/fpl?action=...` for a polling front end
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_forfeit::{config::FplConfig, fpl::{aggregate::fetch_period_scores, http::FplClient}, LeagueId};
//!
//! # async fn example() -> fpl_forfeit::Result<()> {
//! let client = FplClient::new(FplConfig::from_env())?;
//! let data = fetch_period_scores(&client, LeagueId::new(123456)).await?;
//!
//! println!("{} is in line for the forfeit", data.current_period_leaderboard[0].player_name);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your league ID to avoid passing it in every command:
//! ```bash
//! export FPL_LEAGUE_ID=123456
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fpl;
pub mod logging;
pub mod server;

// Re-export commonly used types
pub use cli::types::{Gameweek, LeagueId, TeamId};
pub use error::{FplError, Result};
pub use fpl::period::{Forfeit, Period};
pub use fpl::types::{FplData, Team};

pub const LEAGUE_ID_ENV_VAR: &str = "FPL_LEAGUE_ID";
pub const BASE_URL_ENV_VAR: &str = "FPL_API_BASE_URL";
pub const TIMEOUT_ENV_VAR: &str = "FPL_HTTP_TIMEOUT_SECS";
pub const MAX_RETRIES_ENV_VAR: &str = "FPL_HTTP_MAX_RETRIES";
pub const RETRY_BACKOFF_ENV_VAR: &str = "FPL_HTTP_RETRY_BACKOFF_MS";
pub const BIND_ADDR_ENV_VAR: &str = "FPL_BIND_ADDR";
