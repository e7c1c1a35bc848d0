//! Command implementations for the FPL forfeit tracker CLI

pub mod common;
pub mod current_gameweek;
pub mod forfeits;
pub mod league_standings;
pub mod period_scores;
pub mod serve;

use crate::{error::FplError, LeagueId, Result, LEAGUE_ID_ENV_VAR};

/// League ID from the command line, else from `FPL_LEAGUE_ID`.
///
/// A missing, unparsable or zero ID is reported as [`FplError::MissingLeagueId`].
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    league_id
        .or_else(|| {
            std::env::var(LEAGUE_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<LeagueId>().ok())
        })
        .filter(|id| id.as_u32() != 0)
        .ok_or_else(|| FplError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        })
}
