//! Type-safe wrappers for FPL identifiers and gameweeks.

pub mod ids;
pub mod time;

pub use ids::{LeagueId, TeamId};
pub use time::{Gameweek, SEASON_GAMEWEEKS};
