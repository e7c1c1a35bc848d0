//! Payload types: what the FPL API sends us and what we serve.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::cli::types::{Gameweek, TeamId};
use crate::fpl::period::{Forfeit, Period};


/// One gameweek in the `bootstrap-static` events list
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Event {
    pub id: Gameweek,
    #[serde(default)]
    pub is_current: bool,
}

/// Root of `bootstrap-static/`; only the events are read
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapStatic {
    #[serde(default)]
    pub events: Vec<Event>,
}

impl BootstrapStatic {
    /// Gameweek flagged as current, defaulting to 1 before the season starts.
    pub fn current_gameweek(&self) -> Gameweek {
        self.events
            .iter()
            .find(|e| e.is_current)
            .map(|e| e.id)
            .unwrap_or_default()
    }
}

/// League summary inside a standings response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct League {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
}

/// One row of a classic league table, as the FPL API sends it.
///
/// Fields the tracker does not use are kept in `extra` so the standings
/// endpoint can pass rows through unchanged.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandingEntry {
    pub entry: TeamId,
    pub entry_name: String,
    pub player_name: String,
    pub total: i32,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandingsPage {
    #[serde(default)]
    pub results: Vec<StandingEntry>,
}

/// Root of `leagues-classic/{id}/standings/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueStandings {
    pub league: League,
    pub standings: StandingsPage,
}

/// A team's score in one gameweek
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameweekRecord {
    pub event: u16,
    pub points: i32,
}

/// Root of `entry/{id}/history/`; `current` is this season's gameweeks
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EntryHistory {
    #[serde(default)]
    pub current: Vec<GameweekRecord>,
}

/// A league team with its period scores
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub player_name: String,
    pub total_score: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_period_score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_period_score: Option<i32>,
}

impl From<&StandingEntry> for Team {
    fn from(entry: &StandingEntry) -> Self {
        Self {
            id: entry.entry,
            name: entry.entry_name.clone(),
            player_name: entry.player_name.clone(),
            total_score: entry.total,
            current_period_score: None,
            last_period_score: None,
        }
    }
}

/// Who took the forfeit in a finished period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForfeitRecord {
    pub period: Period,
    pub forfeit: &'static str,
    pub loser: Option<String>,
}

/// Response of the `period-scores` action.
///
/// Both leaderboards are sorted ascending: index 0 is the team in line for
/// (or holding) the forfeit. In the first period `last_period_leaderboard`
/// and `forfeit_history` are empty and `last_loser` is `None`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FplData {
    pub current_gameweek: Gameweek,
    pub current_period: Period,
    pub current_forfeit: Forfeit,
    pub current_period_leaderboard: Vec<Team>,
    pub last_period_leaderboard: Vec<Team>,
    pub last_loser: Option<String>,
    pub league_name: String,
    pub forfeit_history: Vec<ForfeitRecord>,
}

/// Response of the `current-gameweek` action
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CurrentGameweek {
    pub gameweek: Gameweek,
}

/// Response of the `league-standings` action
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueStandingsResponse {
    pub current_gameweek: Gameweek,
    pub standings: Vec<StandingEntry>,
    pub league_name: String,
}

/// Where a period sits relative to the current gameweek
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodStatus {
    Past,
    Current,
    Future,
}

impl std::fmt::Display for PeriodStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PeriodStatus::Past => "past",
            PeriodStatus::Current => "current",
            PeriodStatus::Future => "future",
        };
        f.pad(s)
    }
}

/// One row of the season's forfeit table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForfeitScheduleEntry {
    pub period: Period,
    pub forfeit: &'static str,
    pub status: PeriodStatus,
    pub loser: Option<String>,
}
