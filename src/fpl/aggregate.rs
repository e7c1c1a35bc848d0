//! League data fetcher: pulls gameweek, standings and team histories from
//! the FPL API and turns them into period leaderboards.
//!
//! Fetching and assembly are split so the scoring rules can be exercised
//! without a network:
//! - `fetch_*` functions own the HTTP calls
//! - [`assemble_period_scores`] turns settled team fetches into [`FplData`]

use futures::future::join_all;
use tracing::{info, warn};

use crate::{
    cli::types::{Gameweek, LeagueId, SEASON_GAMEWEEKS},
    error::Result,
    fpl::{
        compute::{loser_of, period_score, sort_ascending_by},
        http::FplClient,
        period::{
            completed_periods, current_period, forfeit_for_period, previous_period, Period,
            PERIODS,
        },
        types::{
            EntryHistory, ForfeitRecord, ForfeitScheduleEntry, FplData, GameweekRecord,
            LeagueStandingsResponse, PeriodStatus, StandingEntry, Team,
        },
    },
};


/// Outcome of one team's history fetch
pub type TeamSettlement = (StandingEntry, Result<EntryHistory>);

/// Gameweek the FPL API flags as current (1 before the season starts).
///
/// Out-of-season values are passed through; [`current_period`] clamps them.
pub async fn fetch_current_gameweek(client: &FplClient) -> Result<Gameweek> {
    let gameweek = client.bootstrap_static().await?.current_gameweek();
    if !gameweek.is_in_season() {
        warn!(
            "gameweek {} is outside 1-{}, scoring against period {}",
            gameweek,
            SEASON_GAMEWEEKS,
            current_period(gameweek).weeks_label()
        );
    }
    Ok(gameweek)
}

/// Raw league standings with the current gameweek attached. No scoring.
pub async fn fetch_league_standings(
    client: &FplClient,
    league_id: LeagueId,
) -> Result<LeagueStandingsResponse> {
    let current_gameweek = fetch_current_gameweek(client).await?;
    let standings = client.league_standings(league_id).await?;

    Ok(LeagueStandingsResponse {
        current_gameweek,
        standings: standings.standings.results,
        league_name: standings.league.name,
    })
}

/// Full period-scores payload for `league_id`.
///
/// The gameweek and standings calls are required and abort on failure. Team
/// histories are fetched concurrently; a team whose fetch fails is logged and
/// left out of every leaderboard.
pub async fn fetch_period_scores(client: &FplClient, league_id: LeagueId) -> Result<FplData> {
    let current_gameweek = fetch_current_gameweek(client).await?;
    let standings = client.league_standings(league_id).await?;

    info!(
        "league {} ({}): {} teams, gameweek {}",
        league_id,
        standings.league.name,
        standings.standings.results.len(),
        current_gameweek
    );

    let settlements = fetch_histories(client, standings.standings.results).await;
    Ok(assemble_period_scores(
        current_gameweek,
        standings.league.name,
        settlements,
    ))
}

/// Fetch every team's history at once and wait for all of them to settle.
pub async fn fetch_histories(
    client: &FplClient,
    entries: Vec<StandingEntry>,
) -> Vec<TeamSettlement> {
    join_all(entries.into_iter().map(|entry| async move {
        let history = client.entry_history(entry.entry).await;
        (entry, history)
    }))
    .await
}

struct ScoredTeam {
    team: Team,
    history: Vec<GameweekRecord>,
}

/// Build the period-scores payload from settled history fetches.
///
/// Failed settlements are logged and dropped. Leaderboards are sorted
/// ascending so index 0 is the forfeit holder; ties keep standings order.
pub fn assemble_period_scores(
    current_gameweek: Gameweek,
    league_name: String,
    settlements: Vec<TeamSettlement>,
) -> FplData {
    let period = current_period(current_gameweek);
    let previous = previous_period(&period);

    let mut scored = Vec::with_capacity(settlements.len());
    for (entry, outcome) in settlements {
        match outcome {
            Ok(history) => {
                let mut team = Team::from(&entry);
                team.current_period_score = Some(period_score(
                    &history.current,
                    period.start,
                    period.end,
                    current_gameweek,
                ));
                team.last_period_score = previous.map(|p| {
                    period_score(&history.current, p.start, p.end, current_gameweek)
                });
                scored.push(ScoredTeam {
                    team,
                    history: history.current,
                });
            }
            Err(e) => {
                warn!(
                    "Failed to fetch history for team {} ({}): {}",
                    entry.entry, entry.entry_name, e
                );
            }
        }
    }

    let teams: Vec<Team> = scored.iter().map(|s| s.team.clone()).collect();
    let last_period_leaderboard = match previous {
        Some(_) => sort_ascending_by(teams.clone(), |t| t.last_period_score.unwrap_or(0)),
        None => Vec::new(),
    };
    let current_period_leaderboard =
        sort_ascending_by(teams, |t| t.current_period_score.unwrap_or(0));
    let last_loser = loser_of(&last_period_leaderboard);

    let forfeit_history = completed_periods(&period)
        .map(|p| ForfeitRecord {
            period: p,
            forfeit: forfeit_for_period(&p).description,
            loser: period_loser(&scored, &p, current_gameweek),
        })
        .collect();

    FplData {
        current_gameweek,
        current_period: period,
        current_forfeit: *forfeit_for_period(&period),
        current_period_leaderboard,
        last_period_leaderboard,
        last_loser,
        league_name,
        forfeit_history,
    }
}

fn period_loser(scored: &[ScoredTeam], period: &Period, current_gameweek: Gameweek) -> Option<String> {
    scored
        .iter()
        .min_by_key(|s| period_score(&s.history, period.start, period.end, current_gameweek))
        .map(|s| s.team.player_name.clone())
}

/// The season's nine forfeits with each period's status and known loser.
pub fn forfeit_schedule(data: &FplData) -> Vec<ForfeitScheduleEntry> {
    PERIODS
        .iter()
        .map(|p| {
            let status = if p.start < data.current_period.start {
                PeriodStatus::Past
            } else if p.start == data.current_period.start {
                PeriodStatus::Current
            } else {
                PeriodStatus::Future
            };
            let loser = data
                .forfeit_history
                .iter()
                .find(|r| r.period.start == p.start)
                .and_then(|r| r.loser.clone());

            ForfeitScheduleEntry {
                period: *p,
                forfeit: forfeit_for_period(p).description,
                status,
                loser,
            }
        })
        .collect()
}
