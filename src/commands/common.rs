//! Text rendering shared by the `get` commands.

use crate::fpl::{
    http::FplClient,
    types::{ForfeitScheduleEntry, FplData, StandingEntry, Team},
};
use crate::{config::FplConfig, Result};

/// Client configured from the environment.
pub fn client_from_env() -> Result<FplClient> {
    FplClient::new(FplConfig::from_env())
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Ascending leaderboard as a table; the first row is marked as the forfeit.
pub fn format_leaderboard<F>(board: &[Team], score: F) -> String
where
    F: Fn(&Team) -> i32,
{
    if board.is_empty() {
        return "  (no teams)\n".to_string();
    }

    let name_width = board.iter().map(|t| t.name.len()).max().unwrap_or(4).max(4);
    let player_width = board
        .iter()
        .map(|t| t.player_name.len())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut out = format!(
        "  {:>2}  {:<pw$}  {:<nw$}  {:>6}  {:>5}\n",
        "#",
        "Player",
        "Team",
        "Period",
        "Total",
        pw = player_width,
        nw = name_width
    );
    for (i, team) in board.iter().enumerate() {
        let marker = if i == 0 { "  <- forfeit" } else { "" };
        out.push_str(&format!(
            "  {:>2}  {:<pw$}  {:<nw$}  {:>6}  {:>5}{}\n",
            i + 1,
            team.player_name,
            team.name,
            score(team),
            team.total_score,
            marker,
            pw = player_width,
            nw = name_width
        ));
    }
    out
}

/// League table rows in standings order.
pub fn format_standings(rows: &[StandingEntry]) -> String {
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}. {} ({}) - {} pts\n",
            i + 1,
            row.entry_name,
            row.player_name,
            row.total
        ));
    }
    out
}

/// Human-readable period-scores report.
pub fn format_period_scores(data: &FplData) -> String {
    let mut out = format!(
        "{} - Gameweek {} (period {}-{})\nForfeit: {}\n\nCurrent period:\n",
        data.league_name,
        data.current_gameweek,
        data.current_period.start,
        data.current_period.end,
        data.current_forfeit.description
    );
    out.push_str(&format_leaderboard(&data.current_period_leaderboard, |t| {
        t.current_period_score.unwrap_or(0)
    }));

    match &data.last_loser {
        Some(loser) => {
            out.push_str(&format!("\nLast period (loser: {}):\n", loser));
            out.push_str(&format_leaderboard(&data.last_period_leaderboard, |t| {
                t.last_period_score.unwrap_or(0)
            }));
        }
        None if data.current_period.is_first() => {
            out.push_str("\nThis is the first forfeit period. No previous results to display.\n");
        }
        None => out.push_str("\nNo previous period results.\n"),
    }
    out
}

/// The forfeit table, one line per period.
pub fn format_schedule(schedule: &[ForfeitScheduleEntry]) -> String {
    let mut out = String::new();
    for entry in schedule {
        let who = entry.loser.as_deref().unwrap_or(match entry.status {
            crate::fpl::types::PeriodStatus::Future => "TBD",
            crate::fpl::types::PeriodStatus::Current => "in progress",
            crate::fpl::types::PeriodStatus::Past => "unknown",
        });
        out.push_str(&format!(
            "  {:>5}  {:<8} {:<12} {}\n",
            entry.period.weeks_label(),
            entry.status,
            who,
            entry.forfeit
        ));
    }
    out
}
