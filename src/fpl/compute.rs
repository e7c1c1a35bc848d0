use crate::cli::types::Gameweek;
use crate::fpl::types::{GameweekRecord, Team};


/// Sum of `points` for every gameweek in `start..=min(end, current_gameweek)`.
///
/// Gameweeks missing from `history` count as zero. Each gameweek must appear
/// at most once; the FPL API guarantees that per team.
pub fn period_score(
    history: &[GameweekRecord],
    start: u16,
    end: u16,
    current_gameweek: Gameweek,
) -> i32 {
    let last = end.min(current_gameweek.as_u16());
    history
        .iter()
        .filter(|r| start <= r.event && r.event <= last)
        .map(|r| r.points)
        .sum()
}

/// Sort `teams` ascending by `score`, lowest first.
///
/// The sort is stable, so tied teams keep their standings order.
pub fn sort_ascending_by<F>(mut teams: Vec<Team>, score: F) -> Vec<Team>
where
    F: Fn(&Team) -> i32,
{
    teams.sort_by_key(|t| score(t));
    teams
}

/// Player at the bottom of an ascending leaderboard.
pub fn loser_of(leaderboard: &[Team]) -> Option<String> {
    leaderboard.first().map(|t| t.player_name.clone())
}
