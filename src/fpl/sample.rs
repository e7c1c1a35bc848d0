//! Static demo payload for when live data is unavailable (e.g. before the
//! season starts). Callers decide whether to show it; the fetcher never does.

use crate::{
    cli::types::{Gameweek, TeamId},
    fpl::{
        compute::{loser_of, sort_ascending_by},
        period::{forfeit_for_period, Period, FORFEITS},
        types::{ForfeitRecord, FplData, Team},
    },
};

fn team(id: u64, name: &str, player: &str, total: i32, current: i32, last: i32) -> Team {
    Team {
        id: TeamId::new(id),
        name: name.to_string(),
        player_name: player.to_string(),
        total_score: total,
        current_period_score: Some(current),
        last_period_score: Some(last),
    }
}

/// Gameweek 7 of a four-team league; Paul lost gameweeks 1-4.
pub fn sample_data() -> FplData {
    let teams = vec![
        team(1, "Paul's XI", "Paul", 850, 120, 100),
        team(2, "Ro's Squad", "Ro", 820, 140, 150),
        team(3, "John FC", "John", 900, 180, 130),
        team(4, "Mike United", "Mike", 880, 165, 125),
    ];
    let current_period = Period::new(5, 8);

    let last_period_leaderboard =
        sort_ascending_by(teams.clone(), |t| t.last_period_score.unwrap_or(0));
    let last_loser = loser_of(&last_period_leaderboard);

    FplData {
        current_gameweek: Gameweek::new(7),
        current_period,
        current_forfeit: *forfeit_for_period(&current_period),
        current_period_leaderboard: sort_ascending_by(teams, |t| {
            t.current_period_score.unwrap_or(0)
        }),
        last_period_leaderboard,
        last_loser: last_loser.clone(),
        league_name: "Sample League".to_string(),
        forfeit_history: vec![ForfeitRecord {
            period: Period::new(1, 4),
            forfeit: FORFEITS[0].description,
            loser: last_loser,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_consistent() {
        let data = sample_data();

        assert_eq!(data.current_gameweek, Gameweek::new(7));
        assert_eq!(
            crate::fpl::period::current_period(data.current_gameweek),
            data.current_period
        );
        assert_eq!(data.last_loser.as_deref(), Some("Paul"));
        assert_eq!(data.current_period_leaderboard[0].player_name, "Paul");
        assert_eq!(data.current_period_leaderboard.len(), 4);
        assert_eq!(data.forfeit_history.len(), 1);
    }

    #[test]
    fn test_sample_leaderboards_ascending() {
        let data = sample_data();
        let current: Vec<i32> = data
            .current_period_leaderboard
            .iter()
            .filter_map(|t| t.current_period_score)
            .collect();
        assert_eq!(current, vec![120, 140, 165, 180]);

        let last: Vec<i32> = data
            .last_period_leaderboard
            .iter()
            .filter_map(|t| t.last_period_score)
            .collect();
        assert_eq!(last, vec![100, 125, 130, 150]);
    }
}
