//! Integration tests for the period calculator, scoring and payload assembly

use fpl_forfeit::{
    fpl::{
        aggregate::{assemble_period_scores, forfeit_schedule},
        compute::period_score,
        period::{current_period, forfeit_for_period, FORFEITS, PERIODS},
        types::{EntryHistory, GameweekRecord, PeriodStatus, StandingEntry},
    },
    FplError, Gameweek, Period, TeamId,
};
use serde_json::json;

fn standing(id: u64, player: &str, total: i32) -> StandingEntry {
    serde_json::from_value(json!({
        "entry": id,
        "entry_name": format!("{player}'s team"),
        "player_name": player,
        "total": total
    }))
    .unwrap()
}

fn history(points: &[(u16, i32)]) -> EntryHistory {
    EntryHistory {
        current: points
            .iter()
            .map(|&(event, points)| GameweekRecord { event, points })
            .collect(),
    }
}

#[test]
fn test_current_period_examples() {
    assert_eq!(current_period(Gameweek::new(1)), Period::new(1, 4));
    assert_eq!(current_period(Gameweek::new(8)), Period::new(5, 8));
    assert_eq!(current_period(Gameweek::new(38)), Period::new(33, 38));
}

#[test]
fn test_every_period_has_its_own_forfeit() {
    let descriptions: Vec<&str> = PERIODS
        .iter()
        .map(|p| forfeit_for_period(p).description)
        .collect();
    let expected: Vec<&str> = FORFEITS.iter().map(|f| f.description).collect();
    assert_eq!(descriptions, expected);
}

#[test]
fn test_period_score_examples() {
    let two_weeks = vec![
        GameweekRecord { event: 5, points: 60 },
        GameweekRecord { event: 6, points: 70 },
    ];
    assert_eq!(period_score(&two_weeks, 5, 8, Gameweek::new(6)), 130);
    assert_eq!(period_score(&two_weeks[..1], 5, 8, Gameweek::new(7)), 60);
}

#[test]
fn test_end_to_end_two_teams() {
    let settlements = vec![
        (standing(1, "Paul", 850), Ok(history(&[(5, 40), (6, 30), (7, 50)]))),
        (standing(2, "Ro", 820), Ok(history(&[(5, 60), (6, 40), (7, 40)]))),
    ];

    let data = assemble_period_scores(Gameweek::new(7), "Test League".to_string(), settlements);

    let board: Vec<(TeamId, Option<i32>)> = data
        .current_period_leaderboard
        .iter()
        .map(|t| (t.id, t.current_period_score))
        .collect();
    assert_eq!(
        board,
        vec![(TeamId::new(1), Some(120)), (TeamId::new(2), Some(140))]
    );
    assert_eq!(data.current_period_leaderboard[0].total_score, 850);
}

#[test]
fn test_partial_failure_keeps_other_teams() {
    let settlements = vec![
        (standing(1, "Paul", 0), Ok(history(&[(1, 50)]))),
        (standing(2, "Ro", 0), Ok(history(&[(1, 40)]))),
        (
            standing(3, "John", 0),
            Err(FplError::UpstreamStatus {
                endpoint: "entry/3/history/".to_string(),
                status: 404,
            }),
        ),
        (standing(4, "Mike", 0), Ok(history(&[(1, 70)]))),
    ];

    let data = assemble_period_scores(Gameweek::new(2), "L".to_string(), settlements);
    assert_eq!(data.current_period_leaderboard.len(), 3);
    assert_eq!(data.current_period_leaderboard[0].player_name, "Ro");
}

#[test]
fn test_schedule_for_late_season() {
    let settlements = vec![(standing(1, "Paul", 0), Ok(history(&[(33, 60)])))];
    let data = assemble_period_scores(Gameweek::new(35), "L".to_string(), settlements);

    let schedule = forfeit_schedule(&data);
    assert_eq!(schedule.iter().filter(|e| e.status == PeriodStatus::Past).count(), 8);
    assert_eq!(schedule[8].status, PeriodStatus::Current);
    assert_eq!(data.forfeit_history.len(), 8);
    assert_eq!(data.last_period_leaderboard[0].last_period_score, Some(0));
}
