//! Forfeit table command implementation

use crate::{fpl::aggregate::forfeit_schedule, LeagueId, Result};

use super::{
    common::{format_schedule, print_json},
    period_scores::load_period_scores,
};

pub async fn handle_forfeits(league_id: Option<LeagueId>, as_json: bool) -> Result<()> {
    let data = load_period_scores(league_id, false).await?;
    let schedule = forfeit_schedule(&data);

    if as_json {
        return print_json(&schedule);
    }

    println!("{} - forfeit history", data.league_name);
    print!("{}", format_schedule(&schedule));
    if let Some(team) = data.current_period_leaderboard.first() {
        println!("\n{} is currently in line for the forfeit", team.player_name);
    }
    Ok(())
}
