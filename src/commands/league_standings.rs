//! League standings command implementation

use crate::{fpl::aggregate::fetch_league_standings, LeagueId, Result};

use super::{
    common::{client_from_env, format_standings, print_json},
    resolve_league_id,
};

pub async fn handle_league_standings(league_id: Option<LeagueId>, as_json: bool) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let client = client_from_env()?;
    let response = fetch_league_standings(&client, league_id).await?;

    if as_json {
        return print_json(&response);
    }

    println!(
        "{} - Gameweek {}",
        response.league_name, response.current_gameweek
    );
    print!("{}", format_standings(&response.standings));
    Ok(())
}
