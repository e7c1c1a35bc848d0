//! Current gameweek command implementation

use crate::{
    fpl::{aggregate::fetch_current_gameweek, types::CurrentGameweek},
    Result,
};

use super::common::{client_from_env, print_json};

pub async fn handle_current_gameweek(as_json: bool) -> Result<()> {
    let client = client_from_env()?;
    let gameweek = fetch_current_gameweek(&client).await?;

    if as_json {
        print_json(&CurrentGameweek { gameweek })?;
    } else {
        println!("Current gameweek: {}", gameweek);
    }
    Ok(())
}
