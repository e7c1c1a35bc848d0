//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use fpl_forfeit::{
    cli::{Commands, Fpl, GetCmd},
    commands::{
        current_gameweek::handle_current_gameweek, forfeits::handle_forfeits,
        league_standings::handle_league_standings, period_scores::handle_period_scores,
        serve::handle_serve,
    },
    logging::initialize_logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Fpl::parse();

    let default_level = match app.command {
        Commands::Serve { .. } => "info",
        Commands::Get { .. } => "warn",
    };
    initialize_logging(default_level);

    match app.command {
        Commands::Serve { addr, league_id } => handle_serve(addr, league_id)
            .await
            .context("server failed")?,

        Commands::Get { cmd } => match cmd {
            GetCmd::CurrentGameweek { json } => handle_current_gameweek(json)
                .await
                .context("failed to fetch current gameweek")?,

            GetCmd::LeagueStandings { league_id, json } => {
                handle_league_standings(league_id, json)
                    .await
                    .context("failed to fetch league standings")?
            }

            GetCmd::PeriodScores {
                league_id,
                json,
                sample_on_error,
            } => handle_period_scores(league_id, json, sample_on_error)
                .await
                .context("failed to fetch period scores")?,

            GetCmd::Forfeits { league_id, json } => handle_forfeits(league_id, json)
                .await
                .context("failed to fetch forfeit history")?,
        },
    }

    Ok(())
}
