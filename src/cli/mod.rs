//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::LeagueId;

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Print the gameweek the FPL API flags as current
    CurrentGameweek {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Print the league table with the current gameweek (no period scoring)
    LeagueStandings {
        /// League ID (or set `FPL_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Print current and previous period leaderboards, lowest score first.
    ///
    /// Fetches every team's gameweek history; teams whose history cannot be
    /// fetched are left out.
    PeriodScores {
        /// League ID (or set `FPL_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Print the built-in sample data if the live fetch fails.
        #[clap(long)]
        sample_on_error: bool,
    },

    /// Print the season's forfeit table with the loser of each finished period
    Forfeits {
        /// League ID (or set `FPL_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "fpl-forfeit", about = "FPL mini-league forfeit tracker")]
pub struct Fpl {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve `GET /api/fpl?action=...` for the tracker front end
    Serve {
        /// Address to bind (or set `FPL_BIND_ADDR`, default 127.0.0.1:3000).
        #[clap(long)]
        addr: Option<String>,

        /// League ID (or set `FPL_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,
    },

    /// Get data from the FPL API
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_period_scores() {
        let app = Fpl::try_parse_from([
            "fpl-forfeit",
            "get",
            "period-scores",
            "-l",
            "123",
            "--json",
            "--sample-on-error",
        ])
        .unwrap();

        match app.command {
            Commands::Get {
                cmd:
                    GetCmd::PeriodScores {
                        league_id,
                        json,
                        sample_on_error,
                    },
            } => {
                assert_eq!(league_id, Some(LeagueId::new(123)));
                assert!(json);
                assert!(sample_on_error);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_serve() {
        let app = Fpl::try_parse_from(["fpl-forfeit", "serve", "--addr", "0.0.0.0:8080"]).unwrap();
        match app.command {
            Commands::Serve { addr, league_id } => {
                assert_eq!(addr.as_deref(), Some("0.0.0.0:8080"));
                assert!(league_id.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_league_id() {
        let result = Fpl::try_parse_from(["fpl-forfeit", "get", "forfeits", "-l", "abc"]);
        assert!(result.is_err());
    }
}
