//! Period scores command implementation

use tracing::warn;

use crate::{
    fpl::{aggregate::fetch_period_scores, sample::sample_data, types::FplData},
    LeagueId, Result,
};

use super::{
    common::{client_from_env, format_period_scores, print_json},
    resolve_league_id,
};

/// Live period scores, or the sample payload when `sample_on_error` is set
/// and the live fetch fails.
pub async fn load_period_scores(
    league_id: Option<LeagueId>,
    sample_on_error: bool,
) -> Result<FplData> {
    let live = async {
        let league_id = resolve_league_id(league_id)?;
        let client = client_from_env()?;
        fetch_period_scores(&client, league_id).await
    };

    with_sample_fallback(live.await, sample_on_error)
}

/// Swap a failed fetch for [`sample_data`] when `sample_on_error` is set.
pub fn with_sample_fallback(live: Result<FplData>, sample_on_error: bool) -> Result<FplData> {
    match live {
        Ok(data) => Ok(data),
        Err(e) if sample_on_error => {
            warn!(
                "Unable to fetch live FPL data ({}). The season may not have started yet; showing sample data.",
                e
            );
            Ok(sample_data())
        }
        Err(e) => Err(e),
    }
}

pub async fn handle_period_scores(
    league_id: Option<LeagueId>,
    as_json: bool,
    sample_on_error: bool,
) -> Result<()> {
    let data = load_period_scores(league_id, sample_on_error).await?;

    if as_json {
        print_json(&data)
    } else {
        print!("{}", format_period_scores(&data));
        Ok(())
    }
}
