pub use crate::common::{is_grenade, Grenade, Side};
pub use crate::error::{Error, Result};
pub use crate::record::{
    DamageEvent, KillEvent, MatchRecord, PlayerConnection, Round, ServerVars, WeaponFireEvent,
};
pub use crate::report::{assemble, MatchInfo, Report, SortKey};
pub use crate::roster::{extract_roster, player_team};
pub use crate::rounds::{normalize, CanonicalRound, ScoreSummary, TeamScore};
pub use crate::stats::{compute_statistics, rating, PlayerStatistics, RatingInput};
use tracing::debug;

mod common;
mod error;
pub mod module;
mod record;
mod report;
mod roster;
mod rounds;
mod stats;
#[cfg(test)]
mod test_util;

/// Parse a json match record and compute the statistics for all players
pub fn parse(json: &str, sort: Option<SortKey>) -> Result<Report> {
    let record: MatchRecord = serde_json::from_str(json)?;
    analyze(&record, sort)
}

pub fn analyze(record: &MatchRecord, sort: Option<SortKey>) -> Result<Report> {
    record.validate()?;

    let max_rounds = record.server_vars.max_rounds;
    let (rounds, score) = normalize(&record.game_rounds, max_rounds)?;
    let roster = extract_roster(&record.player_connections, &record.game_rounds);
    debug!(
        match_id = record.match_id.as_str(),
        players = roster.len(),
        rounds = rounds.len(),
        "computing player statistics"
    );

    let info = MatchInfo {
        match_id: &record.match_id,
        map_name: &record.map_name,
        max_rounds,
    };
    Ok(assemble(info, score, &roster, &rounds, sort))
}
