use crate::record::Round;
use crate::rounds::ScoreSummary;
use crate::stats::{compute_statistics, PlayerStatistics};
use crate::Error;
use enum_iterator::Sequence;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Column to order the players by, highest first
#[derive(Copy, Clone, Eq, PartialEq, Debug, Sequence)]
pub enum SortKey {
    Player,
    Team,
    Kills,
    Deaths,
    Assists,
    Accuracy,
    Headshots,
    AverageDamage,
    UtilityDamage,
    Kast,
    Rating,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Player => "Player",
            SortKey::Team => "Team",
            SortKey::Kills => "K",
            SortKey::Deaths => "D",
            SortKey::Assists => "A",
            SortKey::Accuracy => "ACC",
            SortKey::Headshots => "HS",
            SortKey::AverageDamage => "ADR",
            SortKey::UtilityDamage => "UD",
            SortKey::Kast => "KAST",
            SortKey::Rating => "RAT",
        }
    }

    pub fn compare(self, a: &PlayerStatistics, b: &PlayerStatistics) -> Ordering {
        match self {
            SortKey::Player => a.name.cmp(&b.name),
            SortKey::Team => a.team.cmp(&b.team),
            SortKey::Kills => a.kills.cmp(&b.kills),
            SortKey::Deaths => a.deaths.cmp(&b.deaths),
            SortKey::Assists => a.assists.cmp(&b.assists),
            SortKey::Accuracy => a.accuracy.total_cmp(&b.accuracy),
            SortKey::Headshots => a.headshot_percentage.total_cmp(&b.headshot_percentage),
            SortKey::AverageDamage => a
                .average_damage_per_round
                .total_cmp(&b.average_damage_per_round),
            SortKey::UtilityDamage => a.utility_damage.cmp(&b.utility_damage),
            SortKey::Kast => a.kast.total_cmp(&b.kast),
            SortKey::Rating => a.rating.total_cmp(&b.rating),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum_iterator::all::<SortKey>()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::UnknownSortKey(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub match_id: String,
    pub map_name: String,
    pub max_rounds: u32,
    pub score: ScoreSummary,
    pub players: Vec<PlayerStatistics>,
}

/// Match level information carried into the report
#[derive(Debug, Clone, Copy)]
pub struct MatchInfo<'a> {
    pub match_id: &'a str,
    pub map_name: &'a str,
    pub max_rounds: u32,
}

pub fn assemble<R: AsRef<Round>>(
    info: MatchInfo,
    score: ScoreSummary,
    roster: &[String],
    rounds: &[R],
    sort: Option<SortKey>,
) -> Report {
    let mut players: Vec<_> = roster
        .iter()
        .map(|name| compute_statistics(name, rounds))
        .collect();

    if let Some(key) = sort {
        // stable ascending sort then reverse, equal players end up in reverse roster order
        players.sort_by(|a, b| key.compare(a, b));
        players.reverse();
    }

    Report {
        match_id: info.match_id.to_string(),
        map_name: info.map_name.to_string(),
        max_rounds: info.max_rounds,
        score,
        players,
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let a = &self.score.team_a;
        let b = &self.score.team_b;
        writeln!(f, "Match: {}    Map: {}", self.match_id, self.map_name)?;
        writeln!(f, "{:<13}{:>12} : {}", "Teams:", a.name, b.name)?;
        writeln!(f, "{:<13}{:>12} : {}", "First half:", a.first_half, b.first_half)?;
        writeln!(f, "{:<13}{:>12} : {}", "Second half:", a.second_half, b.second_half)?;
        writeln!(f, "{:<13}{:>12} : {}", "Final score:", a.total, b.total)?;
        writeln!(f, "{}", "-".repeat(91))?;
        writeln!(
            f,
            "{:>12}  {:>10}  {:>3}  {:>3}  {:>3}  {:>7}  {:>7}  {:>7}  {:>5}  {:>7}  {:>7}",
            "Player", "Team", "K", "D", "A", "ACC%", "HS%", "ADR", "UD", "KAST%", "Rat2.0"
        )?;
        writeln!(f, "{}", "-".repeat(91))?;
        for player in &self.players {
            writeln!(
                f,
                "{:>12}  {:>10}  {:>3}  {:>3}  {:>3}  {:>7.2}  {:>7.2}  {:>7.2}  {:>5}  {:>7.2}  {:>7.2}",
                player.name,
                player.team.as_deref().unwrap_or_default(),
                player.kills,
                player.deaths,
                player.assists,
                player.accuracy,
                player.headshot_percentage,
                player.average_damage_per_round,
                player.utility_damage,
                player.kast,
                player.rating,
            )?;
        }
        Ok(())
    }
}
