use crate::common::round2;
use crate::module::{run, AccuracyHandler, DamageHandler, HandlerStack, KastHandler, KdaHandler};
use crate::record::Round;
use crate::roster::player_team;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStatistics {
    pub name: String,
    pub team: Option<String>,
    pub kills: i32,
    pub deaths: u32,
    pub assists: u32,
    pub accuracy: f64,
    pub headshot_percentage: f64,
    pub average_damage_per_round: f64,
    pub utility_damage: u32,
    pub kast: f64,
    pub rating: f64,
}

type StatsHandler = HandlerStack<
    KdaHandler,
    HandlerStack<AccuracyHandler, HandlerStack<DamageHandler, KastHandler>>,
>;

pub fn compute_statistics<R: AsRef<Round>>(name: &str, rounds: &[R]) -> PlayerStatistics {
    let (kda, (accuracy, (damage, kast))) = run::<StatsHandler, _>(name, rounds);

    let rating = rating(&RatingInput {
        rounds: rounds.len(),
        kills: kda.kills,
        deaths: kda.deaths,
        assists: kda.assists,
        kast_rounds: kast.rounds,
        average_damage_per_round: damage.average_per_round,
    });

    PlayerStatistics {
        name: name.to_string(),
        team: player_team(name, rounds).map(String::from),
        kills: kda.kills,
        deaths: kda.deaths,
        assists: kda.assists,
        accuracy: round2(accuracy.percentage),
        headshot_percentage: round2(kda.headshot_percentage),
        average_damage_per_round: round2(damage.average_per_round),
        utility_damage: damage.utility,
        kast: round2(kast.percentage),
        rating: round2(rating),
    }
}

#[derive(Debug, Clone)]
pub struct RatingInput {
    pub rounds: usize,
    pub kills: i32,
    pub deaths: u32,
    pub assists: u32,
    pub kast_rounds: u32,
    pub average_damage_per_round: f64,
}

/// Approximation of HLTV's Rating 2.0
///
/// Note that the KAST term uses the number of rounds, not the percentage.
pub fn rating(input: &RatingInput) -> f64 {
    if input.rounds == 0 {
        return 0.0;
    }
    let rounds = input.rounds as f64;
    let kpr = input.kills as f64 / rounds;
    let dpr = input.deaths as f64 / rounds;
    let apr = input.assists as f64 / rounds;
    let impact = 2.13 * kpr + 0.42 * apr - 0.41;
    0.0073 * input.kast_rounds as f64 + 0.3591 * kpr - 0.5329 * dpr
        + 0.2372 * impact
        + 0.0032 * input.average_damage_per_round
        + 0.1587
}
