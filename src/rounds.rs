use crate::common::Side;
use crate::record::Round;
use crate::{Error, Result};
use serde::Serialize;
use std::ops::Deref;
use tracing::{debug, warn};

/// A played round of the actual game, numbered from the last score reset
#[derive(Debug, Clone, Copy)]
pub struct CanonicalRound<'a> {
    pub number: i32,
    round: &'a Round,
}

impl<'a> CanonicalRound<'a> {
    pub fn round(&self) -> &'a Round {
        self.round
    }
}

impl Deref for CanonicalRound<'_> {
    type Target = Round;

    fn deref(&self) -> &Self::Target {
        self.round
    }
}

impl AsRef<Round> for CanonicalRound<'_> {
    fn as_ref(&self) -> &Round {
        self.round
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct TeamScore {
    pub name: String,
    pub total: u32,
    pub first_half: u32,
    pub second_half: u32,
}

/// Round wins are counted for team A while it plays CT in the first half
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub team_a: TeamScore,
    pub team_b: TeamScore,
}

pub fn normalize(rounds: &[Round], max_rounds: u32) -> Result<(Vec<CanonicalRound>, ScoreSummary)> {
    let rounds = canonical_rounds(rounds)?;
    let score = score_summary(&rounds, max_rounds)?;
    Ok((rounds, score))
}

/// Index of the last round that starts at 0:0
fn game_start_index(rounds: &[Round]) -> Option<usize> {
    rounds.iter().rposition(Round::is_reset)
}

pub fn canonical_rounds(rounds: &[Round]) -> Result<Vec<CanonicalRound>> {
    let start = game_start_index(rounds).ok_or(Error::NoGameStart)?;
    let offset = rounds[start].round_num - 1;
    if start > 0 {
        debug!(skipped = start, "discarding rounds before the last score reset");
    }

    let canonical: Vec<_> = rounds[start..]
        .iter()
        .map(|round| CanonicalRound {
            number: round.round_num - offset,
            round,
        })
        .filter(|round| round.is_played())
        .collect();
    debug!(
        rounds = canonical.len(),
        unfinished = rounds.len() - start - canonical.len(),
        "normalized rounds"
    );
    Ok(canonical)
}

pub fn score_summary(rounds: &[CanonicalRound], max_rounds: u32) -> Result<ScoreSummary> {
    let half = max_rounds / 2;
    let mut a = TeamScore::default();
    let mut b = TeamScore::default();

    for round in rounds {
        let side = round.winning_side.ok_or(Error::MissingWinningSide {
            round: round.number,
        })?;
        let played = a.total + b.total;
        if played < half {
            match side {
                Side::CounterTerrorist => a.total += 1,
                Side::Terrorist => b.total += 1,
            }
        } else if played < half * 2 {
            match side {
                Side::Terrorist => a.total += 1,
                Side::CounterTerrorist => b.total += 1,
            }
        }
        if played < half && a.total + b.total == half {
            a.first_half = a.total;
            b.first_half = b.total;
        }
    }

    a.second_half = a.total - a.first_half;
    b.second_half = b.total - b.first_half;

    match rounds.last() {
        Some(last) => {
            let winner = last.winning_team.clone().unwrap_or_default();
            let loser = last.losing_team.clone().unwrap_or_default();
            // on a tie the last round decides which name goes where
            if a.total > b.total {
                a.name = winner;
                b.name = loser;
            } else {
                a.name = loser;
                b.name = winner;
            }
        }
        None => warn!("no completed rounds, can't determine team names"),
    }

    Ok(ScoreSummary {
        team_a: a,
        team_b: b,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{played_round, round};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_renumber_after_reset() {
        let mut rounds: Vec<_> = (1..=5).map(|num| round(num, num as u32 - 1, 0)).collect();
        rounds.push(round(1, 0, 0));
        rounds.push(round(2, 1, 0));
        rounds.push(round(3, 1, 1));

        let canonical = canonical_rounds(&rounds).unwrap();
        let numbers: Vec<_> = canonical.iter().map(|round| round.number).collect();
        assert_eq!(vec![1, 2, 3], numbers);
        assert!(std::ptr::eq(canonical[0].round(), &rounds[5]));
    }

    #[test]
    fn test_renumber_offset() {
        let rounds = vec![round(1, 0, 0), round(2, 0, 1), round(3, 0, 0), round(4, 1, 0)];

        let canonical = canonical_rounds(&rounds).unwrap();
        let numbers: Vec<_> = canonical.iter().map(|round| round.number).collect();
        assert_eq!(vec![1, 2], numbers);
        // input is left untouched
        assert_eq!(3, rounds[2].round_num);
    }

    #[test]
    fn test_drop_unfinished() {
        let mut rounds = vec![round(1, 0, 0), round(2, 1, 0), round(3, 1, 1)];
        rounds[1].winning_team = None;
        rounds[2].is_warmup = true;

        let canonical = canonical_rounds(&rounds).unwrap();
        assert_eq!(1, canonical.len());
    }

    #[test]
    fn test_no_game_start() {
        let rounds = vec![round(1, 1, 0), round(2, 1, 1)];
        assert!(matches!(canonical_rounds(&rounds), Err(Error::NoGameStart)));
        assert!(matches!(canonical_rounds(&[]), Err(Error::NoGameStart)));
    }

    #[test]
    fn test_side_swap() {
        let mut rounds = Vec::new();
        for num in 1..=12 {
            rounds.push(played_round(num, "Alpha", Side::CounterTerrorist, "Bravo"));
        }
        for num in 13..=24 {
            rounds.push(played_round(num, "Alpha", Side::Terrorist, "Bravo"));
        }
        let canonical = canonical_rounds(&rounds).unwrap();
        let score = score_summary(&canonical, 24).unwrap();

        assert_eq!(
            TeamScore {
                name: "Alpha".into(),
                total: 24,
                first_half: 12,
                second_half: 12,
            },
            score.team_a
        );
        assert_eq!(
            TeamScore {
                name: "Bravo".into(),
                total: 0,
                first_half: 0,
                second_half: 0,
            },
            score.team_b
        );
    }

    #[test]
    fn test_halves() {
        let wins = [
            (Side::CounterTerrorist, "Alpha"),
            (Side::Terrorist, "Bravo"),
            (Side::CounterTerrorist, "Alpha"),
            (Side::CounterTerrorist, "Bravo"),
            (Side::Terrorist, "Alpha"),
        ];
        let rounds: Vec<_> = wins
            .iter()
            .enumerate()
            .map(|(i, (side, winner))| {
                let loser = if *winner == "Alpha" { "Bravo" } else { "Alpha" };
                played_round(i as i32 + 1, winner, *side, loser)
            })
            .collect();
        let canonical = canonical_rounds(&rounds).unwrap();
        let score = score_summary(&canonical, 6).unwrap();

        let (a, b) = (&score.team_a, &score.team_b);
        assert_eq!((3, 2, 1), (a.total, a.first_half, a.second_half));
        assert_eq!((2, 1, 1), (b.total, b.first_half, b.second_half));
        assert_eq!("Alpha", score.team_a.name);
        assert_eq!("Bravo", score.team_b.name);
    }

    #[test]
    fn test_overtime_ignored() {
        let rounds: Vec<_> = (1..=6)
            .map(|num| played_round(num, "Alpha", Side::CounterTerrorist, "Bravo"))
            .collect();
        let canonical = canonical_rounds(&rounds).unwrap();
        let score = score_summary(&canonical, 4).unwrap();

        assert_eq!(2, score.team_a.total);
        assert_eq!(2, score.team_b.total);
    }

    #[test]
    fn test_tie_uses_last_round() {
        let rounds = vec![
            played_round(1, "Alpha", Side::CounterTerrorist, "Bravo"),
            played_round(2, "Bravo", Side::CounterTerrorist, "Alpha"),
        ];
        let canonical = canonical_rounds(&rounds).unwrap();
        let score = score_summary(&canonical, 2).unwrap();

        assert_eq!(1, score.team_a.total);
        assert_eq!(1, score.team_b.total);
        assert_eq!("Alpha", score.team_a.name);
        assert_eq!("Bravo", score.team_b.name);
    }

    #[test]
    fn test_missing_side() {
        let mut rounds = vec![played_round(1, "Alpha", Side::CounterTerrorist, "Bravo")];
        rounds[0].winning_side = None;
        let canonical = canonical_rounds(&rounds).unwrap();

        assert!(matches!(
            score_summary(&canonical, 24),
            Err(Error::MissingWinningSide { round: 1 })
        ));
    }

    #[test]
    fn test_empty() {
        let score = score_summary(&[], 24).unwrap();
        assert_eq!(ScoreSummary::default(), score);
    }
}
