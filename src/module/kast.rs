use crate::module::{percentage, RoundHandler};
use crate::record::Round;

#[derive(Debug, Default, PartialEq)]
pub struct Kast {
    /// Rounds with a kill, assist, survival or trade
    pub rounds: u32,
    pub percentage: f64,
}

#[derive(Default)]
pub struct KastHandler {
    rounds: u32,
}

impl KastHandler {
    fn counts(player: &str, round: &Round) -> bool {
        let mut contributed = false;
        let mut survived = true;
        let mut traded = false;
        for kill in &round.kills {
            if kill.is_attacker(player) || kill.is_assister(player) {
                contributed = true;
            } else if kill.is_victim(player) {
                survived = false;
            } else if kill.is_traded(player) {
                traded = true;
            }
        }
        contributed || survived || traded
    }
}

impl RoundHandler for KastHandler {
    type Output = Kast;

    fn handle(&mut self, player: &str, round: &Round) {
        if Self::counts(player, round) {
            self.rounds += 1;
        }
    }

    fn finish(self, rounds: usize) -> Self::Output {
        Kast {
            rounds: self.rounds,
            percentage: percentage(self.rounds as f64, rounds as f64),
        }
    }
}
