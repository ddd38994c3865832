use crate::module::RoundHandler;
use crate::record::Round;

#[derive(Debug, Default, PartialEq)]
pub struct DamageStats {
    pub total: u32,
    /// Damage per played round, not per round the player was alive in
    pub average_per_round: f64,
    pub utility: u32,
}

#[derive(Default)]
pub struct DamageHandler {
    total: u32,
    utility: u32,
}

impl RoundHandler for DamageHandler {
    type Output = DamageStats;

    fn handle(&mut self, player: &str, round: &Round) {
        for damage in round.damages.iter().filter(|damage| damage.is_attacker(player)) {
            self.total = self.total.saturating_add(damage.hp_damage_taken);
            if damage.is_utility() {
                self.utility = self.utility.saturating_add(damage.hp_damage_taken);
            }
        }
    }

    fn finish(self, rounds: usize) -> Self::Output {
        let average_per_round = if rounds > 0 {
            self.total as f64 / rounds as f64
        } else {
            0.0
        };
        DamageStats {
            total: self.total,
            average_per_round,
            utility: self.utility,
        }
    }
}
