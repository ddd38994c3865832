use crate::module::{percentage, RoundHandler};
use crate::record::Round;

#[derive(Debug, Default, PartialEq)]
pub struct Accuracy {
    pub hits: u32,
    pub shots: u32,
    pub percentage: f64,
}

/// Every damage event counts as a hit, grenade throws don't count as shots
#[derive(Default)]
pub struct AccuracyHandler {
    hits: u32,
    shots: u32,
}

impl RoundHandler for AccuracyHandler {
    type Output = Accuracy;

    fn handle(&mut self, player: &str, round: &Round) {
        self.hits += round
            .damages
            .iter()
            .filter(|damage| damage.is_attacker(player))
            .count() as u32;
        self.shots += round
            .weapon_fires
            .iter()
            .filter(|fire| fire.player_name == player && !fire.is_grenade())
            .count() as u32;
    }

    fn finish(self, _rounds: usize) -> Self::Output {
        Accuracy {
            hits: self.hits,
            shots: self.shots,
            percentage: percentage(self.hits as f64, self.shots as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Side;
    use crate::module::run;
    use crate::test_util::{damage, fire, played_round};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accuracy() {
        let mut round = played_round(1, "Alpha", Side::CounterTerrorist, "Bravo");
        round.weapon_fires = std::iter::repeat_with(|| fire("a1", "AK-47"))
            .take(10)
            .chain(Some(fire("a1", "HE Grenade")))
            .chain(Some(fire("b1", "AK-47")))
            .collect();
        round.damages = vec![
            damage("a1", "b1", "AK-47", 27),
            damage("a1", "b1", "AK-47", 100),
            damage("a1", "b2", "HE Grenade", 40),
            damage("a1", "a2", "AK-47", 15),
            damage("b1", "a1", "AK-47", 100),
        ];

        assert_eq!(
            Accuracy {
                hits: 4,
                shots: 10,
                percentage: 40.0,
            },
            run::<AccuracyHandler, _>("a1", &[round])
        );
    }

    #[test]
    fn test_no_shots() {
        let mut round = played_round(1, "Alpha", Side::CounterTerrorist, "Bravo");
        round.weapon_fires = vec![fire("a1", "Molotov")];
        round.damages = vec![damage("a1", "b1", "Molotov", 8)];

        let accuracy = run::<AccuracyHandler, _>("a1", &[round]);
        assert_eq!(1, accuracy.hits);
        assert_eq!(0.0, accuracy.percentage);
    }
}
