use crate::module::{percentage, RoundHandler};
use crate::record::Round;

#[derive(Debug, Default, PartialEq)]
pub struct Kda {
    /// Suicides subtract a kill, this can go negative
    pub kills: i32,
    pub deaths: u32,
    pub assists: u32,
    pub headshot_percentage: f64,
}

#[derive(Default)]
pub struct KdaHandler {
    kills: i32,
    deaths: u32,
    assists: u32,
    /// Kills on other players, the base for the headshot rate
    frags: u32,
    headshots: u32,
}

impl RoundHandler for KdaHandler {
    type Output = Kda;

    fn handle(&mut self, player: &str, round: &Round) {
        for kill in &round.kills {
            if kill.is_suicide && kill.is_attacker(player) {
                self.kills -= 1;
                self.deaths += 1;
            } else if kill.is_attacker(player) {
                self.kills += 1;
                self.frags += 1;
                if kill.is_headshot {
                    self.headshots += 1;
                }
            } else if kill.is_victim(player) {
                self.deaths += 1;
            }
            if kill.is_assister(player) {
                self.assists += 1;
            }
        }
    }

    fn finish(self, _rounds: usize) -> Self::Output {
        Kda {
            kills: self.kills,
            deaths: self.deaths,
            assists: self.assists,
            headshot_percentage: percentage(self.headshots as f64, self.frags as f64),
        }
    }
}
