use crate::common::Side;
use crate::record::{DamageEvent, KillEvent, Round, WeaponFireEvent};

/// Round won by "Alpha" on the CT side with the given start score
pub fn round(num: i32, t_score: u32, ct_score: u32) -> Round {
    Round {
        round_num: num,
        t_score,
        ct_score,
        winning_team: Some("Alpha".into()),
        winning_side: Some(Side::CounterTerrorist),
        losing_team: Some("Bravo".into()),
        ..Round::default()
    }
}

/// Round of a game without restarts, only the first round starts at 0:0
pub fn played_round(num: i32, winner: &str, side: Side, loser: &str) -> Round {
    Round {
        round_num: num,
        t_score: 0,
        ct_score: num as u32 - 1,
        winning_team: Some(winner.into()),
        winning_side: Some(side),
        losing_team: Some(loser.into()),
        ..Round::default()
    }
}

pub fn kill(attacker: &str, victim: &str) -> KillEvent {
    KillEvent {
        attacker_name: Some(attacker.into()),
        attacker_team: Some(team_of(attacker).into()),
        victim_name: victim.into(),
        victim_team: team_of(victim).into(),
        ..KillEvent::default()
    }
}

pub fn suicide(player: &str) -> KillEvent {
    KillEvent {
        is_suicide: true,
        ..kill(player, player)
    }
}

pub fn damage(attacker: &str, victim: &str, weapon: &str, amount: u32) -> DamageEvent {
    DamageEvent {
        attacker_name: Some(attacker.into()),
        victim_name: victim.into(),
        weapon: weapon.into(),
        hp_damage_taken: amount,
        is_friendly_fire: team_of(attacker) == team_of(victim),
    }
}

pub fn fire(player: &str, weapon: &str) -> WeaponFireEvent {
    WeaponFireEvent {
        player_name: player.into(),
        player_team: team_of(player).into(),
        weapon: weapon.into(),
    }
}

/// Players named "a.." play for Alpha, everyone else for Bravo
fn team_of(player: &str) -> &'static str {
    if player.starts_with('a') {
        "Alpha"
    } else {
        "Bravo"
    }
}
