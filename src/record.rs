use crate::common::{is_grenade, Side};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use steamid_ng::SteamID;

/// A fully parsed match as produced by the demo parser
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    #[serde(rename = "matchID")]
    pub match_id: String,
    pub map_name: String,
    pub server_vars: ServerVars,
    pub game_rounds: Vec<Round>,
    pub player_connections: Vec<PlayerConnection>,
}

impl MatchRecord {
    /// Check the invariants serde can't express
    pub fn validate(&self) -> Result<()> {
        for round in &self.game_rounds {
            if round.kills.iter().any(|kill| !kill.is_consistent()) {
                return Err(Error::InvalidSuicide {
                    round: round.round_num,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerVars {
    /// Regulation round count for both halves combined
    pub max_rounds: u32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerConnection {
    #[serde(rename = "steamID")]
    pub steam_id: u64,
}

impl PlayerConnection {
    /// Bots and the GOTV client connect without an account
    pub fn steam_id(&self) -> Option<SteamID> {
        match self.steam_id {
            0 => None,
            id => Some(SteamID::from(id)),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub round_num: i32,
    pub is_warmup: bool,
    pub t_score: u32,
    pub ct_score: u32,
    #[serde(deserialize_with = "Option::deserialize")]
    pub winning_team: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub winning_side: Option<Side>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub losing_team: Option<String>,
    pub kills: Vec<KillEvent>,
    pub damages: Vec<DamageEvent>,
    pub weapon_fires: Vec<WeaponFireEvent>,
}

impl Round {
    /// Both teams at zero, either the first round of a game or a restart
    pub fn is_reset(&self) -> bool {
        self.t_score == 0 && self.ct_score == 0
    }

    /// Completed competitive round
    pub fn is_played(&self) -> bool {
        self.winning_team.is_some() && !self.is_warmup
    }
}

impl AsRef<Round> for Round {
    fn as_ref(&self) -> &Round {
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KillEvent {
    #[serde(deserialize_with = "Option::deserialize")]
    pub attacker_team: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub attacker_name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub attacker_side: Option<Side>,
    pub victim_team: String,
    pub victim_name: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub victim_side: Option<Side>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub assister_name: Option<String>,
    pub is_suicide: bool,
    pub is_headshot: bool,
    pub is_trade: bool,
    #[serde(deserialize_with = "Option::deserialize")]
    pub player_traded_name: Option<String>,
}

impl KillEvent {
    pub fn is_attacker(&self, name: &str) -> bool {
        self.attacker_name.as_deref() == Some(name)
    }

    pub fn is_victim(&self, name: &str) -> bool {
        self.victim_name == name
    }

    pub fn is_assister(&self, name: &str) -> bool {
        self.assister_name.as_deref() == Some(name)
    }

    pub fn is_traded(&self, name: &str) -> bool {
        self.player_traded_name.as_deref() == Some(name)
    }

    fn is_consistent(&self) -> bool {
        !self.is_suicide || self.is_attacker(&self.victim_name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageEvent {
    pub is_friendly_fire: bool,
    pub hp_damage_taken: u32,
    pub weapon: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub attacker_name: Option<String>,
    pub victim_name: String,
}

impl DamageEvent {
    pub fn is_attacker(&self, name: &str) -> bool {
        self.attacker_name.as_deref() == Some(name)
    }

    pub fn is_utility(&self) -> bool {
        is_grenade(&self.weapon)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponFireEvent {
    pub player_team: String,
    pub player_name: String,
    pub weapon: String,
}

impl WeaponFireEvent {
    pub fn is_grenade(&self) -> bool {
        is_grenade(&self.weapon)
    }
}
