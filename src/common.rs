use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "T")]
    Terrorist,
    #[serde(rename = "CT")]
    CounterTerrorist,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Terrorist => "T",
            Side::CounterTerrorist => "CT",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

impl FromStr for Side {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "T" => Ok(Side::Terrorist),
            "CT" => Ok(Side::CounterTerrorist),
            _ => Err(()),
        }
    }
}

/// Thrown utility, these don't count as shots fired
#[derive(Copy, Clone, Eq, PartialEq, Debug, Sequence)]
pub enum Grenade {
    Molotov,
    Smoke,
    HighExplosive,
    Incendiary,
    Flashbang,
    Decoy,
}

impl Grenade {
    pub fn as_str(self) -> &'static str {
        match self {
            Grenade::Molotov => "Molotov",
            Grenade::Smoke => "Smoke Grenade",
            Grenade::HighExplosive => "HE Grenade",
            Grenade::Incendiary => "Incendiary Grenade",
            Grenade::Flashbang => "Flashbang",
            Grenade::Decoy => "Decoy Grenade",
        }
    }
}

impl Display for Grenade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

impl FromStr for Grenade {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Molotov" => Ok(Grenade::Molotov),
            "Smoke Grenade" => Ok(Grenade::Smoke),
            "HE Grenade" => Ok(Grenade::HighExplosive),
            "Incendiary Grenade" => Ok(Grenade::Incendiary),
            "Flashbang" => Ok(Grenade::Flashbang),
            "Decoy Grenade" => Ok(Grenade::Decoy),
            _ => Err(()),
        }
    }
}

pub fn is_grenade(weapon: &str) -> bool {
    weapon.parse::<Grenade>().is_ok()
}

/// Round to two decimals, used for every derived rate in the output
///
/// Ties round half away from zero, so `0.125` becomes `0.13`
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[test]
fn test_grenade_names() {
    for grenade in enum_iterator::all::<Grenade>() {
        assert_eq!(Ok(grenade), grenade.as_str().parse());
        assert!(is_grenade(grenade.as_str()));
    }
    assert!(!is_grenade("AK-47"));
    assert!(!is_grenade("molotov"));
}

#[test]
fn test_round2() {
    assert_eq!(33.33, round2(100.0 / 3.0));
    assert_eq!(0.7, round2(0.69785));
    assert_eq!(-0.16, round2(-0.155421));
    assert_eq!(0.13, round2(0.125));
    assert_eq!(-0.13, round2(-0.125));
}
