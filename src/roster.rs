use crate::record::{PlayerConnection, Round};
use ahash::AHashSet;
use tracing::warn;

/// Names of the players taking part in the match, in order of their first kill event
///
/// The number of players is taken from the connections with a real account, the names
/// are then collected from the kills until that many distinct names are found.
/// Players that never kill or die before everyone else did are therefore missing.
pub fn extract_roster(connections: &[PlayerConnection], rounds: &[Round]) -> Vec<String> {
    let expected = connections
        .iter()
        .filter_map(PlayerConnection::steam_id)
        .map(u64::from)
        .collect::<AHashSet<_>>()
        .len();

    let mut seen = AHashSet::with_capacity(expected);
    let mut roster = Vec::with_capacity(expected);

    let names = rounds
        .iter()
        .flat_map(|round| round.kills.iter())
        .flat_map(|kill| {
            kill.attacker_name
                .as_deref()
                .into_iter()
                .chain(Some(kill.victim_name.as_str()))
        });
    for name in names {
        if seen.insert(name) {
            roster.push(name.to_string());
        }
        if roster.len() == expected {
            return roster;
        }
    }

    warn!(
        expected,
        found = roster.len(),
        "not all connected players appear in the kill events"
    );
    roster
}

/// Team of the player as seen in their first kill event
pub fn player_team<'a, R>(name: &str, rounds: &'a [R]) -> Option<&'a str>
where
    R: AsRef<Round>,
{
    rounds
        .iter()
        .flat_map(|round| round.as_ref().kills.iter())
        .find_map(|kill| {
            if kill.is_attacker(name) {
                kill.attacker_team.as_deref()
            } else if kill.is_victim(name) {
                Some(kill.victim_team.as_str())
            } else {
                None
            }
        })
}
