use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed match record: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("No round with a zeroed score found, can't determine the start of the game")]
    NoGameStart,
    #[error("Round {round} has a winning team but no winning side")]
    MissingWinningSide { round: i32 },
    #[error("Suicide in round {round} has different attacker and victim")]
    InvalidSuicide { round: i32 },
    #[error("Unknown sort key \"{0}\"")]
    UnknownSortKey(String),
}

pub type Result<O, E = Error> = std::result::Result<O, E>;
