use serde::{Deserialize, Serialize};
use teamgen_engine::Player;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RosterFile {
    Players(Vec<Player>),
    Wrapped { players: Vec<Player> },
}

impl RosterFile {
    pub fn into_players(self) -> Vec<Player> {
        match self {
            RosterFile::Players(players) | RosterFile::Wrapped { players } => players,
        }
    }
}
