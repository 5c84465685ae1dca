use serde::{Serialize, Serializer};

use crate::PlayerId;

/// Advisory raised while balancing.
///
/// Warnings never abort a run; they travel with the result and render as
/// plain sentences (also when serialized).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum BalanceWarning {
    #[display("No active players available")]
    NoActivePlayers,
    #[display(
        "{count} goalkeepers available: goalkeepers cannot be evenly distributed across 2 teams"
    )]
    GoalkeeperSurplus { count: usize },
    #[display("{count} players did not fit within the configured team sizes")]
    CapacityExceeded { count: usize },
    #[display("{team} has {count} field players, expected {expected}")]
    PartialTeam {
        team: String,
        count: usize,
        expected: usize,
    },
    #[display("Player id {id} appears more than once in the roster")]
    DuplicatePlayerId { id: PlayerId },
    #[display("{count} active players were not assigned to any team")]
    UnassignedPlayers { count: usize },
}

impl Serialize for BalanceWarning {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
