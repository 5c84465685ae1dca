use std::collections::{BTreeMap, HashSet};

use crate::{BalanceWarning, Player};

/// Active roster split into category buckets and goalkeepers.
///
/// Buckets are keyed by category in ascending order, so iterating them
/// visits the strongest tier first. Goalkeepers never enter a bucket.
#[derive(Debug, Clone)]
pub(crate) struct CategoryPartition<'a> {
    pub(crate) active: Vec<&'a Player>,
    pub(crate) buckets: BTreeMap<u8, Vec<Player>>,
    pub(crate) goalkeepers: Vec<Player>,
}

impl<'a> CategoryPartition<'a> {
    /// Splits the active players of `players`.
    ///
    /// Returns `None` when no active player is present.
    pub(crate) fn new(players: &'a [Player], warnings: &mut Vec<BalanceWarning>) -> Option<Self> {
        let active = players.iter().filter(|p| p.is_active).collect::<Vec<_>>();
        if active.is_empty() {
            return None;
        }

        let mut seen = HashSet::with_capacity(active.len());
        let mut buckets = BTreeMap::<u8, Vec<Player>>::new();
        let mut goalkeepers = vec![];
        for &player in &active {
            if !seen.insert(&player.id) {
                warnings.push(BalanceWarning::DuplicatePlayerId {
                    id: player.id.clone(),
                });
            }
            if player.is_goalkeeper() {
                goalkeepers.push(player.clone());
            } else {
                buckets
                    .entry(player.category)
                    .or_default()
                    .push(player.clone());
            }
        }

        tracing::debug!(
            active = active.len(),
            inactive = players.len() - active.len(),
            goalkeepers = goalkeepers.len(),
            buckets = ?buckets.iter().map(|(c, b)| (*c, b.len())).collect::<Vec<_>>(),
            "partitioned roster"
        );

        Some(Self {
            active,
            buckets,
            goalkeepers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_roster_yields_none() {
        let mut warnings = vec![];
        assert!(CategoryPartition::new(&[], &mut warnings).is_none());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_all_inactive_yields_none() {
        let players = [
            Player::new("a", 1, 1.0, Position::Forward).with_active(false),
            Player::new("b", 2, 1.5, Position::Goalkeeper).with_active(false),
        ];
        let mut warnings = vec![];
        assert!(CategoryPartition::new(&players, &mut warnings).is_none());
    }

    #[test]
    fn test_buckets_by_category_and_separates_goalkeepers() {
        let players = [
            Player::new("f1", 1, 1.0, Position::Forward),
            Player::new("d2", 2, 1.5, Position::Defender),
            Player::new("g1", 1, 1.1, Position::Goalkeeper),
            Player::new("x3", 3, 2.0, Position::ForwardDefender),
            Player::new("f2", 1, 1.2, Position::Forward),
            Player::new("off", 1, 0.9, Position::Forward).with_active(false),
            Player::new("x7", 7, 3.0, Position::Defender),
        ];
        let mut warnings = vec![];
        let partition = CategoryPartition::new(&players, &mut warnings).unwrap();

        assert_eq!(partition.active.len(), 6);
        assert_eq!(partition.goalkeepers.len(), 1);
        assert_eq!(
            partition.buckets.keys().copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 7]
        );
        assert_eq!(partition.buckets[&1].len(), 2);
        assert_eq!(partition.buckets[&2].len(), 1);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_duplicate_ids_are_reported() {
        let players = [
            Player::new("same", 1, 1.0, Position::Forward),
            Player::new("same", 2, 1.5, Position::Defender),
        ];
        let mut warnings = vec![];
        let partition = CategoryPartition::new(&players, &mut warnings).unwrap();

        assert_eq!(partition.active.len(), 2);
        assert_eq!(
            warnings,
            vec![BalanceWarning::DuplicatePlayerId { id: "same".into() }]
        );
    }
}
