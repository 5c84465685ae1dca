use serde::Serialize;

use crate::{Player, PlayerId};

/// Fixed identity of one of the two teams.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, derive_more::Display,
)]
pub enum TeamId {
    A,
    B,
}

impl TeamId {
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    /// Position of this team in a `[Team; 2]` pair.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    #[must_use]
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::A => "Team A",
            Self::B => "Team B",
        }
    }
}

/// One side of a balanced match, filled in assignment order.
///
/// `players` holds everyone on the team; `field_players` and `goalkeepers`
/// split the same players by role. `total_points` is only meaningful after
/// the balancer has finished and called [`Team::recompute_total_points`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    id: TeamId,
    name: String,
    players: Vec<Player>,
    field_players: Vec<Player>,
    goalkeepers: Vec<Player>,
    members: Vec<PlayerId>,
    total_points: f64,
}

impl Team {
    /// Creates an empty team.
    #[must_use]
    pub fn new<S>(id: TeamId, name: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            players: vec![],
            field_players: vec![],
            goalkeepers: vec![],
            members: vec![],
            total_points: 0.0,
        }
    }

    #[must_use]
    pub const fn id(&self) -> TeamId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn field_players(&self) -> &[Player] {
        &self.field_players
    }

    #[must_use]
    pub fn goalkeepers(&self) -> &[Player] {
        &self.goalkeepers
    }

    #[must_use]
    pub fn members(&self) -> &[PlayerId] {
        &self.members
    }

    #[must_use]
    pub const fn total_points(&self) -> f64 {
        self.total_points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &PlayerId) -> bool {
        self.members.contains(id)
    }

    /// Adds a player, routing it to the field or goalkeeper list by position.
    pub fn assign(&mut self, player: Player) {
        self.members.push(player.id.clone());
        if player.is_goalkeeper() {
            self.goalkeepers.push(player.clone());
        } else {
            self.field_players.push(player.clone());
        }
        self.players.push(player);
    }

    /// Mean of `rating` over the players assigned so far.
    ///
    /// An empty team averages `0.0`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn average_by<F>(&self, rating: F) -> f64
    where
        F: Fn(&Player) -> f64,
    {
        if self.players.is_empty() {
            return 0.0;
        }
        self.players.iter().map(rating).sum::<f64>() / self.players.len() as f64
    }

    #[must_use]
    pub fn average_multiplier(&self) -> f64 {
        self.average_by(|p| p.multiplier)
    }

    /// Sets `total_points` to the sum of every assigned player's points.
    pub fn recompute_total_points(&mut self) {
        self.total_points = self.players.iter().map(Player::points).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_team_id_helpers() {
        assert_eq!(TeamId::A.other(), TeamId::B);
        assert_eq!(TeamId::B.other(), TeamId::A);
        assert_eq!(TeamId::A.index(), 0);
        assert_eq!(TeamId::B.index(), 1);
        assert_eq!(TeamId::A.default_name(), "Team A");
        assert_eq!(TeamId::B.to_string(), "B");
    }

    #[test]
    fn test_empty_team_average_is_zero() {
        let team = Team::new(TeamId::A, "Reds");
        assert!(team.is_empty());
        assert_eq!(team.average_multiplier(), 0.0);
    }

    #[test]
    fn test_assign_splits_by_role() {
        let mut team = Team::new(TeamId::B, "Blues");
        team.assign(Player::new("f1", 1, 1.0, Position::Forward));
        team.assign(Player::new("g1", 1, 1.4, Position::Goalkeeper));
        team.assign(Player::new("d1", 2, 1.6, Position::Defender));

        assert_eq!(team.len(), 3);
        assert_eq!(team.field_players().len(), 2);
        assert_eq!(team.goalkeepers().len(), 1);
        assert_eq!(
            team.members(),
            &[PlayerId::from("f1"), "g1".into(), "d1".into()]
        );
        assert!(team.contains(&"g1".into()));
        assert!((team.average_multiplier() - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_average_by_uses_the_given_rating() {
        let mut team = Team::new(TeamId::A, "Reds");
        team.assign(Player::new("a", 1, 1.0, Position::Forward).with_points(80.0));
        team.assign(Player::new("b", 2, 1.4, Position::Defender));
        assert!((team.average_by(Player::points) - 110.0).abs() < 1e-9);
        assert!((team.average_by(|p| f64::from(p.category)) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_total_points_only_changes_on_recompute() {
        let mut team = Team::new(TeamId::A, "Reds");
        team.assign(Player::new("a", 1, 1.2, Position::Forward));
        team.assign(Player::new("b", 1, 1.0, Position::Defender).with_points(50.0));
        assert_eq!(team.total_points(), 0.0);

        team.recompute_total_points();
        assert!((team.total_points() - 170.0).abs() < 1e-9);
    }
}
