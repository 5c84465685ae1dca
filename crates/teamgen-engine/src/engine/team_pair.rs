use crate::{BalanceOptions, Player, Team, TeamId};

/// The two team accumulators shared by every stage of one balancing run.
///
/// Placement respects the per-role caps in [`BalanceOptions`]: a player whose
/// target team is full goes to the other team, and a player that fits
/// nowhere is kept aside as overflow.
#[derive(Debug, Clone)]
pub(crate) struct TeamPair<'a> {
    teams: [Team; 2],
    options: &'a BalanceOptions,
    overflow: Vec<Player>,
}

impl<'a> TeamPair<'a> {
    pub(crate) fn new(names: [String; 2], options: &'a BalanceOptions) -> Self {
        let [name_a, name_b] = names;
        Self {
            teams: [Team::new(TeamId::A, name_a), Team::new(TeamId::B, name_b)],
            options,
            overflow: vec![],
        }
    }

    pub(crate) fn team(&self, id: TeamId) -> &Team {
        &self.teams[id.index()]
    }

    pub(crate) fn rating(&self, player: &Player) -> f64 {
        self.options.balance_method.rating(player)
    }

    pub(crate) fn average_rating(&self, id: TeamId) -> f64 {
        let method = self.options.balance_method;
        self.team(id).average_by(|p| method.rating(p))
    }

    /// The team that should receive the next stronger player.
    ///
    /// A higher average rating means a weaker team. Team A wins exact ties,
    /// including two empty teams.
    pub(crate) fn weaker(&self) -> TeamId {
        if self.average_rating(TeamId::A) >= self.average_rating(TeamId::B) {
            TeamId::A
        } else {
            TeamId::B
        }
    }

    /// Hands the stronger of the two players to the currently weaker team and
    /// the other one to the opposite team.
    ///
    /// On equal ratings `first` counts as the stronger player.
    pub(crate) fn assign_pair(&mut self, first: Player, second: Player) {
        let (better, worse) = if self.rating(&first) <= self.rating(&second) {
            (first, second)
        } else {
            (second, first)
        };
        let target = self.weaker();
        tracing::trace!(
            better = %better.id,
            worse = %worse.id,
            %target,
            "assigning pair"
        );
        self.place(target, better);
        self.place(target.other(), worse);
    }

    /// Adds `player` to `preferred`, falling back to the other team when
    /// `preferred` is at capacity for the player's role.
    pub(crate) fn place(&mut self, preferred: TeamId, player: Player) {
        let target = [preferred, preferred.other()]
            .into_iter()
            .find(|id| self.has_room(*id, &player));
        match target {
            Some(id) => self.teams[id.index()].assign(player),
            None => {
                tracing::debug!(player = %player.id, "no team has room for player");
                self.overflow.push(player);
            }
        }
    }

    fn has_room(&self, id: TeamId, player: &Player) -> bool {
        let Some(capacity) = self.options.capacity_for(player) else {
            return true;
        };
        let team = self.team(id);
        let taken = if player.is_goalkeeper() {
            team.goalkeepers().len()
        } else {
            team.field_players().len()
        };
        taken < capacity
    }

    pub(crate) fn into_parts(self) -> ([Team; 2], Vec<Player>) {
        (self.teams, self.overflow)
    }
}
