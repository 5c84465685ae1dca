use std::collections::HashMap;

use serde::Serialize;

use crate::{BalanceOptions, BalanceWarning, Player, PlayerId, Team, TeamId, score_balance};

/// Outcome of one balancing run.
///
/// Always carries exactly two teams, even when nobody could be assigned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamBalanceResult {
    teams: [Team; 2],
    balance_score: u8,
    unused_players: Vec<Player>,
    warnings: Vec<BalanceWarning>,
}

impl TeamBalanceResult {
    /// Builds the result for a roster without active players.
    pub(crate) fn empty(names: [String; 2], warnings: Vec<BalanceWarning>) -> Self {
        let [name_a, name_b] = names;
        Self {
            teams: [Team::new(TeamId::A, name_a), Team::new(TeamId::B, name_b)],
            balance_score: 0,
            unused_players: vec![],
            warnings,
        }
    }

    /// Finalizes the accumulated teams.
    ///
    /// Recomputes team totals, scores the split, and collects every active
    /// player that ended up on neither team: the `overflow` first, then any
    /// player no team accounts for.
    pub(crate) fn assemble(
        mut teams: [Team; 2],
        overflow: &[Player],
        active: &[&Player],
        options: &BalanceOptions,
        mut warnings: Vec<BalanceWarning>,
    ) -> Self {
        for team in &mut teams {
            team.recompute_total_points();
        }
        let balance_score = score_balance(teams[0].total_points(), teams[1].total_points());

        // Ids are matched by multiplicity so duplicated ids stay accounted for
        let mut accounted = HashMap::<&PlayerId, usize>::new();
        for id in teams
            .iter()
            .flat_map(Team::members)
            .chain(overflow.iter().map(|p| &p.id))
        {
            *accounted.entry(id).or_default() += 1;
        }
        let unassigned = active
            .iter()
            .filter(|p| match accounted.get_mut(&p.id) {
                Some(n) if *n > 0 => {
                    *n -= 1;
                    false
                }
                _ => true,
            })
            .map(|&p| p.clone())
            .collect::<Vec<_>>();

        if !overflow.is_empty() {
            warnings.push(BalanceWarning::CapacityExceeded {
                count: overflow.len(),
            });
        }
        if !unassigned.is_empty() {
            warnings.push(BalanceWarning::UnassignedPlayers {
                count: unassigned.len(),
            });
        }
        let unused_players = overflow.iter().cloned().chain(unassigned).collect();
        if let (false, Some(expected)) = (options.allow_partial_teams, options.players_per_team) {
            for team in &teams {
                let count = team.field_players().len();
                if count < expected {
                    warnings.push(BalanceWarning::PartialTeam {
                        team: team.name().to_owned(),
                        count,
                        expected,
                    });
                }
            }
        }

        Self {
            teams,
            balance_score,
            unused_players,
            warnings,
        }
    }

    #[must_use]
    pub fn teams(&self) -> &[Team; 2] {
        &self.teams
    }

    #[must_use]
    pub fn team(&self, id: TeamId) -> &Team {
        &self.teams[id.index()]
    }

    #[must_use]
    pub fn team_a(&self) -> &Team {
        self.team(TeamId::A)
    }

    #[must_use]
    pub fn team_b(&self) -> &Team {
        self.team(TeamId::B)
    }

    /// Fitness of the split, from 0 (lopsided) to 100 (equal totals).
    #[must_use]
    pub const fn balance_score(&self) -> u8 {
        self.balance_score
    }

    #[must_use]
    pub fn unused_players(&self) -> &[Player] {
        &self.unused_players
    }

    #[must_use]
    pub fn warnings(&self) -> &[BalanceWarning] {
        &self.warnings
    }

    /// Number of players placed on either team.
    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.teams.iter().map(Team::len).sum()
    }

    /// Absolute difference between the two teams' average multipliers.
    #[must_use]
    pub fn average_gap(&self) -> f64 {
        (self.teams[0].average_multiplier() - self.teams[1].average_multiplier()).abs()
    }
}
