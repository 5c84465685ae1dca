use crate::{BalanceWarning, Player, engine::team_pair::TeamPair};

/// Goalkeepers beyond this count cannot be spread evenly over two teams.
const EVEN_GOALKEEPER_LIMIT: usize = 2;

/// Assigns goalkeepers best first, each to the team that is currently weaker
/// over all players assigned so far.
pub(crate) fn allocate_goalkeepers(
    teams: &mut TeamPair<'_>,
    mut goalkeepers: Vec<Player>,
    warnings: &mut Vec<BalanceWarning>,
) {
    if goalkeepers.len() > EVEN_GOALKEEPER_LIMIT {
        warnings.push(BalanceWarning::GoalkeeperSurplus {
            count: goalkeepers.len(),
        });
    }

    goalkeepers.sort_by(|a, b| teams.rating(a).total_cmp(&teams.rating(b)));
    for goalkeeper in goalkeepers {
        let target = teams.weaker();
        tracing::debug!(goalkeeper = %goalkeeper.id, %target, "assigning goalkeeper");
        teams.place(target, goalkeeper);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BalanceOptions, PlayerId, Position, TeamId};

    fn names() -> [String; 2] {
        ["Team A".to_owned(), "Team B".to_owned()]
    }

    fn keeper(id: &str, multiplier: f64) -> Player {
        Player::new(id, 1, multiplier, Position::Goalkeeper)
    }

    #[test]
    fn test_best_goalkeeper_goes_to_weaker_team() {
        let options = BalanceOptions::default();
        let mut teams = TeamPair::new(names(), &options);
        teams.place(TeamId::A, Player::new("a", 1, 1.0, Position::Forward));
        teams.place(TeamId::B, Player::new("b", 1, 1.6, Position::Forward));

        let mut warnings = vec![];
        allocate_goalkeepers(
            &mut teams,
            vec![keeper("slow", 1.8), keeper("fast", 1.1)],
            &mut warnings,
        );

        // B (1.6) is weaker, so it receives the best keeper first; then
        // A (1.0) vs B (1.35): B is still weaker and receives the second
        assert_eq!(teams.team(TeamId::B).goalkeepers().len(), 2);
        assert_eq!(teams.team(TeamId::B).goalkeepers()[0].id.as_str(), "fast");
        assert!(teams.team(TeamId::A).goalkeepers().is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_empty_team_counts_as_strongest() {
        let options = BalanceOptions::default();
        let mut teams = TeamPair::new(names(), &options);
        let mut warnings = vec![];
        allocate_goalkeepers(
            &mut teams,
            vec![keeper("g2", 1.5), keeper("g1", 1.2)],
            &mut warnings,
        );

        // Two empty teams tie and team A takes g1; B then still averages 0,
        // so A is the weaker side again and also takes g2
        assert_eq!(
            teams.team(TeamId::A).members(),
            &[PlayerId::from("g1"), "g2".into()]
        );
        assert!(teams.team(TeamId::B).is_empty());
    }

    #[test]
    fn test_surplus_goalkeepers_warn_but_all_assigned() {
        let options = BalanceOptions::default();
        let mut teams = TeamPair::new(names(), &options);
        let mut warnings = vec![];
        allocate_goalkeepers(
            &mut teams,
            vec![keeper("g1", 1.0), keeper("g2", 1.2), keeper("g3", 1.4)],
            &mut warnings,
        );

        let assigned = teams.team(TeamId::A).len() + teams.team(TeamId::B).len();
        assert_eq!(assigned, 3);
        assert_eq!(
            warnings,
            vec![BalanceWarning::GoalkeeperSurplus { count: 3 }]
        );
    }

    #[test]
    fn test_no_goalkeepers_is_noop() {
        let options = BalanceOptions::default();
        let mut teams = TeamPair::new(names(), &options);
        let mut warnings = vec![];
        allocate_goalkeepers(&mut teams, vec![], &mut warnings);
        assert!(teams.team(TeamId::A).is_empty());
        assert!(teams.team(TeamId::B).is_empty());
        assert!(warnings.is_empty());
    }
}
