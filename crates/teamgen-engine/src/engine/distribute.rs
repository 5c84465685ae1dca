//! Pairwise distribution of field players, one category at a time.
//!
//! Categories are visited strongest first. Each bucket is shuffled and then
//! consumed two players at a time: the stronger player of a pair goes to
//! whichever team is currently weaker. A bucket with an odd count borrows the
//! best player of the next category down (`category + 1`) to complete the
//! last pair; when there is nobody to borrow, the odd player joins a random
//! team.

use std::collections::BTreeMap;

use rand::{
    Rng,
    seq::{IndexedRandom as _, SliceRandom as _},
};

use crate::{Player, TeamId, engine::team_pair::TeamPair};

pub(crate) fn distribute_field_players<R>(
    teams: &mut TeamPair<'_>,
    mut buckets: BTreeMap<u8, Vec<Player>>,
    rng: &mut R,
) where
    R: Rng + ?Sized,
{
    while let Some((category, mut bucket)) = buckets.pop_first() {
        bucket.shuffle(rng);
        tracing::debug!(category, players = bucket.len(), "distributing category");

        let mut players = bucket.into_iter();
        while let Some(first) = players.next() {
            if let Some(second) = players.next() {
                teams.assign_pair(first, second);
                continue;
            }

            let borrowed = category
                .checked_add(1)
                .and_then(|next| buckets.get_mut(&next))
                .and_then(|next_bucket| take_best(next_bucket, &*teams, rng));
            match borrowed {
                Some(partner) => {
                    tracing::debug!(
                        category,
                        odd = %first.id,
                        borrowed = %partner.id,
                        "borrowed player from next category"
                    );
                    teams.assign_pair(first, partner);
                }
                None => {
                    let team = if rng.random_bool(0.5) {
                        TeamId::A
                    } else {
                        TeamId::B
                    };
                    tracing::debug!(
                        category,
                        odd = %first.id,
                        %team,
                        "odd player placed at random"
                    );
                    teams.place(team, first);
                }
            }
        }
    }
}

/// Removes and returns the lowest-rated player of `bucket`, rated the way
/// `teams` rates its members.
///
/// Equal minima are broken uniformly at random.
fn take_best<R>(bucket: &mut Vec<Player>, teams: &TeamPair<'_>, rng: &mut R) -> Option<Player>
where
    R: Rng + ?Sized,
{
    let best = bucket
        .iter()
        .map(|p| teams.rating(p))
        .min_by(f64::total_cmp)?;
    let candidates = bucket
        .iter()
        .enumerate()
        .filter(|(_, p)| teams.rating(p).total_cmp(&best).is_eq())
        .map(|(i, _)| i)
        .collect::<Vec<_>>();
    let index = *candidates.choose(rng)?;
    Some(bucket.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::{BalanceMethod, BalanceOptions, Position};

    fn names() -> [String; 2] {
        ["Team A".to_owned(), "Team B".to_owned()]
    }

    fn field(id: &str, category: u8, multiplier: f64) -> Player {
        Player::new(id, category, multiplier, Position::Forward)
    }

    fn buckets(players: Vec<Player>) -> BTreeMap<u8, Vec<Player>> {
        let mut buckets = BTreeMap::<u8, Vec<Player>>::new();
        for p in players {
            buckets.entry(p.category).or_default().push(p);
        }
        buckets
    }

    #[test]
    fn test_four_players_split_two_and_two() {
        for seed in 0..50 {
            let options = BalanceOptions::default();
            let mut teams = TeamPair::new(names(), &options);
            let mut rng = Pcg32::seed_from_u64(seed);
            let players = vec![
                field("a", 1, 1.0),
                field("b", 1, 1.1),
                field("c", 1, 1.2),
                field("d", 1, 1.3),
            ];
            distribute_field_players(&mut teams, buckets(players), &mut rng);
            assert_eq!(teams.team(TeamId::A).len(), 2, "seed {seed}");
            assert_eq!(teams.team(TeamId::B).len(), 2, "seed {seed}");
        }
    }

    #[test]
    fn test_first_pair_splits_regardless_of_shuffle() {
        for seed in 0..50 {
            let options = BalanceOptions::default();
            let mut teams = TeamPair::new(names(), &options);
            let mut rng = Pcg32::seed_from_u64(seed);
            distribute_field_players(
                &mut teams,
                buckets(vec![field("a", 1, 1.0), field("b", 1, 1.5)]),
                &mut rng,
            );
            // Empty teams tie, so team A takes the stronger player
            assert_eq!(teams.team(TeamId::A).members()[0].as_str(), "a");
            assert_eq!(teams.team(TeamId::B).members()[0].as_str(), "b");
        }
    }

    #[test]
    fn test_odd_player_borrows_best_of_next_category() {
        let options = BalanceOptions::default();
        let mut teams = TeamPair::new(names(), &options);
        let mut rng = Pcg32::seed_from_u64(7);
        let players = vec![
            field("solo", 1, 1.0),
            field("mid", 2, 1.6),
            field("best2", 2, 1.4),
            field("worst2", 2, 1.9),
        ];
        distribute_field_players(&mut teams, buckets(players), &mut rng);

        let team_a = teams.team(TeamId::A);
        let team_b = teams.team(TeamId::B);
        // solo and best2 form the first pair: solo is stronger and goes to A
        assert_eq!(team_a.members()[0].as_str(), "solo");
        assert_eq!(team_b.members()[0].as_str(), "best2");
        assert_eq!(team_a.len() + team_b.len(), 4);
        // best2 was removed from category 2, so nobody appears twice
        let all = team_a
            .members()
            .iter()
            .chain(team_b.members())
            .collect::<Vec<_>>();
        assert_eq!(all.len(), 4);
        assert!(all.iter().filter(|id| id.as_str() == "best2").count() == 1);
    }

    #[test]
    fn test_odd_player_without_next_category_goes_to_random_team() {
        let mut landed = HashMap::<TeamId, usize>::new();
        for seed in 0..200 {
            let options = BalanceOptions::default();
            let mut teams = TeamPair::new(names(), &options);
            let mut rng = Pcg32::seed_from_u64(seed);
            distribute_field_players(&mut teams, buckets(vec![field("only", 3, 2.0)]), &mut rng);
            let team = if teams.team(TeamId::A).is_empty() {
                TeamId::B
            } else {
                TeamId::A
            };
            assert_eq!(teams.team(team.other()).len(), 0);
            *landed.entry(team).or_default() += 1;
        }
        assert!(landed[&TeamId::A] > 50, "{landed:?}");
        assert!(landed[&TeamId::B] > 50, "{landed:?}");
    }

    #[test]
    fn test_category_one_does_not_borrow_from_category_three() {
        // Borrowing would always split "top" and "low" across teams
        let mut shared_team = 0;
        for seed in 0..40 {
            let options = BalanceOptions::default();
            let mut teams = TeamPair::new(names(), &options);
            let mut rng = Pcg32::seed_from_u64(seed);
            distribute_field_players(
                &mut teams,
                buckets(vec![field("top", 1, 1.0), field("low", 3, 2.0)]),
                &mut rng,
            );
            let (a, b) = (teams.team(TeamId::A).len(), teams.team(TeamId::B).len());
            assert_eq!(a + b, 2);
            if a == 2 || b == 2 {
                shared_team += 1;
            }
        }
        assert!(shared_team > 0);
    }

    #[test]
    fn test_take_best_picks_among_equal_minima() {
        let mut seen = HashMap::<String, usize>::new();
        for seed in 0..100 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut bucket = vec![
                field("x", 2, 1.5),
                field("tie1", 2, 1.2),
                field("tie2", 2, 1.2),
            ];
            let options = BalanceOptions::default();
            let teams = TeamPair::new(names(), &options);
            let best = take_best(&mut bucket, &teams, &mut rng).unwrap();
            assert_eq!(bucket.len(), 2);
            assert!(!bucket.iter().any(|p| p.id == best.id));
            *seen.entry(best.id.as_str().to_owned()).or_default() += 1;
        }
        assert!(!seen.contains_key("x"));
        assert!(seen["tie1"] > 20 && seen["tie2"] > 20, "{seen:?}");
    }

    #[test]
    fn test_take_best_on_empty_bucket() {
        let mut rng = Pcg32::seed_from_u64(0);
        let options = BalanceOptions::default();
        let teams = TeamPair::new(names(), &options);
        assert!(take_best(&mut vec![], &teams, &mut rng).is_none());
    }

    #[test]
    fn test_take_best_follows_the_balance_method() {
        let mut rng = Pcg32::seed_from_u64(0);
        let options = BalanceOptions {
            balance_method: BalanceMethod::Points,
            ..BalanceOptions::default()
        };
        let teams = TeamPair::new(names(), &options);
        let mut bucket = vec![
            field("low_multiplier", 2, 1.1).with_points(190.0),
            field("low_points", 2, 1.5).with_points(120.0),
        ];
        let best = take_best(&mut bucket, &teams, &mut rng).unwrap();
        assert_eq!(best.id.as_str(), "low_points");
    }
}
