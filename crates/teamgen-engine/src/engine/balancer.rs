use rand::Rng;

use crate::{
    BalanceOptions, BalanceSeed, BalanceWarning, Player, TeamBalanceResult, TeamId,
    engine::{
        distribute::distribute_field_players, goalkeeper::allocate_goalkeepers,
        partition::CategoryPartition, team_pair::TeamPair,
    },
};

/// Splits rosters into two balanced teams.
///
/// Holds only configuration; every call builds fresh team accumulators, so a
/// single balancer can be shared between threads.
///
/// # Pipeline
///
/// 1. Inactive players are dropped and the rest split into category buckets
///    (goalkeepers aside).
/// 2. Field players are distributed pairwise, strongest category first.
/// 3. Goalkeepers are assigned best first to the weaker team.
/// 4. Totals are recomputed and the split is scored.
///
/// # Example
///
/// ```
/// use teamgen_engine::{BalanceOptions, BalanceSeed, Player, Position, TeamBalancer};
///
/// let players = [
///     Player::new("g1", 1, 1.0, Position::Goalkeeper),
///     Player::new("g2", 2, 1.2, Position::Goalkeeper),
///     Player::new("g3", 3, 1.4, Position::Goalkeeper),
/// ];
/// let result = TeamBalancer::new(BalanceOptions::default())
///     .with_team_names("Reds", "Blues")
///     .balance_with_seed(&players, BalanceSeed::from_bytes([0; 16]));
///
/// assert_eq!(result.assigned_count(), 3);
/// assert!(result.warnings()[0].to_string().contains("2 teams"));
/// ```
#[derive(Debug, Clone)]
pub struct TeamBalancer {
    options: BalanceOptions,
    team_names: [String; 2],
}

impl Default for TeamBalancer {
    fn default() -> Self {
        Self::new(BalanceOptions::default())
    }
}

impl TeamBalancer {
    #[must_use]
    pub fn new(options: BalanceOptions) -> Self {
        Self {
            options,
            team_names: TeamId::ALL.map(|id| id.default_name().to_owned()),
        }
    }

    #[must_use]
    pub fn with_team_names<A, B>(mut self, team_a: A, team_b: B) -> Self
    where
        A: Into<String>,
        B: Into<String>,
    {
        self.team_names = [team_a.into(), team_b.into()];
        self
    }

    #[must_use]
    pub fn options(&self) -> &BalanceOptions {
        &self.options
    }

    /// Balances `players` with a freshly generated random seed.
    #[must_use]
    pub fn balance(&self, players: &[Player]) -> TeamBalanceResult {
        self.balance_with_seed(players, rand::rng().random())
    }

    /// Balances `players` deterministically for the given seed.
    #[must_use]
    pub fn balance_with_seed(&self, players: &[Player], seed: BalanceSeed) -> TeamBalanceResult {
        self.balance_with_rng(players, &mut seed.rng())
    }

    /// Balances `players` drawing every random decision from `rng`.
    #[must_use]
    pub fn balance_with_rng<R>(&self, players: &[Player], rng: &mut R) -> TeamBalanceResult
    where
        R: Rng + ?Sized,
    {
        let _span = tracing::debug_span!("balance_teams", players = players.len()).entered();

        let mut warnings = vec![];
        let Some(partition) = CategoryPartition::new(players, &mut warnings) else {
            warnings.push(BalanceWarning::NoActivePlayers);
            log_warnings(&warnings);
            return TeamBalanceResult::empty(self.team_names.clone(), warnings);
        };
        let CategoryPartition {
            active,
            buckets,
            goalkeepers,
        } = partition;

        let mut teams = TeamPair::new(self.team_names.clone(), &self.options);
        distribute_field_players(&mut teams, buckets, rng);
        allocate_goalkeepers(&mut teams, goalkeepers, &mut warnings);

        let (teams, overflow) = teams.into_parts();
        let result =
            TeamBalanceResult::assemble(teams, &overflow, &active, &self.options, warnings);

        log_warnings(result.warnings());
        tracing::debug!(
            score = result.balance_score(),
            team_a = result.team_a().len(),
            team_b = result.team_b().len(),
            unused = result.unused_players().len(),
            "balanced teams"
        );
        result
    }
}

fn log_warnings(warnings: &[BalanceWarning]) {
    for warning in warnings {
        tracing::warn!("{warning}");
    }
}
