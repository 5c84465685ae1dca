use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Player;

/// Which player rating drives the balancing decisions.
///
/// All three methods yield the same ordering when players carry no explicit
/// `points` (points then default to `multiplier * 100`).
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "camelCase")]
pub enum BalanceMethod {
    /// Rank by the raw multiplier.
    #[default]
    #[display("skillLevel")]
    SkillLevel,
    /// Rank by points, scaled back to multiplier units.
    #[display("points")]
    Points,
    /// Mean of the multiplier and the scaled points.
    #[display("hybrid")]
    Hybrid,
}

impl BalanceMethod {
    /// Returns the rating used to compare `player`; lower is stronger.
    #[must_use]
    pub fn rating(self, player: &Player) -> f64 {
        match self {
            Self::SkillLevel => player.multiplier,
            Self::Points => player.points() / 100.0,
            Self::Hybrid => f64::midpoint(player.multiplier, player.points() / 100.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown balance method: {input:?} (expected skillLevel, points or hybrid)")]
pub struct ParseBalanceMethodError {
    input: String,
}

impl FromStr for BalanceMethod {
    type Err = ParseBalanceMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "skilllevel" | "skill" => Ok(Self::SkillLevel),
            "points" => Ok(Self::Points),
            "hybrid" => Ok(Self::Hybrid),
            _ => Err(ParseBalanceMethodError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Tuning knobs for one balancing request.
///
/// Every field is optional in serialized form:
///
/// ```
/// use teamgen_engine::{BalanceMethod, BalanceOptions};
///
/// let options: BalanceOptions =
///     serde_json::from_str(r#"{"playersPerTeam": 5, "balanceMethod": "hybrid"}"#).unwrap();
/// assert_eq!(options.players_per_team, Some(5));
/// assert_eq!(options.goalkeepers_per_team, None);
/// assert_eq!(options.balance_method, BalanceMethod::Hybrid);
/// assert!(options.allow_partial_teams);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BalanceOptions {
    /// Maximum number of field players per team. `None` means unlimited.
    pub players_per_team: Option<usize>,
    /// Maximum number of goalkeepers per team. `None` means unlimited.
    pub goalkeepers_per_team: Option<usize>,
    pub balance_method: BalanceMethod,
    /// When `false`, a team left below `players_per_team` field players is
    /// reported with a warning.
    pub allow_partial_teams: bool,
}

impl Default for BalanceOptions {
    fn default() -> Self {
        Self {
            players_per_team: None,
            goalkeepers_per_team: None,
            balance_method: BalanceMethod::default(),
            allow_partial_teams: true,
        }
    }
}

impl BalanceOptions {
    /// Per-team capacity for a player of the given role.
    #[must_use]
    pub fn capacity_for(&self, player: &Player) -> Option<usize> {
        if player.is_goalkeeper() {
            self.goalkeepers_per_team
        } else {
            self.players_per_team
        }
    }
}
