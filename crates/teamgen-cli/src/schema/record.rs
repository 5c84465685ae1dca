use chrono::{DateTime, Utc};
use serde::Serialize;
use teamgen_engine::{BalanceOptions, BalanceSeed, TeamBalanceResult};

/// A balancing run as written by `teamgen balance`.
///
/// Carries the seed and options so the same split can be reproduced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRecord<'a> {
    pub generated_at: DateTime<Utc>,
    pub seed: BalanceSeed,
    pub options: &'a BalanceOptions,
    pub result: &'a TeamBalanceResult,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub generated_at: DateTime<Utc>,
    pub master_seed: BalanceSeed,
    pub runs: usize,
    pub options: BalanceOptions,
    pub balance_score: SummaryStats,
    pub average_gap: SummaryStats,
    pub runs_with_unused_players: usize,
    pub best_seed: BalanceSeed,
    pub best_score: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

impl From<&teamgen_stats::descriptive::DescriptiveStats> for SummaryStats {
    fn from(stats: &teamgen_stats::descriptive::DescriptiveStats) -> Self {
        Self {
            min: stats.min,
            max: stats.max,
            mean: stats.mean,
            median: stats.median,
            std_dev: stats.std_dev,
        }
    }
}
