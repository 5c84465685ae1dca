use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Utc;
use rand::Rng as _;
use teamgen_engine::BalanceSeed;
use teamgen_stats::descriptive::DescriptiveStats;

use crate::{
    command::balance::BalanceOptionsArg,
    schema::record::{SimulationReport, SummaryStats},
    util::{self, Output},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Roster JSON file
    #[arg(long)]
    roster: PathBuf,
    #[clap(flatten)]
    balance: BalanceOptionsArg,
    /// Number of seeded runs
    #[arg(long, default_value_t = 100)]
    runs: usize,
    /// Hex seed from which every run seed is derived
    #[arg(long)]
    seed: Option<BalanceSeed>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        roster,
        balance,
        runs,
        seed,
        output,
    } = arg;
    anyhow::ensure!(*runs > 0, "--runs must be at least 1");

    let players = util::read_roster_file(roster)?;
    let balancer = balance.to_balancer()?;
    let master_seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut master_rng = master_seed.rng();
    tracing::info!(%master_seed, runs, "simulating balancing runs");

    let mut scores = Vec::with_capacity(*runs);
    let mut gaps = Vec::with_capacity(*runs);
    let mut runs_with_unused_players = 0;
    let mut best: Option<(u8, BalanceSeed)> = None;
    for run in 0..*runs {
        let run_seed: BalanceSeed = master_rng.random();
        let result = balancer.balance_with_seed(&players, run_seed);
        let score = result.balance_score();
        tracing::debug!(run, %run_seed, score, "run finished");

        scores.push(f64::from(score));
        gaps.push(result.average_gap());
        if !result.unused_players().is_empty() {
            runs_with_unused_players += 1;
        }
        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, run_seed));
        }
    }

    let (gaps, skipped_gaps) = finite_samples(gaps);
    if skipped_gaps > 0 {
        tracing::warn!(skipped_gaps, "ignoring non-finite average gaps");
    }
    let score_stats = DescriptiveStats::new(scores).context("no balance scores collected")?;
    let gap_stats = DescriptiveStats::new(gaps).context("no finite average gaps collected")?;
    let (best_score, best_seed) = best.context("no runs completed")?;

    let report = SimulationReport {
        generated_at: Utc::now(),
        master_seed,
        runs: *runs,
        options: balancer.options().clone(),
        balance_score: SummaryStats::from(&score_stats),
        average_gap: SummaryStats::from(&gap_stats),
        runs_with_unused_players,
        best_seed,
        best_score,
    };
    Output::save_json(&report, output.clone())?;

    eprintln!();
    eprintln!("Simulation completed");
    eprintln!("  Runs:        {runs}");
    eprintln!("  Master seed: {master_seed}");
    eprintln!("  Balance score:");
    eprintln!("    Min:    {:.0}", score_stats.min);
    eprintln!("    Max:    {:.0}", score_stats.max);
    eprintln!("    Mean:   {:.2}", score_stats.mean);
    eprintln!("    Median: {:.0}", score_stats.median);
    eprintln!("    Stddev: {:.2}", score_stats.std_dev);
    eprintln!("  Average multiplier gap:");
    eprintln!("    Mean:   {:.4}", gap_stats.mean);
    eprintln!("    Max:    {:.4}", gap_stats.max);
    eprintln!("  Best seed: {best_seed} (score {best_score})");
    if runs_with_unused_players > 0 {
        eprintln!("  Runs with unused players: {runs_with_unused_players}");
    }

    Ok(())
}

/// Splits off the non-finite samples, returning the rest and how many were
/// dropped.
///
/// Extreme multipliers overflow the team averages, and `inf - inf` gaps would
/// otherwise poison every summary statistic.
fn finite_samples(samples: Vec<f64>) -> (Vec<f64>, usize) {
    let total = samples.len();
    let finite = samples
        .into_iter()
        .filter(|v| v.is_finite())
        .collect::<Vec<_>>();
    let skipped = total - finite.len();
    (finite, skipped)
}
