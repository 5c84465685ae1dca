use std::path::PathBuf;

use chrono::Utc;
use rand::Rng as _;
use teamgen_engine::{BalanceMethod, BalanceOptions, BalanceSeed, Team, TeamBalancer};

use crate::{
    schema::record::BalanceRecord,
    util::{self, Output},
};

/// Balancing options shared by every command that runs the balancer.
///
/// Flags override the values read from `--options`.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct BalanceOptionsArg {
    /// JSON file with balancing options
    #[arg(long)]
    options: Option<PathBuf>,
    /// Maximum number of field players per team
    #[arg(long)]
    players_per_team: Option<usize>,
    /// Maximum number of goalkeepers per team
    #[arg(long)]
    goalkeepers_per_team: Option<usize>,
    /// Rating used to rank players (skillLevel, points, hybrid)
    #[arg(long)]
    balance_method: Option<BalanceMethod>,
    /// Warn when a team ends up with fewer than --players-per-team field players
    #[arg(long)]
    strict_teams: bool,
    /// Display name of the first team
    #[arg(long, default_value = "Team A")]
    team_a_name: String,
    /// Display name of the second team
    #[arg(long, default_value = "Team B")]
    team_b_name: String,
}

impl BalanceOptionsArg {
    pub(crate) fn to_options(&self) -> anyhow::Result<BalanceOptions> {
        let mut options = util::read_options_file(self.options.as_deref())?;
        if let Some(n) = self.players_per_team {
            options.players_per_team = Some(n);
        }
        if let Some(n) = self.goalkeepers_per_team {
            options.goalkeepers_per_team = Some(n);
        }
        if let Some(method) = self.balance_method {
            options.balance_method = method;
        }
        if self.strict_teams {
            options.allow_partial_teams = false;
        }
        Ok(options)
    }

    pub(crate) fn to_balancer(&self) -> anyhow::Result<TeamBalancer> {
        let balancer = TeamBalancer::new(self.to_options()?)
            .with_team_names(self.team_a_name.clone(), self.team_b_name.clone());
        Ok(balancer)
    }
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct BalanceArg {
    /// Roster JSON file
    #[arg(long)]
    roster: PathBuf,
    #[clap(flatten)]
    balance: BalanceOptionsArg,
    /// Hex seed (32 characters) for a reproducible split
    #[arg(long)]
    seed: Option<BalanceSeed>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &BalanceArg) -> anyhow::Result<()> {
    let BalanceArg {
        roster,
        balance,
        seed,
        output,
    } = arg;

    let players = util::read_roster_file(roster)?;
    let balancer = balance.to_balancer()?;
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(%seed, "balancing teams");

    let result = balancer.balance_with_seed(&players, seed);
    let record = BalanceRecord {
        generated_at: Utc::now(),
        seed,
        options: balancer.options(),
        result: &result,
    };
    Output::save_json(&record, output.clone())?;

    eprintln!();
    eprintln!("Teams balanced");
    if let Some(path) = output {
        eprintln!("  Path: {}", path.display());
    }
    eprintln!("  Seed: {seed}");
    eprintln!("  Balance score: {}", result.balance_score());
    for team in result.teams() {
        print_team(team);
    }
    if !result.unused_players().is_empty() {
        eprintln!("  Unused players: {}", result.unused_players().len());
    }
    for warning in result.warnings() {
        eprintln!("  Warning: {warning}");
    }

    Ok(())
}

fn print_team(team: &Team) {
    eprintln!(
        "  {}: {} players ({} field, {} goalkeepers), {:.0} points, avg multiplier {:.3}",
        team.name(),
        team.len(),
        team.field_players().len(),
        team.goalkeepers().len(),
        team.total_points(),
        team.average_multiplier(),
    );
    for player in team.players() {
        eprintln!(
            "    {:<12} cat {} x{:.2} {}",
            player.name.as_deref().unwrap_or(player.id.as_str()),
            player.category,
            player.multiplier,
            player.position,
        );
    }
}
