use std::path::PathBuf;

use rand::{Rng, seq::IndexedRandom as _};
use rand_distr::{Distribution as _, Normal};
use teamgen_engine::{BalanceSeed, Player, Position};

use crate::{schema::roster::RosterFile, util::Output};

const CATEGORIES: [u8; 3] = [1, 2, 3];
const FIELD_POSITIONS: [Position; 3] = [
    Position::Forward,
    Position::Defender,
    Position::ForwardDefender,
];
const MULTIPLIER_STD_DEV: f64 = 0.08;
const MIN_MULTIPLIER: f64 = 0.5;

/// Typical multiplier of a player in `category`.
fn category_mean(category: u8) -> f64 {
    0.7 + 0.3 * f64::from(category)
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GenerateRosterArg {
    /// Number of active field players
    #[arg(long, default_value_t = 14)]
    players: usize,
    /// Number of active goalkeepers
    #[arg(long, default_value_t = 2)]
    goalkeepers: usize,
    /// Number of additional inactive players
    #[arg(long, default_value_t = 0)]
    inactive: usize,
    /// Hex seed (32 characters) for a reproducible roster
    #[arg(long)]
    seed: Option<BalanceSeed>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateRosterArg) -> anyhow::Result<()> {
    let GenerateRosterArg {
        players,
        goalkeepers,
        inactive,
        seed,
        output,
    } = arg;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = seed.rng();
    tracing::info!(%seed, players, goalkeepers, inactive, "generating roster");

    let total = players + goalkeepers + inactive;
    let roster = (0..total)
        .map(|i| -> anyhow::Result<Player> {
            let position = if i < *players || i >= players + goalkeepers {
                *FIELD_POSITIONS.choose(&mut rng).unwrap_or(&Position::Forward)
            } else {
                Position::Goalkeeper
            };
            let player = random_player(i + 1, position, &mut rng)?;
            Ok(player.with_active(i < players + goalkeepers))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Output::save_json(&RosterFile::Wrapped { players: roster }, output.clone())?;

    eprintln!();
    eprintln!("Roster generated");
    if let Some(path) = output {
        eprintln!("  Path: {}", path.display());
    }
    eprintln!("  Seed: {seed}");
    eprintln!("  Field players: {players}");
    eprintln!("  Goalkeepers: {goalkeepers}");
    eprintln!("  Inactive: {inactive}");

    Ok(())
}

fn random_player<R>(number: usize, position: Position, rng: &mut R) -> anyhow::Result<Player>
where
    R: Rng + ?Sized,
{
    let category = *CATEGORIES.choose(rng).unwrap_or(&1);
    let normal = Normal::new(category_mean(category), MULTIPLIER_STD_DEV)?;
    let multiplier = normal.sample(rng).max(MIN_MULTIPLIER);
    // Two decimals, like ratings entered by hand
    let multiplier = (multiplier * 100.0).round() / 100.0;
    Ok(
        Player::new(format!("p{number:02}"), category, multiplier, position)
            .with_name(format!("Player {number:02}")),
    )
}
