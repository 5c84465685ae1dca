use clap::{Parser, Subcommand};

use self::{balance::BalanceArg, generate_roster::GenerateRosterArg, simulate::SimulateArg};

mod balance;
mod generate_roster;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Split a roster into two balanced teams
    Balance(#[clap(flatten)] BalanceArg),
    /// Balance a roster under many seeds and summarize the scores
    Simulate(#[clap(flatten)] SimulateArg),
    /// Generate a synthetic roster for trying out the balancer
    GenerateRoster(#[clap(flatten)] GenerateRosterArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    crate::logging::init(args.verbose);
    match args.mode {
        Mode::Balance(arg) => balance::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
        Mode::GenerateRoster(arg) => generate_roster::run(&arg)?,
    }
    Ok(())
}
