//! The balancing pipeline and its inputs and outputs.
//!
//! - [`TeamBalancer`] - entry point running the whole pipeline
//! - [`BalanceOptions`] / [`BalanceMethod`] - per-request tuning
//! - [`BalanceSeed`] - seed for reproducible runs
//! - [`TeamBalanceResult`] - the two teams, their score, and leftovers
//! - [`BalanceWarning`] - non-fatal advisories attached to a result
//! - [`score_balance`] - the 0-100 fitness of a pair of team totals
//!
//! # Flow
//!
//! 1. Partition active players into category buckets, goalkeepers aside
//! 2. Distribute field players pairwise, strongest category first
//! 3. Allocate goalkeepers to the currently weaker team
//! 4. Recompute totals, score, and collect unassigned players
//!
//! Every random decision (category shuffles, odd-player placement, tie
//! breaks between equally rated borrow candidates) is drawn from the
//! generator passed to [`TeamBalancer::balance_with_rng`], so a fixed
//! [`BalanceSeed`] reproduces a run exactly.

pub use self::{balancer::*, options::*, result::*, scoring::*, seed::*, warning::*};

mod balancer;
mod distribute;
mod goalkeeper;
mod options;
mod partition;
mod result;
mod scoring;
mod seed;
mod team_pair;
mod warning;
