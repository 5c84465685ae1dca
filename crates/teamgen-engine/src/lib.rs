//! Two-team balancing engine.
//!
//! Partitions a roster of players into two teams whose combined skill is as
//! close as the heuristic can get. The crate is split into:
//!
//! - [`core`] - the data model ([`Player`], [`Position`], [`Team`], [`TeamId`])
//! - [`engine`] - the balancing pipeline ([`TeamBalancer`]), its options,
//!   seeds, warnings, and the [`TeamBalanceResult`]
//!
//! # Example
//!
//! ```
//! use teamgen_engine::{BalanceOptions, BalanceSeed, Player, Position, TeamBalancer};
//!
//! let players = vec![
//!     Player::new("ana", 1, 1.0, Position::Forward),
//!     Player::new("bia", 1, 1.1, Position::Defender),
//!     Player::new("caio", 2, 1.4, Position::ForwardDefender),
//!     Player::new("duda", 2, 1.6, Position::Defender),
//!     Player::new("edu", 3, 2.0, Position::Goalkeeper),
//! ];
//!
//! let balancer = TeamBalancer::new(BalanceOptions::default());
//! let result = balancer.balance_with_seed(&players, BalanceSeed::from_bytes([7; 16]));
//!
//! assert_eq!(result.assigned_count(), players.len());
//! assert!(result.unused_players().is_empty());
//! assert!(result.balance_score() <= 100);
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
