//! Core data model shared by every balancing stage.
//!
//! - [`Player`] - an input roster entry (read-only to the engine)
//! - [`Position`] - field role or goalkeeper
//! - [`Team`] - an output accumulator filled by the pipeline
//! - [`TeamId`] - the fixed identity of one of the two teams

pub use self::{player::*, team::*};

mod player;
mod team;
