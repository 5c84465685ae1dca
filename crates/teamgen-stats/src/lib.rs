//! Statistical helpers shared by the teamgen crates.
//!
//! The balance scorer measures how far two team totals are spread around
//! their mean, and the simulation tooling summarizes balance scores across
//! many seeded runs. Both go through [`descriptive::DescriptiveStats`].
//!
//! # Examples
//!
//! ```
//! use teamgen_stats::descriptive::DescriptiveStats;
//!
//! let totals = [420.0, 380.0];
//! let stats = DescriptiveStats::new(totals).unwrap();
//! assert_eq!(stats.mean, 400.0);
//! assert_eq!(stats.variance, 400.0);
//! ```

pub mod descriptive;
