// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod error;
pub mod model;

pub mod filter;
pub mod load;
pub mod standings;
pub mod stats;
pub mod store;

pub mod file;
pub mod table;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;

pub use error::{Error, Result};
pub use model::{LeaderboardRow, Match, Outcome, OutcomeSource, TeamStanding};
pub use standings::{build_leaderboard, compute_points, TieBreak};
