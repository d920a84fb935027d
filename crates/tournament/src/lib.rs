//! Tournament Runner for ML-ataxx
//!
//! This crate provides infrastructure for:
//! - Running matches between Ataxx players
//! - Tracking Elo ratings across versions and depths
//! - Round robins configured from TOML, with JSON reports
//!
//! # Usage
//!
//! ```bash
//! # Minimax at depth 3 against a seeded random mover
//! cargo run -p tournament -- match minimax:3 random:7 --games 20
//!
//! # Everyone in a config file against everyone else
//! cargo run -p tournament -- run ladder.toml
//! ```

mod config;
mod elo;
mod error;
mod match_runner;
mod players;
mod results;
mod round_robin;

pub use config::*;
pub use elo::*;
pub use error::*;
pub use match_runner::*;
pub use players::*;
pub use results::*;
pub use round_robin::*;
