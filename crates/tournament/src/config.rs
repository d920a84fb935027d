//! Tournament configuration, read from TOML
//!
//! ```toml
//! name = "depth ladder"
//! participants = ["minimax:1", "minimax:2", "random:7"]
//! games_per_match = 4
//! search_depth = 2
//! max_moves_per_game = 200
//! blocks = ["c5", "d4"]
//! seed = 1
//! elo_file = "tournament_elo.json"
//! results_file = "results.json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TournamentError};
use crate::match_runner::MatchConfig;
use crate::players::PlayerSpec;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TournamentConfig {
    pub name: String,
    pub participants: Vec<PlayerSpec>,
    pub games_per_match: u32,
    /// Depth for `minimax` participants that do not name one
    pub search_depth: u8,
    pub max_moves_per_game: u32,
    /// Squares blocked (with their reflections) before every game
    pub blocks: Vec<String>,
    /// Start position text; the standard start when absent
    pub start_fen: Option<String>,
    /// Seed for unseeded random participants
    pub seed: u64,
    pub elo_file: PathBuf,
    pub results_file: Option<PathBuf>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            name: "Round robin".to_string(),
            participants: Vec::new(),
            games_per_match: 10,
            search_depth: 4,
            max_moves_per_game: 200,
            blocks: Vec::new(),
            start_fen: None,
            seed: 0,
            elo_file: PathBuf::from("tournament_elo.json"),
            results_file: None,
        }
    }
}

impl TournamentConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        if config.participants.len() < 2 {
            return Err(TournamentError::TooFewParticipants(config.participants.len()));
        }
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Settings for each pairing of the round robin.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            num_games: self.games_per_match,
            depth: self.search_depth,
            max_moves: self.max_moves_per_game,
            blocks: self.blocks.clone(),
            start_fen: self.start_fen.clone(),
            seed: self.seed,
            verbose: false,
            ..Default::default()
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
