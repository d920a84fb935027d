//! Elo rating calculation and tracking

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Result;

/// Starting Elo for a player the tracker has not seen
pub const DEFAULT_ELO: f64 = 1500.0;

/// K-factor for Elo updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// Outcome of one game from a given player's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the opponent's side.
    pub fn flip(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Win/loss/draw tally of a match, from the first player's perspective
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: GameResult) {
        match game {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Fraction of points scored: 1 per win, 0.5 per draw. An empty match
    /// counts as even.
    pub fn score(&self) -> f64 {
        match self.total_games() {
            0 => 0.5,
            n => (self.wins as f64 + 0.5 * self.draws as f64) / n as f64,
        }
    }

    /// The tally from the second player's perspective.
    pub fn flipped(&self) -> Self {
        Self {
            wins: self.losses,
            losses: self.wins,
            draws: self.draws,
        }
    }
}

/// Rating and game count of one player
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlayerRating {
    pub rating: f64,
    pub games: u32,
}

impl Default for PlayerRating {
    fn default() -> Self {
        Self {
            rating: DEFAULT_ELO,
            games: 0,
        }
    }
}

/// One rated match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub player1: String,
    pub player2: String,
    pub result: MatchResult,
    /// Seconds since the Unix epoch
    pub timestamp: u64,
    /// Rating points moved from player2 to player1 (negative if player1 lost points)
    pub elo_change: f64,
}

/// Persistent Elo ledger, keyed by player label (e.g. `minimax:3`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EloTracker {
    pub players: BTreeMap<String, PlayerRating>,
    pub history: Vec<MatchRecord>,
}

impl EloTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a ledger written by [`save`](Self::save).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Reads the ledger at `path`, or starts a fresh one if there is none.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Current rating, `DEFAULT_ELO` for unknown players.
    pub fn rating(&self, player: &str) -> f64 {
        self.players
            .get(player)
            .map_or(DEFAULT_ELO, |p| p.rating)
    }

    /// Expected score of `player1` against `player2`
    pub fn expected_score(&self, player1: &str, player2: &str) -> f64 {
        let diff = self.rating(player2) - self.rating(player1);
        1.0 / (1.0 + 10.0_f64.powf(diff / 400.0))
    }

    /// Moves rating points between the two players according to `result`
    /// and returns the change applied to `player1`.
    pub fn update_ratings(&mut self, player1: &str, player2: &str, result: &MatchResult) -> f64 {
        let expected = self.expected_score(player1, player2);
        let games = result.total_games();
        let elo_change = K_FACTOR * games as f64 * (result.score() - expected);

        for (name, delta) in [(player1, elo_change), (player2, -elo_change)] {
            let entry = self.players.entry(name.to_string()).or_default();
            entry.rating += delta;
            entry.games += games;
        }

        self.history.push(MatchRecord {
            player1: player1.to_string(),
            player2: player2.to_string(),
            result: result.clone(),
            timestamp: unix_timestamp(),
            elo_change,
        });
        elo_change
    }

    /// Players sorted by rating, best first
    pub fn leaderboard(&self) -> Vec<(&str, PlayerRating)> {
        let mut entries: Vec<_> = self
            .players
            .iter()
            .map(|(name, p)| (name.as_str(), *p))
            .collect();
        entries.sort_by(|a, b| b.1.rating.total_cmp(&a.1.rating));
        entries
    }

    pub fn format_leaderboard(&self) -> String {
        let mut out = String::from("=== Leaderboard ===\n");
        out.push_str(&format!("{:<24} {:>8} {:>8}\n", "Player", "Elo", "Games"));
        out.push_str(&"-".repeat(42));
        out.push('\n');
        for (name, p) in self.leaderboard() {
            out.push_str(&format!("{:<24} {:>8.1} {:>8}\n", name, p.rating, p.games));
        }
        out
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
