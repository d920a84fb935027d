//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::TournamentConfig;
use crate::elo::MatchResult;
use crate::error::Result;

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    pub name: String,
    /// Participant labels, in config order
    pub participants: Vec<String>,
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: TournamentConfig,
}

/// A single pairing and its result from `player1`'s side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub player1: String,
    pub player2: String,
    pub result: MatchResult,
}

/// Points tally of one participant across the tournament
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub player: String,
    pub points: f64,
    pub games: u32,
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: TournamentConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    pub fn add_match(&mut self, player1: &str, player2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            player1: player1.to_string(),
            player2: player2.to_string(),
            result,
        });
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Points per participant (1 per win, 0.5 per draw), best first. Ties keep
    /// participant order.
    pub fn standings(&self) -> Vec<Standing> {
        let mut table: Vec<Standing> = self
            .participants
            .iter()
            .map(|p| Standing {
                player: p.clone(),
                points: 0.0,
                games: 0,
            })
            .collect();

        for entry in &self.matches {
            for (name, result) in [
                (&entry.player1, entry.result.clone()),
                (&entry.player2, entry.result.flipped()),
            ] {
                if let Some(row) = table.iter_mut().find(|s| &s.player == name) {
                    row.points += result.wins as f64 + 0.5 * result.draws as f64;
                    row.games += result.total_games();
                }
            }
        }

        table.sort_by(|a, b| b.points.total_cmp(&a.points));
        table
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} games/match, depth {}, {} moves max",
            self.config.games_per_match, self.config.search_depth, self.config.max_moves_per_game
        ));
        if !self.config.blocks.is_empty() {
            report.push_str(&format!(", blocks {}", self.config.blocks.join(" ")));
        }
        report.push_str("\n\n");

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<16} vs {:<16} {:>5}-{:<5}-{:<5}\n",
            "Player 1", "Player 2", "W", "L", "D"
        ));
        report.push_str(&"-".repeat(56));
        report.push('\n');
        for entry in &self.matches {
            report.push_str(&format!(
                "{:<16} vs {:<16} {:>5}-{:<5}-{:<5}\n",
                entry.player1,
                entry.player2,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws
            ));
        }

        report.push_str("\nStandings:\n");
        for (rank, s) in self.standings().iter().enumerate() {
            report.push_str(&format!(
                "{:>2}. {:<16} {:>6.1} / {}\n",
                rank + 1,
                s.player,
                s.points,
                s.games
            ));
        }

        report
    }
}
