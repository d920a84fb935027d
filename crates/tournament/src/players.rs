//! Player specifications such as `minimax:3` or `random:42`

use std::fmt;
use std::str::FromStr;

use ataxx_core::Player;
use minimax_engine::{MinimaxEngine, MAX_DEPTH};
use random_engine::RandomEngine;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::TournamentError;

/// Which automatic player to build and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlayerSpec {
    /// Minimax search; `None` uses the match's default depth
    Minimax { depth: Option<u8> },
    /// Random mover; `None` draws a seed from the match generator
    Random { seed: Option<u64> },
}

impl PlayerSpec {
    /// Builds the player. `rng` supplies seeds for unseeded random players.
    pub fn build(&self, default_depth: u8, rng: &mut StdRng) -> Box<dyn Player> {
        match *self {
            PlayerSpec::Minimax { depth } => {
                Box::new(MinimaxEngine::with_depth(depth.unwrap_or(default_depth)))
            }
            PlayerSpec::Random { seed } => {
                Box::new(RandomEngine::with_seed(seed.unwrap_or_else(|| rng.gen())))
            }
        }
    }
}

impl FromStr for PlayerSpec {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || TournamentError::UnknownEngine(s.to_string());
        let (kind, arg) = match s.trim().split_once(':') {
            Some((kind, arg)) => (kind, Some(arg)),
            None => (s.trim(), None),
        };

        match kind.to_lowercase().as_str() {
            "minimax" | "ai" => {
                let depth = arg
                    .map(|a| a.parse::<u8>().map_err(|_| unknown()))
                    .transpose()?;
                if depth.is_some_and(|d| d == 0 || d > MAX_DEPTH) {
                    return Err(unknown());
                }
                Ok(PlayerSpec::Minimax { depth })
            }
            "random" => {
                let seed = arg
                    .map(|a| a.parse::<u64>().map_err(|_| unknown()))
                    .transpose()?;
                Ok(PlayerSpec::Random { seed })
            }
            _ => Err(unknown()),
        }
    }
}

impl TryFrom<String> for PlayerSpec {
    type Error = TournamentError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PlayerSpec> for String {
    fn from(spec: PlayerSpec) -> String {
        spec.to_string()
    }
}

impl fmt::Display for PlayerSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlayerSpec::Minimax { depth: Some(d) } => write!(f, "minimax:{d}"),
            PlayerSpec::Minimax { depth: None } => write!(f, "minimax"),
            PlayerSpec::Random { seed: Some(s) } => write!(f, "random:{s}"),
            PlayerSpec::Random { seed: None } => write!(f, "random"),
        }
    }
}
