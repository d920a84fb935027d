use std::io;

use ataxx_core::{BoardError, ParseError};
use thiserror::Error;

/// Errors raised while configuring or running a tournament.
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("unknown engine spec {0:?} (expected minimax[:depth] or random[:seed])")]
    UnknownEngine(String),

    #[error("bad start position: {0}")]
    Position(#[from] ParseError),

    #[error("bad start position: {0}")]
    Board(#[from] BoardError),

    #[error("tournament needs at least two participants, got {0}")]
    TooFewParticipants(usize),
}

pub type Result<T> = std::result::Result<T, TournamentError>;
