//! Error types for notation parsing and rule enforcement.

use thiserror::Error;

use crate::types::Move;

/// Failure to read a square, move or position from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),
    #[error("invalid move: {0:?}")]
    InvalidMove(String),
    #[error("invalid position text: {0}")]
    InvalidFen(String),
}

/// A request the rules do not allow on the current board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("illegal move: {0}")]
    IllegalMove(Move),
    #[error("game is already over")]
    GameOver,
    #[error("cannot block {0}: square is occupied")]
    BlockOccupied(String),
    #[error("blocks can only be placed before the first move")]
    GameStarted,
}
