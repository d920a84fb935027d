pub mod board;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Player trait: implemented by everything that chooses moves (engines, humans)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move (None if the search recorded nothing)
    pub best_move: Option<Move>,
    /// Score with Red as the maximizing side
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes visited (optional, for stats)
    pub nodes: u64,
}

/// Trait for anything that can pick a move in a position.
///
/// This allows swapping between the minimax engine, the random baseline and
/// a human typing moves, without the game loop knowing which is which.
pub trait Player {
    /// Choose a move for the side to move on `board`.
    ///
    /// Returns `None` when the player resigns or its input is exhausted.
    /// Automatic players return `Move::Pass` when they cannot move.
    fn select_move(&mut self, board: &Board) -> Option<Move>;

    /// Returns the player's display name
    fn name(&self) -> &str;

    /// True for players that compute their own moves
    fn is_auto(&self) -> bool {
        true
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
