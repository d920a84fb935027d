//! Minimax Ataxx Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a material evaluation.
//! This is the baseline automatic player.

mod eval;
mod search;

use std::time::Instant;

use ataxx_core::{legal_moves, Board, Move, Player, SearchResult};
use log::{debug, warn};

/// Ataxx engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - A fixed search depth (no iterative deepening)
/// - Plain material-difference evaluation
/// - Depth-adjusted win scores, so quicker wins are preferred
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    depth: u8,
    /// Node counter for the last search
    nodes: u64,
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::with_depth(MAX_DEPTH)
    }

    /// Engine searching `depth` plies, clamped into `1..=MAX_DEPTH`.
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth: depth.clamp(1, MAX_DEPTH),
            nodes: 0,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Nodes visited by the last call to [`search`](Self::search); 0 if the
    /// last move was a forced pass.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Runs the full fixed-depth search for the side to move.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        let start = Instant::now();
        let sense = Sense::for_color(board.side_to_move());
        let outcome = find_move(board, self.depth, sense);
        self.nodes = outcome.nodes;

        debug!(
            "{} searched {} nodes at depth {} in {:.3?}: {} (score {})",
            board.side_to_move(),
            outcome.nodes,
            self.depth,
            start.elapsed(),
            outcome
                .best_move
                .map_or_else(|| "no move".to_string(), |m| m.to_string()),
            outcome.score
        );

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: self.depth,
            nodes: outcome.nodes,
        }
    }
}

impl Player for MinimaxEngine {
    fn select_move(&mut self, board: &Board) -> Option<Move> {
        self.nodes = 0;
        if !board.can_move(board.side_to_move()) {
            debug!("{} cannot move, passing", board.side_to_move());
            return Some(Move::Pass);
        }

        match self.search(board).best_move {
            Some(mv) => Some(mv),
            None => {
                warn!(
                    "search recorded no move for {}, using first legal move",
                    board.to_fen()
                );
                legal_moves(board).first().copied()
            }
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::static_score;
pub use search::{find_move, SearchOutcome, SearchPosition, Sense, INFTY, MAX_DEPTH, WINNING_VALUE};
