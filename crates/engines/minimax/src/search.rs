//! Fixed-depth minimax search with alpha-beta pruning
//!
//! Red always maximizes. Both sides tighten the same `alpha` bound: the
//! maximizer raises it with `max`, the minimizer lowers it with `min`, and
//! either side stops when `alpha >= beta`. Every branch works on its own clone
//! of the position.

use ataxx_core::{legal_moves, Board, Color, Move};

use crate::eval::static_score;

/// Search depth in plies used by the engine.
pub const MAX_DEPTH: u8 = 4;

/// A score magnitude indicating a win (for Red if positive, Blue if negative).
/// The remaining depth is added on top so sooner wins score higher.
pub const WINNING_VALUE: i32 = i32::MAX - 20;

/// A magnitude greater than any score the search can produce.
pub const INFTY: i32 = i32::MAX;

/// What the search needs from a game position.
pub trait SearchPosition: Clone {
    type Move: Copy;

    /// Candidate moves in a fixed order; never empty for an undecided position.
    fn candidate_moves(&self) -> Vec<Self::Move>;
    fn is_legal(&self, mv: Self::Move) -> bool;
    fn apply(&mut self, mv: Self::Move);
    fn is_decided(&self) -> bool;
    fn static_score(&self, winning_value: i32) -> i32;
}

impl SearchPosition for Board {
    type Move = Move;

    fn candidate_moves(&self) -> Vec<Move> {
        legal_moves(self)
    }

    fn is_legal(&self, mv: Move) -> bool {
        self.is_legal_move(mv)
    }

    fn apply(&mut self, mv: Move) {
        self.make_move(mv);
    }

    fn is_decided(&self) -> bool {
        self.winner().is_some()
    }

    fn static_score(&self, winning_value: i32) -> i32 {
        static_score(self, winning_value)
    }
}

/// Whether the side to move at a node maximizes or minimizes the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sense {
    Maximize,
    Minimize,
}

impl Sense {
    pub fn for_color(color: Color) -> Sense {
        match color {
            Color::Red => Sense::Maximize,
            Color::Blue => Sense::Minimize,
        }
    }

    pub fn flip(self) -> Sense {
        match self {
            Sense::Maximize => Sense::Minimize,
            Sense::Minimize => Sense::Maximize,
        }
    }
}

/// Result of [`find_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<M> {
    /// Move recorded by the top-level call, if any
    pub best_move: Option<M>,
    pub score: i32,
    /// Number of nodes visited, root included
    pub nodes: u64,
}

/// Searches `pos` to `depth` plies and returns the best move with its score.
///
/// At depth 0, or on a decided position, the result is the static score and
/// no move is recorded.
pub fn find_move<P: SearchPosition>(pos: &P, depth: u8, sense: Sense) -> SearchOutcome<P::Move> {
    let mut searcher = Searcher {
        found: None,
        nodes: 0,
    };
    let score = searcher.min_max(pos, depth, true, sense, -INFTY, INFTY);
    SearchOutcome {
        best_move: searcher.found,
        score,
        nodes: searcher.nodes,
    }
}

struct Searcher<M> {
    found: Option<M>,
    nodes: u64,
}

impl<M: Copy> Searcher<M> {
    /// Returns the value of `pos`, recording the best move iff `save_move`.
    ///
    /// A cutoff stops the scan early; the move that caused it is still
    /// recorded at the top level.
    fn min_max<P: SearchPosition<Move = M>>(
        &mut self,
        pos: &P,
        depth: u8,
        save_move: bool,
        sense: Sense,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 || pos.is_decided() {
            return pos.static_score(WINNING_VALUE + depth as i32);
        }

        let mut best = None;
        let mut best_score = match sense {
            Sense::Maximize => -INFTY,
            Sense::Minimize => INFTY,
        };

        for mv in pos.candidate_moves() {
            let mut child = pos.clone();
            if !child.is_legal(mv) {
                continue;
            }
            child.apply(mv);

            let response = self.min_max(&child, depth - 1, false, sense.flip(), alpha, beta);
            let improved = match sense {
                Sense::Maximize => response > best_score,
                Sense::Minimize => response < best_score,
            };
            if improved {
                best_score = response;
                best = Some(mv);
                alpha = match sense {
                    Sense::Maximize => alpha.max(best_score),
                    Sense::Minimize => alpha.min(best_score),
                };
                if alpha >= beta {
                    break;
                }
            }
        }

        if save_move {
            self.found = best;
        }
        best_score
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
