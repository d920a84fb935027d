//! Random Move Ataxx Player
//!
//! Selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Smoke-testing the game loop and tournament runner
//! - Baseline comparisons (the minimax engine should easily beat this)
//! - Stress testing move generation with long random playouts

use ataxx_core::{legal_moves_into, Board, Move, Player};
use log::trace;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A player that picks a random legal move.
///
/// The generator is seeded explicitly, so a game between two seeded random
/// players can be replayed move for move.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    seed: u64,
    moves: Vec<Move>,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    /// Player seeded from the operating system.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            moves: Vec::with_capacity(64),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Player for RandomEngine {
    fn select_move(&mut self, board: &Board) -> Option<Move> {
        if board.winner().is_some() {
            return None;
        }
        legal_moves_into(board, &mut self.moves);
        let mv = self.moves.choose(&mut self.rng).copied();
        trace!("random pick among {} moves: {:?}", self.moves.len(), mv);
        mv
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    /// Restarts the generator so every game with the same seed replays.
    fn new_game(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}
