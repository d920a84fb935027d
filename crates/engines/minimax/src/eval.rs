//! Material-based position evaluation.

use ataxx_core::{Board, Color, Outcome};

/// Scores the position with Red as the maximizing side.
///
/// Decided games score `+winning_value` for a Red win, `-winning_value` for a
/// Blue win and 0 for a draw. Otherwise the score is Red's piece count minus
/// Blue's.
pub fn static_score(board: &Board, winning_value: i32) -> i32 {
    match board.winner() {
        Some(Outcome::Win(Color::Red)) => winning_value,
        Some(Outcome::Win(Color::Blue)) => -winning_value,
        Some(Outcome::Draw) => 0,
        None => board.red_pieces() as i32 - board.blue_pieces() as i32,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
