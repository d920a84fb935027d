use crate::{board::Board, types::*};

/// Generate all legal moves for the side to move, returning a freshly allocated vector.
///
/// Sources are scanned by column `a..g`, then row `1..7`; destinations by column
/// offset, then row offset, each ascending over `-2..=2`. Callers rely on this
/// order for tie-breaking. When nothing is legal the result is `[Move::Pass]`,
/// so the vector is never empty.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(board, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(board: &Board, out: &mut Vec<Move>) {
    out.clear();
    let side = board.side_to_move();

    for col in 0..SIDE {
        for row in 0..SIDE {
            let from = match sq(col, row) {
                Some(s) => s,
                None => continue,
            };
            if board.get(from) != Cell::Piece(side) {
                continue;
            }
            gen_targets(board, from, out);
        }
    }

    if out.is_empty() {
        out.push(Move::Pass);
    }
}

fn gen_targets(board: &Board, from: u8, out: &mut Vec<Move>) {
    let c = col_of(from);
    let r = row_of(from);
    for dc in -2..=2 {
        for dr in -2..=2 {
            if dc == 0 && dr == 0 {
                continue;
            }
            if let Some(to) = sq(c + dc, r + dr) {
                let mv = Move::new(from, to);
                if board.is_legal_move(mv) {
                    out.push(mv);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
