use crate::{board::Board, movegen::legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts all positions reachable from the current one down to `depth`.
/// Decided positions are leaves.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    fn inner(board: &mut Board, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 || board.winner().is_some() {
            return 1;
        }

        let (buf, rest) = match layers.split_first_mut() {
            Some(split) => split,
            None => return 1,
        };

        legal_moves_into(board, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let undo = board.make_move(mv);
            nodes += inner(board, depth - 1, rest);
            board.unmake_move(mv, undo);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(board, depth, &mut layers[..])
}
