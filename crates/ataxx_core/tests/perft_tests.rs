use rayon::prelude::*;

use ataxx_core::{legal_moves, perft, Board};

/// Positions exercised at every depth up to the listed limit.
const CASES: &[(&str, u8)] = &[
    ("r5b/7/7/7/7/7/b5r r 0", 3),
    ("r5b/7/2X1X2/7/2X1X2/7/b5r r 0", 3),
    ("r2X2b/7/X5X/7/X5X/7/b2X2r b 0", 3),
    ("6b/7/7/3b3/2r4/3b3/7 r 0", 3),
    ("rbb4/bbb4/bbb4/7/7/7/7 r 0", 3),
    ("r5b/7/7/7/7/7/b5r r 23", 4),
];

/// Reference count that isolates every branch with a clone instead of the undo log.
fn perft_by_clone(board: &Board, depth: u8) -> u64 {
    if depth == 0 || board.winner().is_some() {
        return 1;
    }
    legal_moves(board)
        .into_iter()
        .map(|mv| {
            let mut child = board.clone();
            child.make_move(mv);
            perft_by_clone(&child, depth - 1)
        })
        .sum()
}

#[test]
fn perft_startpos_shallow() {
    let mut board = Board::new();
    assert_eq!(perft(&mut board, 0), 1);
    assert_eq!(perft(&mut board, 1), 16);
    assert_eq!(perft(&mut board, 2), 256);
    assert_eq!(board, Board::new());
}

#[test]
fn perft_undo_matches_clone_reference() {
    CASES.par_iter().for_each(|(fen, max_depth)| {
        let original = Board::from_fen(fen).expect("test FEN should parse");
        for depth in 1..=*max_depth {
            let mut board = original.clone();
            let got = perft(&mut board, depth);
            let expected = perft_by_clone(&original, depth);
            assert!(
                got == expected,
                "Perft mismatch for '{}' at depth {}: expected {}, got {}",
                fen,
                depth,
                expected,
                got
            );
            assert_eq!(board, original, "perft left '{}' modified", fen);
        }
    });
}
