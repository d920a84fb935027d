//! Whole-game rule checks
//!
//! - Games always terminate
//! - Decided positions agree with piece counts
//! - Forced passes hand the turn over

use ataxx_core::{legal_moves, Board, Color, Move, Outcome, JUMP_LIMIT};

fn playout(mut board: Board, pick: impl Fn(&[Move]) -> Move) -> Board {
    for _ in 0..2_000 {
        if board.winner().is_some() {
            break;
        }
        let moves = legal_moves(&board);
        let mv = pick(&moves);
        board.play(mv).expect("enumerated move should be legal");
    }
    board
}

fn assert_consistent(board: &Board) {
    let outcome = board.winner().expect("playout should finish the game");
    let (red, blue) = (board.red_pieces(), board.blue_pieces());
    match outcome {
        Outcome::Win(Color::Red) => assert!(red > blue, "Red won with {red} vs {blue}"),
        Outcome::Win(Color::Blue) => assert!(blue > red, "Blue won with {blue} vs {red}"),
        Outcome::Draw => assert_eq!(red, blue),
    }
}

#[test]
fn first_move_playout_terminates() {
    let board = playout(Board::new(), |moves| moves[0]);
    assert_consistent(&board);
}

#[test]
fn last_move_playout_terminates() {
    let board = playout(Board::new(), |moves| moves[moves.len() - 1]);
    assert_consistent(&board);
}

#[test]
fn extend_only_playout_fills_board() {
    // Prefer extends so the jump limit never triggers
    let board = playout(Board::new(), |moves| {
        moves
            .iter()
            .copied()
            .find(|m| m.is_extend())
            .unwrap_or(moves[0])
    });
    assert_consistent(&board);
    assert!(board.jumps() < JUMP_LIMIT);
}

#[test]
fn forced_pass_hands_over_turn() {
    let mut board = Board::from_fen("rbb4/bbb4/bbb4/7/7/7/7 r 0").unwrap();
    assert_eq!(legal_moves(&board), vec![Move::Pass]);
    board.play(Move::Pass).unwrap();
    assert_eq!(board.side_to_move(), Color::Blue);
    assert!(legal_moves(&board).iter().all(|m| !m.is_pass()));
}
