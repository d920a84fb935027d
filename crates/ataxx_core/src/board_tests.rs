use super::*;
use crate::movegen::legal_moves;
use crate::notation::parse_move;

fn mv(text: &str) -> Move {
    parse_move(text).unwrap()
}

fn square(text: &str) -> u8 {
    coord_to_sq(text).unwrap()
}

#[test]
fn test_start_position() {
    let board = Board::new();
    assert_eq!(board.side_to_move(), Color::Red);
    assert_eq!(board.red_pieces(), 2);
    assert_eq!(board.blue_pieces(), 2);
    assert_eq!(board.get(square("a7")), Cell::Piece(Color::Red));
    assert_eq!(board.get(square("g1")), Cell::Piece(Color::Red));
    assert_eq!(board.get(square("a1")), Cell::Piece(Color::Blue));
    assert_eq!(board.get(square("g7")), Cell::Piece(Color::Blue));
    assert_eq!(board.winner(), None);
}

#[test]
fn test_extend_adds_piece() {
    let mut board = Board::new();
    board.play(mv("a7-b6")).unwrap();
    assert_eq!(board.red_pieces(), 3);
    assert_eq!(board.get(square("a7")), Cell::Piece(Color::Red));
    assert_eq!(board.get(square("b6")), Cell::Piece(Color::Red));
    assert_eq!(board.side_to_move(), Color::Blue);
    assert_eq!(board.jumps(), 0);
}

#[test]
fn test_extend_flips_neighbours() {
    let mut board = Board::from_fen("6b/7/7/3b3/2r4/3b3/7 r 0").unwrap();
    board.play(mv("c3-d3")).unwrap();
    assert_eq!(board.red_pieces(), 4);
    assert_eq!(board.blue_pieces(), 1);
    assert_eq!(board.get(square("d4")), Cell::Piece(Color::Red));
    assert_eq!(board.get(square("d2")), Cell::Piece(Color::Red));
    assert_eq!(board.get(square("g7")), Cell::Piece(Color::Blue));
}

#[test]
fn test_jump_vacates_source_and_counts() {
    let mut board = Board::new();
    board.play(mv("a7-c5")).unwrap();
    assert_eq!(board.get(square("a7")), Cell::Empty);
    assert_eq!(board.get(square("c5")), Cell::Piece(Color::Red));
    assert_eq!(board.red_pieces(), 2);
    assert_eq!(board.jumps(), 1);

    board.play(mv("a1-c3")).unwrap();
    assert_eq!(board.jumps(), 2);

    board.play(mv("g1-f2")).unwrap();
    assert_eq!(board.jumps(), 0);
}

#[test]
fn test_illegal_moves_rejected() {
    let mut board = Board::new();
    // Opponent's piece
    assert!(!board.is_legal_move(mv("a1-a2")));
    // Too far
    assert!(!board.is_legal_move(mv("a7-d7")));
    // Occupied destination
    board.play(mv("a7-a6")).unwrap();
    board.play(mv("a1-a2")).unwrap();
    assert!(!board.is_legal_move(mv("a7-a6")));
    // Pass while moves exist
    assert!(!board.is_legal_move(Move::Pass));
    assert!(board.play(mv("a6-a4")).is_ok());
    assert_eq!(
        board.play(mv("g7-d7")).map(|_| ()),
        Err(BoardError::IllegalMove(mv("g7-d7")))
    );
}

#[test]
fn test_pass_only_when_blocked() {
    let mut board = Board::from_fen("rbb4/bbb4/bbb4/7/7/7/7 r 0").unwrap();
    assert!(!board.can_move(Color::Red));
    assert!(board.can_move(Color::Blue));
    assert_eq!(board.winner(), None);
    assert!(board.is_legal_move(Move::Pass));

    board.play(Move::Pass).unwrap();
    assert_eq!(board.side_to_move(), Color::Blue);
    assert_eq!(board.red_pieces(), 1);
}

#[test]
fn test_capturing_everything_wins() {
    let mut board = Board::from_fen("7/7/7/7/7/1b5/r6 r 0").unwrap();
    board.play(mv("a1-a2")).unwrap();
    assert_eq!(board.blue_pieces(), 0);
    assert_eq!(board.winner(), Some(Outcome::Win(Color::Red)));
    assert!(!board.is_legal_move(mv("a2-a3")));
    assert_eq!(board.play(mv("a2-a3")).map(|_| ()), Err(BoardError::GameOver));
}

#[test]
fn test_full_board_decided_by_count() {
    let board =
        Board::from_fen("rrrrrrr/rrrrrrr/rrrrrrr/rrrrbbb/bbbbbbb/bbbbbbb/bbbbbbb r 0").unwrap();
    assert_eq!(board.red_pieces(), 25);
    assert_eq!(board.winner(), Some(Outcome::Win(Color::Red)));

    let drawn =
        Board::from_fen("rrrrrrr/rrrrrrr/rrrrrrr/rrrXbbb/bbbbbbb/bbbbbbb/bbbbbbb b 0").unwrap();
    assert_eq!(drawn.winner(), Some(Outcome::Draw));
}

#[test]
fn test_jump_limit_ends_game() {
    let mut board = Board::from_fen("r5b/7/7/7/7/7/b5r r 24").unwrap();
    assert_eq!(board.winner(), None);
    board.play(mv("a7-c5")).unwrap();
    assert_eq!(board.jumps(), JUMP_LIMIT);
    assert_eq!(board.winner(), Some(Outcome::Draw));
}

#[test]
fn test_make_unmake_restores_position() {
    let positions = [
        Board::new(),
        Board::from_fen("6b/7/7/3b3/2r4/3b3/7 r 0").unwrap(),
        Board::from_fen("rbb4/bbb4/bbb4/7/7/7/7 r 0").unwrap(),
        Board::from_fen("r5b/7/7/7/7/7/b5r r 24").unwrap(),
    ];
    for original in positions {
        let mut board = original.clone();
        for m in legal_moves(&original) {
            let undo = board.make_move(m);
            board.unmake_move(m, undo);
            assert_eq!(board, original, "unmake of {m} did not restore {}", original.to_fen());
        }
    }
}

#[test]
fn test_block_reflects_four_ways() {
    let mut board = Board::new();
    board.set_block(square("c3")).unwrap();
    for s in ["c3", "e3", "c5", "e5"] {
        assert_eq!(board.get(square(s)), Cell::Blocked, "{s} should be blocked");
    }
    assert_eq!(board.get(square("d4")), Cell::Empty);

    board.set_block(square("d4")).unwrap();
    assert_eq!(board.get(square("d4")), Cell::Blocked);
}

#[test]
fn test_block_rejections() {
    let mut board = Board::new();
    assert_eq!(
        board.set_block(square("a1")),
        Err(BoardError::BlockOccupied("a1".to_string()))
    );
    // b7 reflects onto f7, b1 and f1, all empty at the start
    assert_eq!(board.set_block(square("b7")), Ok(()));

    board.play(mv("a7-a6")).unwrap();
    assert_eq!(board.set_block(square("c3")), Err(BoardError::GameStarted));
}

#[test]
fn test_get_off_board_reads_blocked() {
    let board = Board::new();
    assert_eq!(board.get(NUM_SQUARES as u8), Cell::Blocked);
    assert_eq!(board.get(u8::MAX), Cell::Blocked);
    assert_eq!(board.get(square("g7")), Cell::Piece(Color::Blue));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "no move to take back")]
fn test_unmake_on_fresh_board_panics() {
    let mut board = Board::new();
    let undo = Undo {
        flipped: 0,
        jumps: 0,
        winner: None,
    };
    board.unmake_move(mv("a7-b6"), undo);
}
