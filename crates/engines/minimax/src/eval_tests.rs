use super::*;

const W: i32 = 1_000;

/// Same position with the two colours (and the side to move) exchanged.
fn swap_colors(board: &Board) -> Board {
    let swapped: String = board
        .to_fen()
        .chars()
        .map(|c| match c {
            'r' => 'b',
            'b' => 'r',
            other => other,
        })
        .collect();
    Board::from_fen(&swapped).unwrap()
}

#[test]
fn test_material_difference() {
    assert_eq!(static_score(&Board::new(), W), 0);

    let board = Board::from_fen("6b/7/7/3r3/2r4/3r3/b6 r 0").unwrap();
    assert_eq!(static_score(&board, W), 1);
}

#[test]
fn test_decided_scores() {
    let red_won = Board::from_fen("7/7/7/7/7/7/r6 b 0").unwrap();
    assert_eq!(static_score(&red_won, W), W);

    let blue_won = Board::from_fen("7/7/7/7/7/7/b6 r 0").unwrap();
    assert_eq!(static_score(&blue_won, W), -W);

    let drawn =
        Board::from_fen("rrrrrrr/rrrrrrr/rrrrrrr/rrrXbbb/bbbbbbb/bbbbbbb/bbbbbbb b 0").unwrap();
    assert_eq!(static_score(&drawn, W), 0);
}

#[test]
fn test_antisymmetric_under_color_swap() {
    let fens = [
        "r5b/7/7/7/7/7/b5r r 0",
        "6b/7/7/3r3/2r4/3r3/b6 r 0",
        "rbb4/bbb4/bbb4/7/7/7/7 r 0",
        "7/7/7/7/7/7/r6 b 0",
        "rrrrrrr/rrrrrrr/rrrrrrr/rrrrbbb/bbbbbbb/bbbbbbb/bbbbbbb r 0",
        "rrrrrrr/rrrrrrr/rrrrrrr/rrrXbbb/bbbbbbb/bbbbbbb/bbbbbbb b 0",
    ];
    for fen in fens {
        let board = Board::from_fen(fen).unwrap();
        let swapped = swap_colors(&board);
        assert_eq!(
            static_score(&board, W),
            -static_score(&swapped, W),
            "not antisymmetric for {fen}"
        );
    }
}
