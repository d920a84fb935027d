use std::fmt;

/// Number of columns and rows on the board.
pub const SIDE: i8 = 7;
/// Number of squares on the board.
pub const NUM_SQUARES: usize = (SIDE as usize) * (SIDE as usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
        }
    }
    pub fn to_char(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Blue => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Blue => write!(f, "Blue"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Blocked,
    Piece(Color),
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Blocked => 'X',
            Cell::Piece(c) => c.to_char(),
        }
    }
}

/// Final result of a decided game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win(Color),
    Draw,
}

/// A move: either a piece transition or a pass.
///
/// A `Play` at Chebyshev distance 1 is an extend (a new piece is placed),
/// distance 2 is a jump (the piece leaves its source).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Pass,
    Play { from: u8, to: u8 },
}

impl Move {
    pub fn new(from: u8, to: u8) -> Self {
        Move::Play { from, to }
    }

    pub fn is_pass(self) -> bool {
        matches!(self, Move::Pass)
    }

    /// Chebyshev distance between source and destination (0 for a pass).
    pub fn distance(self) -> i8 {
        match self {
            Move::Pass => 0,
            Move::Play { from, to } => {
                let dc = (col_of(from) - col_of(to)).abs();
                let dr = (row_of(from) - row_of(to)).abs();
                dc.max(dr)
            }
        }
    }

    pub fn is_extend(self) -> bool {
        self.distance() == 1
    }

    pub fn is_jump(self) -> bool {
        self.distance() == 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Pass => write!(f, "-"),
            Move::Play { from, to } => write!(f, "{}-{}", sq_to_coord(*from), sq_to_coord(*to)),
        }
    }
}

// Helpers
pub fn col_of(sq: u8) -> i8 {
    (sq % SIDE as u8) as i8
}
pub fn row_of(sq: u8) -> i8 {
    (sq / SIDE as u8) as i8
}
pub fn sq(col: i8, row: i8) -> Option<u8> {
    if (0..SIDE).contains(&col) && (0..SIDE).contains(&row) {
        Some((row as u8) * SIDE as u8 + (col as u8))
    } else {
        None
    }
}

pub fn sq_to_coord(sq: u8) -> String {
    let c = (b'a' + (sq % SIDE as u8)) as char;
    let r = (b'1' + (sq / SIDE as u8)) as char;
    format!("{c}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let col = b[0];
    let row = b[1];
    if !(b'a'..=b'g').contains(&col) || !(b'1'..=b'7').contains(&row) {
        return None;
    }
    sq((col - b'a') as i8, (row - b'1') as i8)
}
