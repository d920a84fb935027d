use crate::error::BoardError;
use crate::types::*;

/// Consecutive jumps (no extend in between) after which the game ends.
pub const JUMP_LIMIT: u32 = 25;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; NUM_SQUARES],
    side_to_move: Color,
    jumps: u32,
    moves_played: u32,
    winner: Option<Outcome>,
}

/// State needed to take back a move applied with [`Board::make_move`].
#[derive(Clone, Debug)]
pub struct Undo {
    /// Bitmask of squares whose piece changed colour.
    pub flipped: u64,
    pub jumps: u32,
    pub winner: Option<Outcome>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard start: Red on a7 and g1, Blue on a1 and g7, Red to move.
    pub fn new() -> Self {
        let mut cells = [Cell::Empty; NUM_SQUARES];
        for (col, row, color) in [
            (0, 6, Color::Red),
            (6, 0, Color::Red),
            (0, 0, Color::Blue),
            (6, 6, Color::Blue),
        ] {
            if let Some(s) = sq(col, row) {
                cells[s as usize] = Cell::Piece(color);
            }
        }
        Self::from_parts(cells, Color::Red, 0)
    }

    /// Builds a board from raw cells and settles the game-over state.
    pub(crate) fn from_parts(cells: [Cell; NUM_SQUARES], side_to_move: Color, jumps: u32) -> Self {
        let mut b = Board {
            cells,
            side_to_move,
            jumps,
            moves_played: 0,
            winner: None,
        };
        b.update_winner();
        b
    }

    /// Contents of `sq`. Squares off the board read as `Blocked`.
    pub fn get(&self, sq: u8) -> Cell {
        self.cells.get(sq as usize).copied().unwrap_or(Cell::Blocked)
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Number of consecutive jumps since the last extend.
    pub fn jumps(&self) -> u32 {
        self.jumps
    }

    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// The result if the game is decided, `None` while play continues.
    pub fn winner(&self) -> Option<Outcome> {
        self.winner
    }

    pub fn pieces(&self, color: Color) -> u32 {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Piece(color))
            .count() as u32
    }

    pub fn red_pieces(&self) -> u32 {
        self.pieces(Color::Red)
    }

    pub fn blue_pieces(&self) -> u32 {
        self.pieces(Color::Blue)
    }

    /// Squares holding a piece of `color`, in ascending square order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = u8> + '_ {
        (0..NUM_SQUARES as u8).filter(move |&s| self.cells[s as usize] == Cell::Piece(color))
    }

    /// True if `color` has any non-pass move, regardless of whose turn it is.
    pub fn can_move(&self, color: Color) -> bool {
        self.squares_of(color).any(|from| {
            let (c, r) = (col_of(from), row_of(from));
            (-2..=2).any(|dc| {
                (-2..=2).any(|dr| {
                    sq(c + dc, r + dr).is_some_and(|to| self.cells[to as usize] == Cell::Empty)
                })
            })
        })
    }

    pub fn is_legal_move(&self, mv: Move) -> bool {
        if self.winner.is_some() {
            return false;
        }
        match mv {
            Move::Pass => !self.can_move(self.side_to_move),
            Move::Play { from, to } => {
                (from as usize) < NUM_SQUARES
                    && (to as usize) < NUM_SQUARES
                    && self.cells[from as usize] == Cell::Piece(self.side_to_move)
                    && self.cells[to as usize] == Cell::Empty
                    && matches!(mv.distance(), 1 | 2)
            }
        }
    }

    /// Applies `mv` after checking it against the rules.
    pub fn play(&mut self, mv: Move) -> Result<Undo, BoardError> {
        if self.winner.is_some() {
            return Err(BoardError::GameOver);
        }
        if !self.is_legal_move(mv) {
            return Err(BoardError::IllegalMove(mv));
        }
        Ok(self.make_move(mv))
    }

    /// Applies `mv` without validation. The move must be legal.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        debug_assert!(self.is_legal_move(mv), "make_move called with illegal move {mv}");
        let undo = Undo {
            flipped: 0,
            jumps: self.jumps,
            winner: self.winner,
        };
        let mut flipped = 0u64;

        if let Move::Play { from, to } = mv {
            let mover = self.side_to_move;
            if mv.is_jump() {
                self.cells[from as usize] = Cell::Empty;
                self.jumps += 1;
            } else {
                self.jumps = 0;
            }
            self.cells[to as usize] = Cell::Piece(mover);

            let (c, r) = (col_of(to), row_of(to));
            for dc in -1..=1 {
                for dr in -1..=1 {
                    if let Some(n) = sq(c + dc, r + dr) {
                        if self.cells[n as usize] == Cell::Piece(mover.other()) {
                            self.cells[n as usize] = Cell::Piece(mover);
                            flipped |= 1u64 << n;
                        }
                    }
                }
            }
        }

        self.side_to_move = self.side_to_move.other();
        self.moves_played += 1;
        self.update_winner();
        Undo { flipped, ..undo }
    }

    /// Takes back `mv`, which must be the last move applied with `make_move`.
    /// Calling it on a board with no moves played is a contract violation.
    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        debug_assert!(self.moves_played > 0, "unmake_move with no move to take back");
        self.side_to_move = self.side_to_move.other();
        self.moves_played -= 1;
        self.jumps = undo.jumps;
        self.winner = undo.winner;

        if let Move::Play { from, to } = mv {
            let mover = self.side_to_move;
            for n in 0..NUM_SQUARES as u8 {
                if undo.flipped & (1u64 << n) != 0 {
                    self.cells[n as usize] = Cell::Piece(mover.other());
                }
            }
            self.cells[to as usize] = Cell::Empty;
            if mv.is_jump() {
                self.cells[from as usize] = Cell::Piece(mover);
            }
        }
    }

    /// Blocks `sq` and its mirror images across the centre column and row.
    pub fn set_block(&mut self, sq_: u8) -> Result<(), BoardError> {
        if self.moves_played > 0 {
            return Err(BoardError::GameStarted);
        }
        let (c, r) = (col_of(sq_), row_of(sq_));
        let last = SIDE - 1;
        let targets = [(c, r), (last - c, r), (c, last - r), (last - c, last - r)];

        let mut squares = Vec::with_capacity(targets.len());
        for (tc, tr) in targets {
            let s = sq(tc, tr).ok_or_else(|| BoardError::BlockOccupied(sq_to_coord(sq_)))?;
            if let Cell::Piece(_) = self.cells[s as usize] {
                return Err(BoardError::BlockOccupied(sq_to_coord(s)));
            }
            squares.push(s);
        }
        for s in squares {
            self.cells[s as usize] = Cell::Blocked;
        }
        self.update_winner();
        Ok(())
    }

    fn update_winner(&mut self) {
        let red = self.red_pieces();
        let blue = self.blue_pieces();
        self.winner = if red == 0 && blue == 0 {
            Some(Outcome::Draw)
        } else if red == 0 {
            Some(Outcome::Win(Color::Blue))
        } else if blue == 0 {
            Some(Outcome::Win(Color::Red))
        } else if self.jumps >= JUMP_LIMIT
            || (!self.can_move(Color::Red) && !self.can_move(Color::Blue))
        {
            Some(match red.cmp(&blue) {
                std::cmp::Ordering::Greater => Outcome::Win(Color::Red),
                std::cmp::Ordering::Less => Outcome::Win(Color::Blue),
                std::cmp::Ordering::Equal => Outcome::Draw,
            })
        } else {
            None
        };
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
