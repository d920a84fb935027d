//! Text forms of squares, moves and positions.
//!
//! Moves are written `c3-d4`, a pass is `-`. Positions use a FEN-like line:
//! seven ranks from row 7 down to row 1 separated by `/`, with `r`/`b` for
//! pieces, `X` for blocked squares and digits for runs of empty squares,
//! followed by the side to move and an optional consecutive-jump count.

use std::fmt;
use std::str::FromStr;

use crate::{board::Board, error::ParseError, types::*};

/// Position text for [`Board::new`].
pub const START_FEN: &str = "r5b/7/7/7/7/7/b5r r 0";

pub fn parse_square(text: &str) -> Result<u8, ParseError> {
    coord_to_sq(text.trim()).ok_or_else(|| ParseError::InvalidSquare(text.to_string()))
}

pub fn parse_move(text: &str) -> Result<Move, ParseError> {
    let t = text.trim();
    if t == "-" {
        return Ok(Move::Pass);
    }
    let invalid = || ParseError::InvalidMove(text.to_string());
    let (from, to) = t.split_once('-').ok_or_else(invalid)?;
    let from = coord_to_sq(from.trim()).ok_or_else(invalid)?;
    let to = coord_to_sq(to.trim()).ok_or_else(invalid)?;
    Ok(Move::new(from, to))
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}

impl Board {
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        let bad = |msg: &str| ParseError::InvalidFen(format!("{msg} in {fen:?}"));

        let mut parts = fen.split_whitespace();
        let board_part = parts.next().ok_or_else(|| bad("missing board"))?;
        let side_part = parts.next().ok_or_else(|| bad("missing side to move"))?;
        let jumps: u32 = match parts.next() {
            Some(j) => j.parse().map_err(|_| bad("bad jump count"))?,
            None => 0,
        };

        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != SIDE as usize {
            return Err(bad("expected 7 ranks"));
        }

        let mut cells = [Cell::Empty; NUM_SQUARES];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let row = SIDE - 1 - rank_idx as i8; // listed from row 7 down to row 1
            let mut col: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as i8;
                } else {
                    let cell = match ch {
                        'r' => Cell::Piece(Color::Red),
                        'b' => Cell::Piece(Color::Blue),
                        'X' => Cell::Blocked,
                        _ => return Err(bad(&format!("unexpected {ch:?}"))),
                    };
                    let s = sq(col, row).ok_or_else(|| bad("too many squares in rank"))?;
                    cells[s as usize] = cell;
                    col += 1;
                }
                if col > SIDE {
                    return Err(bad("too many squares in rank"));
                }
            }
            if col != SIDE {
                return Err(bad("not enough squares in rank"));
            }
        }

        let side_to_move = match side_part {
            "r" => Color::Red,
            "b" => Color::Blue,
            _ => return Err(bad("side to move must be r or b")),
        };

        Ok(Board::from_parts(cells, side_to_move, jumps))
    }

    pub fn to_fen(&self) -> String {
        let mut ranks = Vec::with_capacity(SIDE as usize);
        for row in (0..SIDE).rev() {
            let mut rank = String::new();
            let mut empty = 0;
            for col in 0..SIDE {
                let cell = sq(col, row).map_or(Cell::Empty, |s| self.get(s));
                if cell == Cell::Empty {
                    empty += 1;
                    continue;
                }
                if empty > 0 {
                    rank.push_str(&empty.to_string());
                    empty = 0;
                }
                rank.push(cell.to_char());
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            ranks.push(rank);
        }
        format!(
            "{} {} {}",
            ranks.join("/"),
            self.side_to_move().to_char(),
            self.jumps()
        )
    }
}

/// Human-readable board dump, row 7 at the top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===")?;
        for row in (0..SIDE).rev() {
            write!(f, " ")?;
            for col in 0..SIDE {
                let cell = sq(col, row).map_or(Cell::Empty, |s| self.get(s));
                write!(f, " {}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "===")
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
