//! Commands a human may type on their turn

use ataxx_core::{parse_move, Move, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A move in `c3-d4` form, or `-` to pass
    Play(Move),
    /// Print the board
    Dump,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  c3-d4   move from c3 to d4 (distance 1 copies, distance 2 jumps)
  -       pass (only when you have no move)
  dump    print the board
  help    show this text
  quit    leave the game";

impl Command {
    /// Parses one input line; surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Result<Command, ParseError> {
        match line.trim().to_lowercase().as_str() {
            "dump" => Ok(Command::Dump),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            text => parse_move(text).map(Command::Play),
        }
    }
}
