//! A player that reads moves from the console

use ataxx_core::{Board, Color, Move, Player};
use log::warn;

use crate::command::{Command, HELP};
use crate::console::SharedConsole;

/// Prompts with the side's name (`Red: `) and keeps asking until it gets a
/// legal move. `quit`, or the end of input, gives up the game.
pub struct HumanPlayer {
    color: Color,
    console: SharedConsole,
    name: String,
}

impl HumanPlayer {
    pub fn new(color: Color, console: SharedConsole) -> Self {
        Self {
            color,
            console,
            name: format!("Human ({color})"),
        }
    }

    fn ask(&mut self, board: &Board) -> std::io::Result<Option<Move>> {
        let mut console = self.console.borrow_mut();
        loop {
            console.prompt(&format!("{}: ", self.color))?;
            let Some(line) = console.read_line()? else {
                return Ok(None);
            };
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Ok(Command::Play(mv)) if board.is_legal_move(mv) => return Ok(Some(mv)),
                Ok(Command::Play(mv)) => console.write_line(&format!("Illegal move: {mv}"))?,
                Ok(Command::Dump) => console.write_line(&board.to_string())?,
                Ok(Command::Help) => console.write_line(HELP)?,
                Ok(Command::Quit) => return Ok(None),
                Err(e) => console.write_line(&format!("{e}; type help for commands"))?,
            }
        }
    }
}

impl Player for HumanPlayer {
    fn select_move(&mut self, board: &Board) -> Option<Move> {
        match self.ask(board) {
            Ok(mv) => mv,
            Err(e) => {
                warn!("console failed while reading {}'s move: {e}", self.color);
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_auto(&self) -> bool {
        false
    }
}
