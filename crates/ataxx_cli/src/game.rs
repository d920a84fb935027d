//! Turn loop between two players

use std::io;

use ataxx_core::{Board, BoardError, Color, Move, Outcome, Player};
use log::info;
use thiserror::Error;

use crate::console::SharedConsole;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("console error: {0}")]
    Io(#[from] io::Error),

    #[error("{player} played an illegal move: {source}")]
    IllegalMove { player: String, source: BoardError },
}

/// How a game left the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Finished(Outcome),
    /// A human quit or ran out of input
    Abandoned(Color),
}

pub struct Game {
    board: Board,
    red: Box<dyn Player>,
    blue: Box<dyn Player>,
    console: SharedConsole,
    history: Vec<Move>,
}

impl Game {
    pub fn new(
        board: Board,
        red: Box<dyn Player>,
        blue: Box<dyn Player>,
        console: SharedConsole,
    ) -> Self {
        Self {
            board,
            red,
            blue,
            console,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played so far, passes included.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Plays until the board is decided or a player stops answering.
    ///
    /// Automatic players have their moves announced (`Red moves a7-b6.`,
    /// `Blue passes.`); the result is announced as `Red wins.`,
    /// `Blue wins.` or `Draw.`.
    pub fn play(&mut self) -> Result<GameOutcome, GameError> {
        self.red.new_game();
        self.blue.new_game();

        while self.board.winner().is_none() {
            let mover = self.board.side_to_move();
            let player = match mover {
                Color::Red => self.red.as_mut(),
                Color::Blue => self.blue.as_mut(),
            };

            let Some(mv) = player.select_move(&self.board) else {
                info!("{mover} ({}) left the game", player.name());
                return Ok(GameOutcome::Abandoned(mover));
            };
            self.board
                .play(mv)
                .map_err(|source| GameError::IllegalMove {
                    player: player.name().to_string(),
                    source,
                })?;
            self.history.push(mv);

            if player.is_auto() {
                let text = match mv {
                    Move::Pass => format!("{mover} passes."),
                    mv => format!("{mover} moves {mv}."),
                };
                self.console.borrow_mut().write_line(&text)?;
            }
        }

        let outcome = self.board.winner().unwrap_or(Outcome::Draw);
        let text = match outcome {
            Outcome::Win(color) => format!("{color} wins."),
            Outcome::Draw => "Draw.".to_string(),
        };
        info!("game over after {} moves: {text}", self.history.len());
        self.console.borrow_mut().write_line(&text)?;
        Ok(GameOutcome::Finished(outcome))
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
