//! Terminal Ataxx
//!
//! Wires the core board, the engines and human players into an interactive
//! game. The `ataxx` binary is a thin clap front end over [`Game`].

pub mod command;
pub mod console;
pub mod game;
pub mod human;

pub use command::{Command, HELP};
pub use console::{Console, SharedConsole};
pub use game::{Game, GameError, GameOutcome};
pub use human::HumanPlayer;
