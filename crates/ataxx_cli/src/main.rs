//! Ataxx in the terminal
//!
//! ```bash
//! # You play Red against the engine
//! ataxx --red human --blue ai
//!
//! # Watch the engine beat a random mover on a board with blocks
//! ataxx --red ai --blue random --blocks c5 b2 --seed 7
//! ```

use std::process::ExitCode;

use ataxx_cli::{Console, Game, GameOutcome, HumanPlayer, SharedConsole};
use ataxx_core::{parse_square, Board, Color, Player};
use clap::{Parser, ValueEnum};
use log::{error, info};
use minimax_engine::{MinimaxEngine, MAX_DEPTH};
use random_engine::RandomEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    Human,
    Ai,
    Random,
}

#[derive(Debug, Parser)]
#[command(name = "ataxx", about = "Play Ataxx against the minimax engine")]
struct Opts {
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    red: PlayerKind,
    #[arg(long, value_enum, default_value_t = PlayerKind::Ai)]
    blue: PlayerKind,

    /// Search depth for ai players
    #[arg(
        long,
        default_value_t = MAX_DEPTH,
        value_parser = clap::value_parser!(u8).range(1..=MAX_DEPTH as i64)
    )]
    depth: u8,

    /// Seed for random players (Blue uses seed + 1)
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Squares to block before the first move; reflections are added
    #[arg(long, num_args = 1..)]
    blocks: Vec<String>,

    /// Start from this position instead of the standard one
    #[arg(long)]
    fen: Option<String>,
}

fn make_player(
    kind: PlayerKind,
    color: Color,
    opts: &Opts,
    console: &SharedConsole,
) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(color, console.clone())),
        PlayerKind::Ai => Box::new(MinimaxEngine::with_depth(opts.depth)),
        PlayerKind::Random => {
            let seed = match color {
                Color::Red => opts.seed,
                Color::Blue => opts.seed.wrapping_add(1),
            };
            Box::new(RandomEngine::with_seed(seed))
        }
    }
}

fn start_position(opts: &Opts) -> Result<Board, Box<dyn std::error::Error>> {
    let mut board = match &opts.fen {
        Some(fen) => Board::from_fen(fen)?,
        None => Board::new(),
    };
    for block in &opts.blocks {
        board.set_block(parse_square(block)?)?;
    }
    Ok(board)
}

fn run(opts: &Opts) -> Result<(), Box<dyn std::error::Error>> {
    let board = start_position(opts)?;
    let console = Console::stdio().shared();
    let red = make_player(opts.red, Color::Red, opts, &console);
    let blue = make_player(opts.blue, Color::Blue, opts, &console);

    if !red.is_auto() || !blue.is_auto() {
        console.borrow_mut().write_line(&board.to_string())?;
    }

    let mut game = Game::new(board, red, blue, console);
    if let GameOutcome::Abandoned(color) = game.play()? {
        info!("{color} left before the end");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let opts = Opts::parse();

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
