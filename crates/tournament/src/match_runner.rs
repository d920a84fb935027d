//! Match runner for playing games between players

use ataxx_core::{parse_square, Board, Color, Move, Outcome, Player};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::elo::{GameResult, MatchResult};
use crate::error::Result;
use crate::players::PlayerSpec;

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for minimax players built without an explicit depth
    pub depth: u8,
    /// Moves (passes included) after which an undecided game is a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during match
    pub verbose: bool,
    /// Squares blocked before each game, reflections included
    pub blocks: Vec<String>,
    /// Start position text; the standard start when absent
    pub start_fen: Option<String>,
    /// Seed for random players built without one
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            max_moves: 200,
            alternate_colors: true,
            verbose: true,
            blocks: Vec::new(),
            start_fen: None,
            seed: 0,
        }
    }
}

/// Why a game stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// The rules decided the game
    Decided(Outcome),
    /// `max_moves` reached without a decision; scored as a draw
    MoveLimit,
    /// The side gave up (its player returned no move)
    Resigned(Color),
    /// The side played an illegal move
    Forfeit(Color),
}

impl GameEnd {
    /// Result from Red's perspective
    pub fn red_result(self) -> GameResult {
        match self {
            GameEnd::Decided(Outcome::Win(Color::Red)) => GameResult::Win,
            GameEnd::Decided(Outcome::Win(Color::Blue)) => GameResult::Loss,
            GameEnd::Decided(Outcome::Draw) | GameEnd::MoveLimit => GameResult::Draw,
            GameEnd::Resigned(Color::Red) | GameEnd::Forfeit(Color::Red) => GameResult::Loss,
            GameEnd::Resigned(Color::Blue) | GameEnd::Forfeit(Color::Blue) => GameResult::Win,
        }
    }
}

/// A finished game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub end: GameEnd,
    pub moves: Vec<Move>,
    pub final_position: Board,
}

/// Runs matches between two players
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The board every game of the match starts from.
    pub fn start_position(&self) -> Result<Board> {
        let mut board = match &self.config.start_fen {
            Some(fen) => Board::from_fen(fen)?,
            None => Board::new(),
        };
        for block in &self.config.blocks {
            board.set_block(parse_square(block)?)?;
        }
        Ok(board)
    }

    /// Builds both players from their specs and runs the match.
    pub fn run_specs(&self, spec1: PlayerSpec, spec2: PlayerSpec) -> Result<MatchResult> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut player1 = spec1.build(self.config.depth, &mut rng);
        let mut player2 = spec2.build(self.config.depth, &mut rng);
        self.run_match(player1.as_mut(), player2.as_mut())
    }

    /// Run a match between two players
    ///
    /// Returns the result from player1's perspective. Player1 takes Red in
    /// the first game.
    pub fn run_match(
        &self,
        player1: &mut dyn Player,
        player2: &mut dyn Player,
    ) -> Result<MatchResult> {
        let start = self.start_position()?;
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let player1_red = !self.config.alternate_colors || game_num % 2 == 0;

            let record = if player1_red {
                self.play_game(&start, player1, player2)
            } else {
                self.play_game(&start, player2, player1)
            };
            let red_result = record.end.red_result();
            let game_result = if player1_red {
                red_result
            } else {
                red_result.flip()
            };
            result.record(game_result);

            info!(
                "game {}/{}: {:?} after {} moves",
                game_num + 1,
                self.config.num_games,
                record.end,
                record.moves.len()
            );
            if self.config.verbose {
                let color = if player1_red { "R" } else { "B" };
                let outcome = match red_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        Ok(result)
    }

    /// Play a single game from `start`.
    pub fn play_game(
        &self,
        start: &Board,
        red: &mut dyn Player,
        blue: &mut dyn Player,
    ) -> GameRecord {
        let mut board = start.clone();
        let mut moves = Vec::new();
        red.new_game();
        blue.new_game();

        let end = loop {
            if let Some(outcome) = board.winner() {
                break GameEnd::Decided(outcome);
            }
            if moves.len() as u32 >= self.config.max_moves {
                break GameEnd::MoveLimit;
            }

            let mover = board.side_to_move();
            let player: &mut dyn Player = match mover {
                Color::Red => &mut *red,
                Color::Blue => &mut *blue,
            };

            let Some(mv) = player.select_move(&board) else {
                debug!("{mover} ({}) resigned", player.name());
                break GameEnd::Resigned(mover);
            };
            if let Err(e) = board.play(mv) {
                warn!("{mover} ({}) forfeits: {e}", player.name());
                break GameEnd::Forfeit(mover);
            }
            moves.push(mv);
        };

        GameRecord {
            end,
            moves,
            final_position: board,
        }
    }
}

/// Quick utility to run a single match with default settings
pub fn quick_match(
    player1: &mut dyn Player,
    player2: &mut dyn Player,
    num_games: u32,
) -> Result<MatchResult> {
    let config = MatchConfig {
        num_games,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(player1, player2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
