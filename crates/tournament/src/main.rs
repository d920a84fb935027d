//! Tournament CLI
//!
//! Run matches between players and track Elo ratings.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;
use tournament::{
    run_round_robin, EloTracker, MatchConfig, MatchRunner, PlayerSpec, Result, TournamentConfig,
    TournamentResults,
};

const ABOUT: &str = "ML-ataxx Tournament Runner

Players:
  minimax[:D]   - Alpha-beta minimax, D plies (default --depth)
  random[:S]    - Uniformly random moves, seed S

Examples:
  tournament match minimax:3 random --games 20
  tournament gauntlet minimax:4 --games 10
  tournament run ladder.toml";

#[derive(Debug, Parser)]
#[command(name = "tournament", about = ABOUT)]
struct Cli {
    /// Elo ledger to read and update
    #[arg(long, global = true, default_value = "tournament_elo.json")]
    elo_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Args)]
struct MatchOpts {
    #[arg(long, short = 'g', default_value_t = 10)]
    games: u32,
    /// Depth for minimax players that do not name one
    #[arg(long, short = 'd', default_value_t = 4)]
    depth: u8,
    #[arg(long, default_value_t = 200)]
    max_moves: u32,
    /// Squares to block before each game (reflections are added)
    #[arg(long, num_args = 1..)]
    blocks: Vec<String>,
    /// Seed for unseeded random players
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl MatchOpts {
    fn match_config(&self, verbose: bool) -> MatchConfig {
        MatchConfig {
            num_games: self.games,
            depth: self.depth,
            max_moves: self.max_moves,
            blocks: self.blocks.clone(),
            seed: self.seed,
            verbose,
            ..Default::default()
        }
    }

    fn tournament_config(&self, name: String, participants: Vec<PlayerSpec>) -> TournamentConfig {
        TournamentConfig {
            name,
            participants,
            games_per_match: self.games,
            search_depth: self.depth,
            max_moves_per_game: self.max_moves,
            blocks: self.blocks.clone(),
            seed: self.seed,
            ..Default::default()
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play one match between two players
    Match {
        player1: PlayerSpec,
        player2: PlayerSpec,
        #[command(flatten)]
        opts: MatchOpts,
    },
    /// Play a challenger against the standard opponents
    Gauntlet {
        challenger: PlayerSpec,
        #[command(flatten)]
        opts: MatchOpts,
    },
    /// Show the Elo leaderboard
    #[command(alias = "elo")]
    Leaderboard,
    /// Run a round robin described by a TOML file
    Run { config: PathBuf },
}

fn run_match(elo_file: &Path, p1: PlayerSpec, p2: PlayerSpec, opts: &MatchOpts) -> Result<()> {
    println!("=== Match: {} vs {} ===", p1, p2);
    println!("Games: {}, Depth: {}", opts.games, opts.depth);
    println!();

    let runner = MatchRunner::new(opts.match_config(true));
    let result = runner.run_specs(p1, p2)?;

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        p1, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut tracker = EloTracker::load_or_default(elo_file)?;
    tracker.update_ratings(&p1.to_string(), &p2.to_string(), &result);
    println!("\n{}", tracker.format_leaderboard());
    tracker.save(elo_file)
}

fn run_gauntlet(elo_file: &Path, challenger: PlayerSpec, opts: &MatchOpts) -> Result<()> {
    let opponents = [
        PlayerSpec::Random { seed: None },
        PlayerSpec::Minimax { depth: Some(1) },
        PlayerSpec::Minimax { depth: Some(2) },
    ];
    println!("=== Gauntlet: {} vs all ===", challenger);
    println!("Games per match: {}, Depth: {}", opts.games, opts.depth);

    let mut tracker = EloTracker::load_or_default(elo_file)?;
    let participants = std::iter::once(challenger).chain(opponents).collect();
    let config = opts.tournament_config(format!("Gauntlet: {challenger}"), participants);
    let mut results = TournamentResults::new(
        &config.name,
        config.participants.iter().map(|p| p.to_string()).collect(),
        config.clone(),
    );

    let runner = MatchRunner::new(opts.match_config(false));
    for opponent in opponents {
        println!("\n--- {} vs {} ---", challenger, opponent);
        let result = runner.run_specs(challenger, opponent)?;
        println!(
            "Result: {}-{}-{} (Score: {:.1}%)",
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0
        );
        tracker.update_ratings(&challenger.to_string(), &opponent.to_string(), &result);
        results.add_match(&challenger.to_string(), &opponent.to_string(), result);
    }

    println!("\n{}", tracker.format_leaderboard());
    println!("{}", results.generate_report());
    tracker.save(elo_file)
}

fn run_config(elo_file: &Path, path: &Path) -> Result<()> {
    let config = TournamentConfig::load(path)?;
    // A ledger named in the file wins over the command-line default
    let elo_file = if config.elo_file != TournamentConfig::default().elo_file {
        config.elo_file.clone()
    } else {
        elo_file.to_path_buf()
    };

    let mut tracker = EloTracker::load_or_default(&elo_file)?;
    let results = run_round_robin(&config, &mut tracker)?;
    println!("{}", results.generate_report());
    println!("{}", tracker.format_leaderboard());

    if let Some(out) = &config.results_file {
        results.save(out)?;
        println!("Results written to {}", out.display());
    }
    tracker.save(&elo_file)
}

fn show_leaderboard(elo_file: &Path) -> Result<()> {
    if !elo_file.exists() {
        println!("No tournament data found. Run some matches first!");
        return Ok(());
    }
    println!("{}", EloTracker::load(elo_file)?.format_leaderboard());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let outcome = match &cli.command {
        Command::Match {
            player1,
            player2,
            opts,
        } => run_match(&cli.elo_file, *player1, *player2, opts),
        Command::Gauntlet { challenger, opts } => run_gauntlet(&cli.elo_file, *challenger, opts),
        Command::Leaderboard => show_leaderboard(&cli.elo_file),
        Command::Run { config } => run_config(&cli.elo_file, config),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
