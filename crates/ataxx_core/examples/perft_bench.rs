//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p ataxx_core -- [depth] [fen]
//!
//! Examples:
//!   # Default: depth 4 over the built-in positions
//!   cargo flamegraph --example perft_bench -p ataxx_core
//!
//!   # Custom depth and position
//!   cargo flamegraph --example perft_bench -p ataxx_core -- 5 "r5b/7/2X1X2/7/2X1X2/7/b5r r 0"

use ataxx_core::{perft, Board};
use std::env;
use std::process::ExitCode;
use std::time::{Duration, Instant};

/// Opening layouts with the usual symmetric block patterns
const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Starting position", "r5b/7/7/7/7/7/b5r r 0"),
    ("Four blocks", "r5b/7/2X1X2/7/2X1X2/7/b5r r 0"),
    ("Edge blocks", "r2X2b/7/X5X/7/X5X/7/b2X2r r 0"),
    ("Centre cross", "r5b/7/3X3/2XXX2/3X3/7/b5r r 0"),
];

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    // If FEN provided, use single position mode
    if let Some(fen) = args.get(2) {
        match Board::from_fen(fen) {
            Ok(board) => run_single_position(board, fen, depth),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        run_all_positions(depth);
    }
    ExitCode::SUCCESS
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn run_single_position(mut board: Board, fen: &str, depth: u8) {
    println!("Position: {fen}");
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&mut board, depth.saturating_sub(2));
    }

    let start = Instant::now();
    let nodes = perft(&mut board, depth);
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, fen) in TEST_POSITIONS {
        let mut board = match Board::from_fen(fen) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&mut board, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed)
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}
