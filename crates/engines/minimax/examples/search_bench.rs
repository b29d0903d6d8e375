//! Alpha-beta search benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example search_bench -p minimax_engine -- [depth] [fen]
//!
//! Examples:
//!   # Default: depth 4 over the test positions
//!   cargo run --release --example search_bench -p minimax_engine
//!
//!   # Custom depth and position
//!   cargo flamegraph --example search_bench -p minimax_engine -- 5 "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1"

use std::env;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chess_core::{move_to_uci, Game};
use minimax_engine::Searcher;

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
    (
        "Italian, Black to move",
        "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 4 4",
    ),
];

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = match args.get(1) {
        Some(s) => s.parse().with_context(|| format!("invalid depth '{s}'"))?,
        None => 4,
    };

    let positions: Vec<(&str, &str)> = match args.get(2) {
        Some(fen) => vec![("Custom", fen.as_str())],
        None => TEST_POSITIONS.to_vec(),
    };

    println!("=== Search Benchmark ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, fen) in positions {
        let mut game = Game::from_fen(fen).with_context(|| format!("bad FEN for {name}"))?;
        let mut searcher = Searcher::new();

        let start = Instant::now();
        let best = searcher.select_best_scored(&mut game, depth);
        let elapsed = start.elapsed();

        let stats = searcher.stats();
        total_nodes += stats.nodes;
        total_time += elapsed;

        let shown = match best {
            Some((mv, score)) => format!("{} ({score:+})", move_to_uci(mv)),
            None => "none".to_string(),
        };
        println!(
            "{name:.<30} {shown:<14} {:>10} nodes {:>8} cutoffs in {elapsed:>8.3?} ({:>10.0} nps)",
            stats.nodes,
            stats.cutoffs,
            nps(stats.nodes, elapsed)
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
    Ok(())
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}
