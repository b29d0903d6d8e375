//! Terminal chess against the minimax engine.
//!
//! ```bash
//! cargo run -p play -- --depth 4 --engine-plays white
//! RUST_LOG=minimax_engine=debug cargo run -p play
//! ```

mod config;
mod session;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use minimax_engine::MinimaxEngine;
use tracing_subscriber::EnvFilter;

use config::{PlayConfig, Side, DEFAULT_CONFIG_PATH};

fn print_usage() {
    println!("Play chess against the minimax engine");
    println!();
    println!("Usage:");
    println!("  play [--config PATH] [--depth N] [--engine-plays white|black] [--fen FEN]");
    println!();
    println!("Settings are read from ./{DEFAULT_CONFIG_PATH} when present;");
    println!("flags override the file.");
}

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    depth: Option<u8>,
    engine_plays: Option<Side>,
    fen: Option<String>,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i)
                .cloned()
                .with_context(|| format!("{flag} needs a value"))
        };
        match flag {
            "--config" | "-c" => parsed.config = Some(PathBuf::from(value()?)),
            "--depth" | "-d" => {
                let v = value()?;
                parsed.depth = Some(v.parse().with_context(|| format!("invalid depth '{v}'"))?);
            }
            "--engine-plays" | "-e" => parsed.engine_plays = Some(value()?.parse()?),
            "--fen" => parsed.fen = Some(value()?),
            "--help" | "-h" => parsed.help = true,
            other => bail!("unknown argument '{other}'"),
        }
        i += 1;
    }
    Ok(parsed)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&raw)?;
    if args.help {
        print_usage();
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => PlayConfig::load(path, true)?,
        None => PlayConfig::load(Path::new(DEFAULT_CONFIG_PATH), false)?,
    };
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if let Some(side) = args.engine_plays {
        config.engine_plays = side;
    }
    if args.fen.is_some() {
        config.start_fen = args.fen;
    }
    let config = config.clamped();

    let game = config.start_game()?;
    let mut engine = MinimaxEngine::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let end = session::run(&config, &mut engine, game, &mut stdin.lock(), &mut stdout)?;
    tracing::debug!(
        result = end.result,
        plies = end.plies,
        abandoned = end.abandoned,
        "session ended"
    );
    Ok(())
}
