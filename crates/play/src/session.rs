//! The human-versus-engine game loop.
//!
//! Reads the human's moves from any `BufRead` and writes the board and
//! messages to any `Write`, so the loop runs the same on a terminal and in
//! tests.

use std::io::{BufRead, Write};

use anyhow::Result;
use chess_core::{move_to_uci, parse_uci_move, Engine, Game, MoveParseError};
use tracing::{debug, info};

use crate::config::PlayConfig;

/// How a session finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEnd {
    /// PGN result, "*" if the game was abandoned
    pub result: &'static str,
    /// Moves played by both sides
    pub plies: usize,
    /// The human typed `exit` or closed the input
    pub abandoned: bool,
}

pub fn run<R, W>(
    config: &PlayConfig,
    engine: &mut dyn Engine,
    mut game: Game,
    input: &mut R,
    out: &mut W,
) -> Result<SessionEnd>
where
    R: BufRead,
    W: Write,
{
    let engine_color = config.engine_plays.color();
    let mut abandoned = false;
    engine.new_game();
    info!(engine = engine.name(), depth = config.depth, side = %config.engine_plays, "game started");

    while !game.is_game_over() {
        writeln!(out, "{}\n", game.position())?;

        if game.side_to_move() != engine_color {
            write!(out, "Enter your move (e.g., e2e4, or 'exit' to quit): ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                abandoned = true;
                break;
            }
            let text = line.trim();
            if text.eq_ignore_ascii_case("exit") {
                writeln!(out, "You have chosen to exit the game.")?;
                abandoned = true;
                break;
            }

            match parse_uci_move(game.position(), text) {
                Ok(mv) => game.push(mv),
                Err(MoveParseError::Illegal(_)) => {
                    writeln!(out, "Illegal move. Please try again.")?;
                }
                Err(MoveParseError::Malformed(_)) => {
                    writeln!(out, "Invalid input format. Please try again.")?;
                }
            }
        } else {
            writeln!(out, "Engine is thinking...")?;
            let result = engine.search(&mut game, config.depth);
            debug!(nodes = result.nodes, score = result.score, "engine search finished");

            let Some(mv) = result.best_move else {
                writeln!(out, "Engine could not find a valid move. Game over.")?;
                break;
            };
            game.push(mv);
            writeln!(out, "Engine played: {}", move_to_uci(mv))?;
        }
    }

    let result = game.result();
    writeln!(out, "{}", game.position())?;
    writeln!(out, "Game over. Result: {result}")?;
    info!(result, plies = game.ply(), "game finished");

    Ok(SessionEnd {
        result,
        plies: game.ply(),
        abandoned,
    })
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
