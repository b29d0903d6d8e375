//! Settings for a terminal game, read from TOML.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use chess_core::{Color, Game};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "play.toml";

/// Search depth bounds.
pub const MIN_DEPTH: u8 = 1;
pub const MAX_DEPTH: u8 = 8;

/// The side the engine plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn color(self) -> Color {
        match self {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

impl FromStr for Side {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Side::White),
            "black" | "b" => Ok(Side::Black),
            _ => bail!("unknown side '{s}', expected white or black"),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::White => "white",
            Side::Black => "black",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayConfig {
    /// Plies searched per engine move
    pub depth: u8,
    pub engine_plays: Side,
    /// Starting position; the standard one when absent
    pub start_fen: Option<String>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            engine_plays: Side::Black,
            start_fen: None,
        }
    }
}

impl PlayConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: PlayConfig = toml::from_str(text).context("invalid play config")?;
        Ok(config.clamped())
    }

    /// Reads `path`. A missing file yields the defaults unless `required`.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        if !required && !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn clamped(mut self) -> Self {
        self.depth = self.depth.clamp(MIN_DEPTH, MAX_DEPTH);
        self
    }

    pub fn start_game(&self) -> Result<Game> {
        match &self.start_fen {
            Some(fen) => Game::from_fen(fen).with_context(|| format!("invalid start_fen '{fen}'")),
            None => Ok(Game::new()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
