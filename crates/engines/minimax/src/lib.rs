//! Minimax Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a material-only
//! evaluation. The search is generic over [`Rules`], so it runs on any game
//! that can list, play and take back moves and count its pieces.
//!
//! This engine uses:
//! - Minimax search with alpha-beta pruning, no move ordering
//! - Material evaluation (1/3/3/5/9) from White's point of view
//! - A move guard that undoes every played move on scope exit

mod eval;
mod rules;
mod search;
mod select;

#[cfg(test)]
mod test_tree;

use chess_core::{Engine, Game, SearchResult};

pub use eval::{evaluate, piece_value};
pub use rules::{Applied, Material, Rules};
pub use search::{search, Perspective, Score, SearchStats, Searcher, Window, SCORE_INFINITY};
pub use select::{select_best, select_best_scored};

/// Chess engine backed by [`Searcher`].
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, game: &mut Game, depth: u8) -> SearchResult {
        let mut searcher = Searcher::new();
        let best = searcher.select_best_scored(game, depth);
        self.nodes = searcher.stats().nodes;

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
