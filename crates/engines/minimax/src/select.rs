//! Root move selection

use tracing::{debug, trace};

use crate::rules::{Material, Rules};
use crate::search::{Score, Searcher, Window};

impl Searcher {
    /// Picks the best move for the side to move, with its score.
    ///
    /// Each root move gets one search of `depth - 1` plies (depth 0 is
    /// treated as 1). The window narrows as better moves turn up, and ties
    /// keep the move generated first. Returns `None` when there is no legal
    /// move.
    pub fn select_best_scored<G>(&mut self, game: &mut G, depth: u8) -> Option<(G::Move, Score)>
    where
        G: Rules + Material,
    {
        let root = game.perspective();
        let child_depth = depth.saturating_sub(1);

        let mut window = Window::FULL;
        let mut best = None;
        let mut best_score = root.worst();

        for mv in game.legal_moves() {
            let score = {
                let mut child = game.play(mv);
                self.search(&mut *child, child_depth, window, root.opponent())
            };
            trace!(?mv, score, "root move");

            if root.prefers(score, best_score) {
                best_score = score;
                best = Some((mv, score));
                window.tighten(root, score);
            }
        }

        let stats = self.stats();
        debug!(
            best = ?best.map(|(mv, _)| mv),
            score = best_score,
            depth,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "selected move"
        );
        best
    }

    pub fn select_best<G>(&mut self, game: &mut G, depth: u8) -> Option<G::Move>
    where
        G: Rules + Material,
    {
        self.select_best_scored(game, depth).map(|(mv, _)| mv)
    }
}

/// Best move for the side to move in `game`, or `None` if it has no move.
pub fn select_best<G>(game: &mut G, depth: u8) -> Option<G::Move>
where
    G: Rules + Material,
{
    Searcher::new().select_best(game, depth)
}

/// Like [`select_best`], also returning the move's score.
pub fn select_best_scored<G>(game: &mut G, depth: u8) -> Option<(G::Move, Score)>
where
    G: Rules + Material,
{
    Searcher::new().select_best_scored(game, depth)
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod select_tests;
