//! Minimax search with alpha-beta pruning

use tracing::trace;

use chess_core::Color;

use crate::eval::evaluate;
use crate::rules::{Material, Rules};

/// Material balance, positive when White (side A) is ahead.
pub type Score = i32;

/// Larger than any reachable material score. `-SCORE_INFINITY` does not
/// overflow.
pub const SCORE_INFINITY: Score = Score::MAX;

/// Which way the side to move at a node pushes the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Perspective {
    Maximizing,
    Minimizing,
}

impl Perspective {
    /// White maximizes the White-minus-Black score, Black minimizes it.
    pub fn of(color: Color) -> Self {
        match color {
            Color::White => Perspective::Maximizing,
            Color::Black => Perspective::Minimizing,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Perspective::Maximizing => Perspective::Minimizing,
            Perspective::Minimizing => Perspective::Maximizing,
        }
    }

    /// The score this side starts from before it has seen any move.
    pub fn worst(self) -> Score {
        match self {
            Perspective::Maximizing => -SCORE_INFINITY,
            Perspective::Minimizing => SCORE_INFINITY,
        }
    }

    /// True when `candidate` is strictly better than `incumbent` for this side.
    pub fn prefers(self, candidate: Score, incumbent: Score) -> bool {
        match self {
            Perspective::Maximizing => candidate > incumbent,
            Perspective::Minimizing => candidate < incumbent,
        }
    }

    pub fn better(self, a: Score, b: Score) -> Score {
        match self {
            Perspective::Maximizing => a.max(b),
            Perspective::Minimizing => a.min(b),
        }
    }
}

/// The `(alpha, beta)` search window.
///
/// Alpha is what the maximizing side is already guaranteed, beta what the
/// minimizing side is. Within one node the window only narrows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub alpha: Score,
    pub beta: Score,
}

impl Window {
    pub const FULL: Window = Window {
        alpha: -SCORE_INFINITY,
        beta: SCORE_INFINITY,
    };

    pub fn new(alpha: Score, beta: Score) -> Self {
        Self { alpha, beta }
    }

    /// No sibling can change the parent's outcome any more.
    pub fn is_closed(&self) -> bool {
        self.beta <= self.alpha
    }

    /// Moves the bound owned by `side` towards `score`.
    pub fn tighten(&mut self, side: Perspective, score: Score) {
        match side {
            Perspective::Maximizing => self.alpha = self.alpha.max(score),
            Perspective::Minimizing => self.beta = self.beta.min(score),
        }
    }
}

impl Default for Window {
    fn default() -> Self {
        Window::FULL
    }
}

/// Counters for one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited. `search` counts the position it is called on;
    /// the selector's root is not counted, only the positions below it.
    pub nodes: u64,
    /// Sibling loops abandoned because the window closed
    pub cutoffs: u64,
}

/// Runs searches and accumulates their statistics.
#[derive(Debug, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Scores `game` by looking `depth` plies ahead, with `perspective` to
    /// move.
    ///
    /// Leaves (depth exhausted or game over) get the static material score
    /// whoever is to move. The game is handed back exactly as it came in.
    pub fn search<G>(
        &mut self,
        game: &mut G,
        depth: u8,
        mut window: Window,
        perspective: Perspective,
    ) -> Score
    where
        G: Rules + Material,
    {
        self.stats.nodes += 1;

        if depth == 0 || game.is_game_over() {
            return evaluate(game);
        }

        let moves = game.legal_moves();
        if moves.is_empty() {
            // Rules that report no moves without reporting game over.
            return evaluate(game);
        }

        let mut best = perspective.worst();
        for mv in moves {
            let score = {
                let mut child = game.play(mv);
                self.search(&mut *child, depth - 1, window, perspective.opponent())
            };

            best = perspective.better(best, score);
            window.tighten(perspective, score);
            if window.is_closed() {
                self.stats.cutoffs += 1;
                trace!(depth, ?perspective, alpha = window.alpha, beta = window.beta, "cutoff");
                break;
            }
        }
        best
    }
}

/// Scores `game` to `depth` plies with a fresh [`Searcher`].
pub fn search<G>(game: &mut G, depth: u8, window: Window, perspective: Perspective) -> Score
where
    G: Rules + Material,
{
    Searcher::new().search(game, depth, window, perspective)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
