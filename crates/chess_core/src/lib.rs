pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use perft::{perft, perft_divide};
pub use types::*;
pub use uci::*;

// =============================================================================
// Engine trait: implemented by every move-picking engine in the workspace
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Material score of the chosen line, positive favoring White
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Trait that all chess engines must implement.
pub trait Engine: Send {
    /// Search the game's current position to the given depth.
    ///
    /// The game is borrowed for the duration of the search and handed back
    /// in the state it was received.
    fn search(&mut self, game: &mut Game, depth: u8) -> SearchResult;

    /// Returns the engine's name for display
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
