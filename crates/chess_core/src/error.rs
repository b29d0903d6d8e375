//! Error types for parsing positions and moves.

use thiserror::Error;

/// Reasons a FEN string can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected at least 4 FEN fields, found {0}")]
    MissingFields(usize),
    #[error("expected 8 ranks in the board field, found {0}")]
    RankCount(usize),
    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: usize },
    #[error("invalid piece character '{0}'")]
    Piece(char),
    #[error("invalid side to move '{0}'")]
    SideToMove(String),
    #[error("invalid castling character '{0}'")]
    Castling(char),
    #[error("invalid en-passant square '{0}'")]
    EnPassant(String),
    #[error("invalid {field} '{value}'")]
    Clock { field: &'static str, value: String },
}

/// Reasons a coordinate-notation move (`e2e4`, `e7e8q`) can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    /// The text is not coordinate notation at all.
    #[error("malformed move '{0}'")]
    Malformed(String),
    /// Well-formed, but not legal in the current position.
    #[error("illegal move '{0}'")]
    Illegal(String),
}
