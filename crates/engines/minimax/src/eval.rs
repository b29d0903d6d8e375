//! Material-based position evaluation

use chess_core::{Color, PieceKind};

use crate::rules::Material;
use crate::search::Score;

/// Material values in pawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
///
/// The king is worth nothing here; losing it ends the game instead.
const PIECE_VALUES: [Score; 6] = [1, 3, 3, 5, 9, 0];

/// Evaluates the material balance from White's point of view.
///
/// - Positive = White is ahead
/// - Negative = Black is ahead
/// - 0 = material is level
///
/// Whose turn it is does not matter.
pub fn evaluate<M: Material + ?Sized>(pos: &M) -> Score {
    PieceKind::ALL
        .iter()
        .map(|&kind| {
            let white = pos.count(Color::White, kind) as Score;
            let black = pos.count(Color::Black, kind) as Score;
            piece_value(kind) * (white - black)
        })
        .sum()
}

/// Returns the material value of a piece in pawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> Score {
    PIECE_VALUES[kind.idx()]
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
