//! The seam between the search and a game's rules.
//!
//! The search never looks inside a position. It asks a [`Rules`]
//! implementation for moves, plays and takes them back, and reads piece
//! counts through [`Material`] when it needs a static score.

use std::fmt;
use std::ops::{Deref, DerefMut};

use chess_core::{Color, Game, Move, PieceKind, Position};

use crate::search::Perspective;

/// Move generation and stack-discipline mutation for one game.
pub trait Rules {
    /// Opaque move value, only meaningful for the position it came from.
    type Move: Copy + Eq + fmt::Debug;

    /// All legal moves for the side to move; empty iff it has none.
    fn legal_moves(&mut self) -> Vec<Self::Move>;

    fn apply(&mut self, mv: Self::Move);

    /// Reverses the most recent `apply`.
    fn undo(&mut self);

    fn is_game_over(&mut self) -> bool;

    /// Which way the side to move pushes the score.
    fn perspective(&self) -> Perspective;

    /// Applies `mv` for as long as the returned guard lives.
    fn play(&mut self, mv: Self::Move) -> Applied<'_, Self>
    where
        Self: Sized,
    {
        Applied::new(self, mv)
    }
}

/// Piece counts, read by the evaluator.
pub trait Material {
    fn count(&self, color: Color, kind: PieceKind) -> u32;
}

/// A move that is undone when the guard is dropped.
///
/// Dereferences to the game in its post-move state, so recursion can borrow
/// through it. Early `break`s and `?`s still run the undo.
pub struct Applied<'a, R: Rules> {
    rules: &'a mut R,
}

impl<'a, R: Rules> Applied<'a, R> {
    pub fn new(rules: &'a mut R, mv: R::Move) -> Self {
        rules.apply(mv);
        Self { rules }
    }
}

impl<R: Rules> Deref for Applied<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.rules
    }
}

impl<R: Rules> DerefMut for Applied<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.rules
    }
}

impl<R: Rules> Drop for Applied<'_, R> {
    fn drop(&mut self) {
        self.rules.undo();
    }
}

impl Rules for Game {
    type Move = Move;

    fn legal_moves(&mut self) -> Vec<Move> {
        Game::legal_moves(self)
    }

    fn apply(&mut self, mv: Move) {
        self.push(mv);
    }

    fn undo(&mut self) {
        self.pop();
    }

    fn is_game_over(&mut self) -> bool {
        Game::is_game_over(self)
    }

    fn perspective(&self) -> Perspective {
        Perspective::of(self.side_to_move())
    }
}

impl Material for Position {
    fn count(&self, color: Color, kind: PieceKind) -> u32 {
        Position::count(self, color, kind)
    }
}

impl Material for Game {
    fn count(&self, color: Color, kind: PieceKind) -> u32 {
        self.position().count(color, kind)
    }
}
