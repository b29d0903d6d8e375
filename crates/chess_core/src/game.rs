//! A position together with the moves that led to it.
//!
//! `Game` is the unit the search works on: it owns one `Position` and an
//! undo stack, so moves can be pushed and popped in strict LIFO order.

use crate::board::{Position, Undo};
use crate::error::FenError;
use crate::movegen::{has_legal_move, legal_moves_into};
use crate::types::{Color, Move};

/// Why a game has ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
}

impl Outcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    /// Result in PGN notation.
    pub fn result(self) -> &'static str {
        match self.winner() {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None => "1/2-1/2",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    position: Position,
    stack: Vec<(Move, Undo)>,
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            stack: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::from_fen(fen).map(Self::from_position)
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// Number of moves pushed since construction.
    pub fn ply(&self) -> usize {
        self.stack.len()
    }

    pub fn moves_played(&self) -> impl Iterator<Item = Move> + '_ {
        self.stack.iter().map(|(mv, _)| *mv)
    }

    pub fn legal_moves(&mut self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        legal_moves_into(&mut self.position, &mut out);
        out
    }

    pub fn is_legal(&mut self, mv: Move) -> bool {
        self.legal_moves().contains(&mv)
    }

    /// Plays `mv`, which must be legal in the current position.
    pub fn push(&mut self, mv: Move) {
        let undo = self.position.make_move(mv);
        self.stack.push((mv, undo));
    }

    /// Takes back the most recent move, if any.
    pub fn pop(&mut self) -> Option<Move> {
        let (mv, undo) = self.stack.pop()?;
        self.position.unmake_move(mv, undo);
        Some(mv)
    }

    pub fn outcome(&mut self) -> Option<Outcome> {
        if !has_legal_move(&mut self.position) {
            let mover = self.position.side_to_move;
            return Some(if self.position.in_check(mover) {
                Outcome::Checkmate {
                    winner: mover.other(),
                }
            } else {
                Outcome::Stalemate
            });
        }
        if self.position.is_insufficient_material() {
            return Some(Outcome::InsufficientMaterial);
        }
        if self.position.is_seventy_five_move_draw() {
            return Some(Outcome::SeventyFiveMoves);
        }
        None
    }

    pub fn is_game_over(&mut self) -> bool {
        self.outcome().is_some()
    }

    /// "1-0", "0-1", "1/2-1/2", or "*" while the game is still running.
    pub fn result(&mut self) -> &'static str {
        self.outcome().map_or("*", Outcome::result)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
