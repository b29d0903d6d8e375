//! Tests for game-ending conditions
//!
//! - Checkmate and stalemate
//! - Seventy-five-move rule
//! - Insufficient material

use chess_core::{Color, Game, Outcome, Position};

fn outcome(fen: &str) -> Option<Outcome> {
    Game::from_fen(fen).unwrap().outcome()
}

// =============================================================================
// Checkmate / Stalemate
// =============================================================================

#[test]
fn test_scholars_mate_is_checkmate() {
    let fen = "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4";
    assert_eq!(
        outcome(fen),
        Some(Outcome::Checkmate {
            winner: Color::White
        })
    );
}

#[test]
fn test_check_is_not_checkmate() {
    let fen = "rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2";
    let mut game = Game::from_fen(fen).unwrap();
    assert!(game.position().in_check(Color::Black));
    assert_eq!(game.outcome(), None);
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    assert_eq!(outcome("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1"), Some(Outcome::Stalemate));
}

// =============================================================================
// Seventy-Five-Move Rule
// =============================================================================

#[test]
fn test_seventy_five_move_rule_at_150_halfmoves() {
    let fen = "8/8/8/4k3/8/4K3/4P3/8 w - - 150 90";
    assert!(Position::from_fen(fen).unwrap().is_seventy_five_move_draw());
    assert_eq!(outcome(fen), Some(Outcome::SeventyFiveMoves));
}

#[test]
fn test_seventy_five_move_rule_at_149_halfmoves() {
    assert_eq!(outcome("8/8/8/4k3/8/4K3/4P3/8 w - - 149 90"), None);
}

#[test]
fn test_pawn_move_resets_halfmove_clock() {
    let mut game = Game::from_fen("8/8/8/4k3/8/3K4/4P3/8 w - - 149 90").unwrap();
    let pawn_move = game
        .legal_moves()
        .into_iter()
        .find(|m| m.from == 12)
        .expect("Should have a pawn move available");
    game.push(pawn_move);
    assert_eq!(game.position().halfmove_clock, 0);
    assert_eq!(game.outcome(), None);
}

// =============================================================================
// Insufficient Material
// =============================================================================

#[test]
fn test_insufficient_material() {
    for fen in [
        "8/8/8/4k3/8/4K3/8/8 w - - 0 1",       // K v K
        "8/8/8/4k3/8/4KB2/8/8 w - - 0 1",      // K+B v K
        "8/8/8/4k3/8/4KN2/8/8 w - - 0 1",      // K+N v K
        "8/8/4n3/4k3/8/4K3/8/8 w - - 0 1",     // K v K+N
        "5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1",   // bishops on one shade
    ] {
        assert_eq!(outcome(fen), Some(Outcome::InsufficientMaterial), "{fen}");
    }
}

#[test]
fn test_sufficient_material() {
    for fen in [
        "2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1",   // opposite-shade bishops
        "8/8/8/4k3/8/4K3/4P3/8 w - - 0 1",     // pawn
        "8/8/8/4k3/8/4K3/8/4R3 w - - 0 1",     // rook
        "8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1",     // queen
        "8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1",    // two knights
    ] {
        assert_eq!(outcome(fen), None, "{fen}");
    }
}

// =============================================================================
// Clock limits
// =============================================================================

#[test]
fn test_outcome_with_maximal_halfmove_clock() {
    let fen = "4k3/8/8/8/8/8/8/R3K3 w - - 4294967295 1";
    let mut game = Game::from_fen(fen).unwrap();
    assert!(game.is_game_over());
    assert_eq!(game.outcome(), Some(Outcome::SeventyFiveMoves));
    assert_eq!(game.legal_moves().len(), 15);
}

#[test]
fn test_clocks_saturate_and_unwind() {
    let fen = "4k3/8/8/8/8/8/8/R3K3 b - - 4294967295 4294967295";
    let mut game = Game::from_fen(fen).unwrap();
    let before = game.clone();

    let king_move = game.legal_moves()[0];
    game.push(king_move);
    assert_eq!(game.position().halfmove_clock, u32::MAX);
    assert_eq!(game.position().fullmove_number, u32::MAX);

    game.pop();
    assert_eq!(game, before);
}
