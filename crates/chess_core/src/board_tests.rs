use super::*;

#[test]
fn test_startpos_matches_start_fen() {
    assert_eq!(Position::from_fen(START_FEN).unwrap(), Position::startpos());
    assert_eq!(Position::startpos().to_fen(), START_FEN);
}

#[test]
fn test_fen_keeps_castling_ep_and_clocks() {
    let fen = "rnbqkbnr/pppp1ppp/8/4pP2/8/8/PPPPP1PP/RNBQKBNR w Kq e6 0 3";
    let pos = Position::from_fen(fen).unwrap();
    assert_eq!(pos.en_passant, coord_to_sq("e6"));
    assert!(pos.castling.wk && !pos.castling.wq && !pos.castling.bk && pos.castling.bq);
    assert_eq!(pos.fullmove_number, 3);
    assert_eq!(pos.to_fen(), fen);
}

#[test]
fn test_fen_clock_fields_are_optional() {
    let pos = Position::from_fen("8/8/8/4k3/8/4K3/8/8 b - -").unwrap();
    assert_eq!(pos.halfmove_clock, 0);
    assert_eq!(pos.fullmove_number, 1);
    assert_eq!(pos.side_to_move, Color::Black);
}

#[test]
fn test_fen_errors() {
    assert_eq!(
        Position::from_fen("8/8/8 w"),
        Err(FenError::MissingFields(2))
    );
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/8 w - -"),
        Err(FenError::RankCount(7))
    );
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/8/7 w - -"),
        Err(FenError::RankWidth { rank: 1 })
    );
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/8/7x w - -"),
        Err(FenError::Piece('x'))
    );
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/8/8 x - -"),
        Err(FenError::SideToMove("x".to_string()))
    );
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/8/8 w KX -"),
        Err(FenError::Castling('X'))
    );
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/8/8 w - z9"),
        Err(FenError::EnPassant("z9".to_string()))
    );
    assert!(matches!(
        Position::from_fen("8/8/8/8/8/8/8/8 w - - x 1"),
        Err(FenError::Clock { field: "halfmove clock", .. })
    ));
}

#[test]
fn test_count_pieces() {
    let pos = Position::startpos();
    assert_eq!(pos.count(Color::White, PieceKind::Pawn), 8);
    assert_eq!(pos.count(Color::Black, PieceKind::Knight), 2);
    assert_eq!(pos.count(Color::Black, PieceKind::Queen), 1);
    assert_eq!(pos.count(Color::White, PieceKind::King), 1);
}

#[test]
fn test_mirrored_swaps_sides() {
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w Kq -")
            .unwrap();
    let m = pos.mirrored();
    assert_eq!(m.side_to_move, Color::Black);
    assert!(m.castling.bk && m.castling.wq && !m.castling.wk && !m.castling.bq);
    for kind in PieceKind::ALL {
        assert_eq!(pos.count(Color::White, kind), m.count(Color::Black, kind));
        assert_eq!(pos.count(Color::Black, kind), m.count(Color::White, kind));
    }
    assert_eq!(m.mirrored(), pos);
}

#[test]
fn test_make_unmake_restores_position() {
    // Kiwipete has castles, promotions-in-waiting and captures.
    let mut pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let before = pos.clone();
    for mv in crate::movegen::legal_moves(&pos) {
        let undo = pos.make_move(mv);
        pos.unmake_move(mv, undo);
        assert_eq!(pos, before, "unmake did not restore after {mv:?}");
    }
}

#[test]
fn test_en_passant_capture_and_undo() {
    let mut pos =
        Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3").unwrap();
    let before = pos.clone();
    let mv = Move {
        is_en_passant: true,
        ..Move::new(coord_to_sq("e5").unwrap(), coord_to_sq("f6").unwrap())
    };
    let undo = pos.make_move(mv);
    assert_eq!(pos.piece_at(coord_to_sq("f5").unwrap()), None);
    assert_eq!(pos.count(Color::Black, PieceKind::Pawn), 7);
    pos.unmake_move(mv, undo);
    assert_eq!(pos, before);
}

#[test]
fn test_castling_moves_rook_and_clears_rights() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = Move {
        is_castle: true,
        ..Move::new(4, 6)
    };
    let undo = pos.make_move(mv);
    assert_eq!(pos.piece_at(5).map(|p| p.kind), Some(PieceKind::Rook));
    assert_eq!(pos.piece_at(7), None);
    assert!(!pos.castling.wk && !pos.castling.wq);
    assert!(pos.castling.bk && pos.castling.bq);
    pos.unmake_move(mv, undo);
    assert_eq!(pos.piece_at(7).map(|p| p.kind), Some(PieceKind::Rook));
}

#[test]
fn test_promotion_and_undo() {
    let mut pos = Position::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
    let before = pos.clone();
    let mv = Move {
        promo: Some(PieceKind::Knight),
        ..Move::new(coord_to_sq("e7").unwrap(), coord_to_sq("e8").unwrap())
    };
    let undo = pos.make_move(mv);
    assert_eq!(pos.count(Color::White, PieceKind::Knight), 1);
    assert_eq!(pos.count(Color::White, PieceKind::Pawn), 0);
    pos.unmake_move(mv, undo);
    assert_eq!(pos, before);
}

#[test]
fn test_display_startpos() {
    let expected = "\
r n b q k b n r
p p p p p p p p
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
P P P P P P P P
R N B Q K B N R";
    assert_eq!(Position::startpos().to_string(), expected);
}
