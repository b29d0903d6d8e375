use std::fmt;

use crate::error::FenError;
use crate::types::*;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmove clock value at which the game ends without a claim.
pub const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }

    pub fn all() -> Self {
        Self {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }

    /// Drops every right that depends on a king or rook standing on `square`.
    fn touch(&mut self, square: u8) {
        match square {
            0 => self.wq = false,
            4 => {
                self.wk = false;
                self.wq = false;
            }
            7 => self.wk = false,
            56 => self.bq = false,
            60 => {
                self.bk = false;
                self.bq = false;
            }
            63 => self.bk = false,
            _ => {}
        }
    }

    fn swapped(&self) -> Self {
        Self {
            wk: self.bk,
            wq: self.bq,
            bk: self.wk,
            bq: self.wq,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(u8, u8)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<u8>,  // square actually captured in en-passant
}

/// Rook hop for a castling king move, keyed by color and king squares.
fn castle_rook_squares(color: Color, from: u8, to: u8) -> Option<(u8, u8)> {
    match (color, from, to) {
        (Color::White, 4, 6) => Some((7, 5)),
        (Color::White, 4, 2) => Some((0, 3)),
        (Color::Black, 60, 62) => Some((63, 61)),
        (Color::Black, 60, 58) => Some((56, 59)),
        _ => None,
    }
}

fn is_last_rank(color: Color, square: u8) -> bool {
    match color {
        Color::White => rank_of(square) == 7,
        Color::Black => rank_of(square) == 0,
    }
}

impl Position {
    pub fn empty() -> Self {
        Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position {
            castling: CastlingRights::all(),
            ..Position::empty()
        };

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece {
                color: Color::White,
                kind,
            });
            p.board[8 + f] = Some(Piece {
                color: Color::White,
                kind: PieceKind::Pawn,
            });
            p.board[48 + f] = Some(Piece {
                color: Color::Black,
                kind: PieceKind::Pawn,
            });
            p.board[56 + f] = Some(Piece {
                color: Color::Black,
                kind,
            });
        }
        p
    }

    /// Parses Forsyth-Edwards Notation. The two clock fields are optional.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let mut pos = Position::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let piece = Piece::from_char(ch).ok_or(FenError::Piece(ch))?;
                    let square = sq(file, rank).ok_or(FenError::RankWidth {
                        rank: rank as usize + 1,
                    })?;
                    pos.board[square as usize] = Some(piece);
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::RankWidth {
                        rank: rank as usize + 1,
                    });
                }
            }
            if file != 8 {
                return Err(FenError::RankWidth {
                    rank: rank as usize + 1,
                });
            }
        }

        pos.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => pos.castling.wk = true,
                    'Q' => pos.castling.wq = true,
                    'k' => pos.castling.bk = true,
                    'q' => pos.castling.bq = true,
                    _ => return Err(FenError::Castling(c)),
                }
            }
        }

        pos.en_passant = match parts[3] {
            "-" => None,
            coord => Some(
                coord_to_sq(coord).ok_or_else(|| FenError::EnPassant(coord.to_string()))?,
            ),
        };

        pos.halfmove_clock = parse_clock(parts.get(4).copied(), "halfmove clock", 0)?;
        pos.fullmove_number = parse_clock(parts.get(5).copied(), "fullmove number", 1)?;

        Ok(pos)
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(90);
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.board[rank * 8 + file] {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        let before = out.len();
        for (flag, c) in [
            (self.castling.wk, 'K'),
            (self.castling.wq, 'Q'),
            (self.castling.bk, 'k'),
            (self.castling.bq, 'q'),
        ] {
            if flag {
                out.push(c);
            }
        }
        if out.len() == before {
            out.push('-');
        }

        out.push(' ');
        match self.en_passant {
            Some(ep) => out.push_str(&sq_to_coord(ep)),
            None => out.push('-'),
        }

        out.push_str(&format!(
            " {} {}",
            self.halfmove_clock, self.fullmove_number
        ));
        out
    }

    /// The same position seen from the other side: ranks flipped, colors
    /// swapped, side to move swapped.
    pub fn mirrored(&self) -> Self {
        let mut board = [None; 64];
        for (i, pc) in self.board.iter().enumerate() {
            if let Some(pc) = pc {
                board[flip_rank(i as u8) as usize] = Some(Piece {
                    color: pc.color.other(),
                    kind: pc.kind,
                });
            }
        }
        Position {
            board,
            side_to_move: self.side_to_move.other(),
            castling: self.castling.swapped(),
            en_passant: self.en_passant.map(flip_rank),
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        self.board
            .iter()
            .position(|pc| {
                *pc == Some(Piece {
                    color: c,
                    kind: PieceKind::King,
                })
            })
            .map(|i| i as u8)
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    /// Number of `color` pieces of `kind` on the board.
    pub fn count(&self, color: Color, kind: PieceKind) -> u32 {
        let wanted = Some(Piece { color, kind });
        self.board.iter().filter(|&&pc| pc == wanted).count() as u32
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    fn holds(&self, square: u8, by: Color, kinds: &[PieceKind]) -> bool {
        matches!(self.piece_at(square), Some(pc) if pc.color == by && kinds.contains(&pc.kind))
    }

    /// First occupied square walking from `target` along `(df, dr)`.
    fn first_piece_along(&self, target: u8, (df, dr): (i8, i8)) -> Option<u8> {
        let mut f = file_of(target) + df;
        let mut r = rank_of(target) + dr;
        while let Some(s) = sq(f, r) {
            if self.piece_at(s).is_some() {
                return Some(s);
            }
            f += df;
            r += dr;
        }
        None
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);

        // A pawn attacking `target` sits one rank behind it from its own side.
        let pawn_rank = match by {
            Color::White => tr - 1,
            Color::Black => tr + 1,
        };
        let pawn_hit = [-1i8, 1].iter().any(|df| {
            sq(tf + df, pawn_rank).is_some_and(|s| self.holds(s, by, &[PieceKind::Pawn]))
        });
        if pawn_hit {
            return true;
        }

        let leaper_hit = |deltas: &[(i8, i8)], kind: PieceKind| {
            deltas
                .iter()
                .any(|(df, dr)| sq(tf + df, tr + dr).is_some_and(|s| self.holds(s, by, &[kind])))
        };
        if leaper_hit(&KNIGHT_DELTAS, PieceKind::Knight) || leaper_hit(&KING_DELTAS, PieceKind::King)
        {
            return true;
        }

        let slider_hit = |dirs: &[(i8, i8)], kinds: &[PieceKind]| {
            dirs.iter().any(|&dir| {
                self.first_piece_along(target, dir)
                    .is_some_and(|s| self.holds(s, by, kinds))
            })
        };
        slider_hit(&DIAGONALS, &[PieceKind::Bishop, PieceKind::Queen])
            || slider_hit(&ORTHOGONALS, &[PieceKind::Rook, PieceKind::Queen])
    }

    /// Neither side can ever deliver mate: bare kings, a single minor piece,
    /// or bishops that all stand on one square color.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = 0;
        let mut knights = 0;
        let mut bishop_shades = [false; 2];
        for (i, pc) in self.board.iter().enumerate() {
            let Some(pc) = pc else { continue };
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                PieceKind::Knight => {
                    minors += 1;
                    knights += 1;
                }
                PieceKind::Bishop => {
                    minors += 1;
                    let shade = ((file_of(i as u8) + rank_of(i as u8)) % 2) as usize;
                    bishop_shades[shade] = true;
                }
            }
        }
        minors <= 1 || (knights == 0 && !(bishop_shades[0] && bishop_shades[1]))
    }

    pub fn is_seventy_five_move_draw(&self) -> bool {
        self.halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES
    }

    pub fn make_move(&mut self, mv: Move) -> Undo {
        let Move { from, to, .. } = mv;
        let moved = self.piece_at(from).expect("no piece on from-square");
        let mut undo = Undo {
            captured: self.piece_at(to),
            castling: self.castling.clone(),
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            moved_piece: moved,
            rook_move: None,
            ep_captured_sq: None,
        };

        self.en_passant = None;

        if mv.is_en_passant {
            let behind = match moved.color {
                Color::White => rank_of(to) - 1,
                Color::Black => rank_of(to) + 1,
            };
            if let Some(cs) = sq(file_of(to), behind) {
                undo.captured = self.piece_at(cs);
                undo.ep_captured_sq = Some(cs);
                self.set_piece(cs, None);
            }
        }

        self.set_piece(from, None);
        let landed = if moved.kind == PieceKind::Pawn && is_last_rank(moved.color, to) {
            Piece {
                color: moved.color,
                kind: mv.promo.unwrap_or(PieceKind::Queen),
            }
        } else {
            moved
        };
        self.set_piece(to, Some(landed));

        if mv.is_castle
            && moved.kind == PieceKind::King
            && let Some((rf, rt)) = castle_rook_squares(moved.color, from, to)
        {
            let rook = self.piece_at(rf);
            self.set_piece(rf, None);
            self.set_piece(rt, rook);
            undo.rook_move = Some((rf, rt));
        }

        self.castling.touch(from);
        self.castling.touch(to);

        if moved.kind == PieceKind::Pawn && (rank_of(to) - rank_of(from)).abs() == 2 {
            self.en_passant = sq(file_of(from), (rank_of(from) + rank_of(to)) / 2);
        }

        let resets_clock = moved.kind == PieceKind::Pawn || undo.captured.is_some();
        self.halfmove_clock = if resets_clock {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.other();

        undo
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rf, rt)) = undo.rook_move {
            let rook = self.piece_at(rt);
            self.set_piece(rt, None);
            self.set_piece(rf, rook);
        }

        // The moved piece goes back as it was, which also reverts promotions.
        self.set_piece(mv.to, None);
        self.set_piece(mv.from, Some(undo.moved_piece));

        match undo.ep_captured_sq {
            Some(cs) => self.set_piece(cs, undo.captured),
            None => self.set_piece(mv.to, undo.captured),
        }
    }
}

fn parse_clock(field: Option<&str>, name: &'static str, default: u32) -> Result<u32, FenError> {
    match field {
        None => Ok(default),
        Some(v) => v.parse().map_err(|_| FenError::Clock {
            field: name,
            value: v.to_string(),
        }),
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::startpos()
    }
}

/// Eight rows of piece letters, rank 8 first, `.` for empty squares.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            let row: Vec<String> = (0..8)
                .map(|file| match self.board[rank * 8 + file] {
                    Some(pc) => pc.to_char().to_string(),
                    None => ".".to_string(),
                })
                .collect();
            write!(f, "{}", row.join(" "))?;
            if rank > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
