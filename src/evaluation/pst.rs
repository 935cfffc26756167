//! Piece-square tables
//!
//! One 64-entry table per piece type, in centipawns, written from White's
//! point of view and indexed by square (`a1 = 0` .. `h8 = 63`, rank 1 in the
//! first row below). A Black piece on square `s` reads its bonus from
//! [`mirror`]`(s)`, so both colours share the same tables.

use crate::board::mirror;
use crate::types::{Color, Piece, PieceType, Score, Square};

/// Largest absolute bonus found in any table
pub const MAX_BONUS: Score = 50;

/// Pawns: push to the centre, keep the d/e pawns off their home squares
#[rustfmt::skip]
pub const PAWN_PST: [Score; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,   // rank 1
      5,  10,  10, -20, -20,  10,  10,   5,   // rank 2
      5,  -5, -10,   0,   0, -10,  -5,   5,   // rank 3
      0,   0,   0,  20,  20,   0,   0,   0,   // rank 4
      5,   5,  10,  25,  25,  10,   5,   5,   // rank 5
     10,  10,  20,  30,  30,  20,  10,  10,   // rank 6
     50,  50,  50,  50,  50,  50,  50,  50,   // rank 7
      0,   0,   0,   0,   0,   0,   0,   0,   // rank 8
];

/// Knights: centralize, avoid the rim
#[rustfmt::skip]
pub const KNIGHT_PST: [Score; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,   // rank 1
    -40, -20,   0,   5,   5,   0, -20, -40,   // rank 2
    -30,   5,  10,  15,  15,  10,   5, -30,   // rank 3
    -30,   0,  15,  20,  20,  15,   0, -30,   // rank 4
    -30,   5,  15,  20,  20,  15,   5, -30,   // rank 5
    -30,   0,  10,  15,  15,  10,   0, -30,   // rank 6
    -40, -20,   0,   0,   0,   0, -20, -40,   // rank 7
    -50, -40, -30, -30, -30, -30, -40, -50,   // rank 8
];

/// Bishops: avoid corners and edges
#[rustfmt::skip]
pub const BISHOP_PST: [Score; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,   // rank 1
    -10,   5,   0,   0,   0,   0,   5, -10,   // rank 2
    -10,  10,  10,  10,  10,  10,  10, -10,   // rank 3
    -10,   0,  10,  10,  10,  10,   0, -10,   // rank 4
    -10,   5,   5,  10,  10,   5,   5, -10,   // rank 5
    -10,   0,   5,  10,  10,   5,   0, -10,   // rank 6
    -10,   0,   0,   0,   0,   0,   0, -10,   // rank 7
    -20, -10, -10, -10, -10, -10, -10, -20,   // rank 8
];

/// Rooks: central files, seventh rank
#[rustfmt::skip]
pub const ROOK_PST: [Score; 64] = [
      0,   0,   5,  10,  10,   5,   0,   0,   // rank 1
      0,   0,   5,  10,  10,   5,   0,   0,   // rank 2
     -5,   0,   5,  10,  10,   5,   0,  -5,   // rank 3
     -5,   0,   5,  10,  10,   5,   0,  -5,   // rank 4
     -5,   0,   5,  10,  10,   5,   0,  -5,   // rank 5
     -5,   0,   5,  10,  10,   5,   0,  -5,   // rank 6
      5,  10,  10,  10,  10,  10,  10,   5,   // rank 7
      0,   0,   5,  15,  15,   5,   0,   0,   // rank 8
];

/// Queens: mild centralization
#[rustfmt::skip]
pub const QUEEN_PST: [Score; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,   // rank 1
    -10,   0,   5,   0,   0,   0,   0, -10,   // rank 2
    -10,   5,   5,   5,   5,   5,   0, -10,   // rank 3
     -5,   0,   5,   5,   5,   5,   0,  -5,   // rank 4
      0,   0,   5,   5,   5,   5,   0,  -5,   // rank 5
    -10,   0,   5,   5,   5,   5,   0, -10,   // rank 6
    -10,   5,   0,   0,   0,   0,   0, -10,   // rank 7
    -20, -10, -10,  -5,  -5, -10, -10, -20,   // rank 8
];

/// King: centralization (active-king table; there is no separate endgame table)
#[rustfmt::skip]
pub const KING_PST: [Score; 64] = [
    -50, -30, -30, -30, -30, -30, -30, -50,   // rank 1
    -30, -30,   0,   0,   0,   0, -30, -30,   // rank 2
    -30, -10,  20,  30,  30,  20, -10, -30,   // rank 3
    -30, -10,  30,  40,  40,  30, -10, -30,   // rank 4
    -30, -10,  30,  40,  40,  30, -10, -30,   // rank 5
    -30, -10,  20,  30,  30,  20, -10, -30,   // rank 6
    -30, -20, -10,   0,   0, -10, -20, -30,   // rank 7
    -50, -40, -30, -20, -20, -30, -40, -50,   // rank 8
];

/// Table for a piece type
#[inline]
pub fn table(kind: PieceType) -> &'static [Score; 64] {
    match kind {
        PieceType::Pawn => &PAWN_PST,
        PieceType::Knight => &KNIGHT_PST,
        PieceType::Bishop => &BISHOP_PST,
        PieceType::Rook => &ROOK_PST,
        PieceType::Queen => &QUEEN_PST,
        PieceType::King => &KING_PST,
    }
}

/// Positional bonus of `piece` standing on `square`
///
/// White reads its table directly; Black reads the mirrored square.
#[inline]
pub fn pst_value(piece: Piece, square: Square) -> Score {
    let index = match piece.color {
        Color::White => square,
        Color::Black => mirror(square),
    };
    table(piece.kind)[index.index()]
}
