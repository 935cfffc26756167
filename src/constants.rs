//! # Evaluation Constants - Piece Values & Term Weights
//!
//! ## Overview
//!
//! This module centralizes the fixed numbers the evaluator is built from: base
//! piece values (in centipawns), the weights of the pawn-structure and mobility
//! terms, and the capacity of a generated move list. [`crate::config::EvalConfig`]
//! defaults to exactly these values.
//!
//! ## Centipawn Valuation System
//!
//! - **Pawn**: 100 centipawns (reference unit)
//! - **Knight**: 300 centipawns
//! - **Bishop**: 300 centipawns
//! - **Rook**: 500 centipawns
//! - **Queen**: 900 centipawns
//! - **King**: 1,000,000 centipawns
//!
//! ### Why 1,000,000 for King?
//!
//! Both sides always have exactly one king, so in a legal position the king
//! values cancel. The huge value only matters when a search explores a line in
//! which a king has been captured: that line then dwarfs every other term and
//! is never preferred.
//!
//! ### Queen Value
//!
//! An older variant of this evaluator valued the queen at 15,000, which made
//! the engine refuse any trade involving its queen. The canonical set uses 900.

use crate::types::{PieceType, Score};

pub const PAWN_VALUE: Score = 100;
pub const KNIGHT_VALUE: Score = 300;
pub const BISHOP_VALUE: Score = 300;
pub const ROOK_VALUE: Score = 500;
pub const QUEEN_VALUE: Score = 900;
pub const KING_VALUE: Score = 1_000_000;

/// Base values indexed by [`PieceType::index`]
pub const PIECE_VALUE: [Score; 6] = [
    PAWN_VALUE,
    KNIGHT_VALUE,
    BISHOP_VALUE,
    ROOK_VALUE,
    QUEEN_VALUE,
    KING_VALUE,
];

/// Bonus per legal move available to a side
pub const MOBILITY_WEIGHT: Score = 5;

/// Bonus for a pawn with a friendly pawn diagonally behind it
pub const PAWN_CONNECTED_BONUS: Score = 10;

/// Penalty for a pawn without diagonal support
pub const PAWN_ISOLATED_PENALTY: Score = 15;

/// Capacity of a generated move list. No legal chess position exceeds 218.
pub const MAX_MOVES: usize = 256;

/// Standard initial position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Base value of a piece type
#[inline]
pub const fn piece_value(kind: PieceType) -> Score {
    PIECE_VALUE[kind.index()]
}
