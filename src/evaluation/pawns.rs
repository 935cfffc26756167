//! Pawn-connectivity evaluation
//!
//! A pawn is **connected** when a friendly pawn stands diagonally behind it,
//! one rank closer to its own back rank, on either neighbouring file. Pawns on
//! the a- and h-files only have one such square to check.
//!
//! ```text
//!  White pawn on e5 is supported from d4 or f4:
//!
//!  5  .  .  .  P  .  .
//!  4  .  .  P  .  P  .     (either one is enough)
//!        c  d  e  f  g
//! ```
//!
//! Connected pawns earn a bonus and unsupported pawns a penalty. The weights
//! are kept White-positive in a single table keyed by colour; the aggregator
//! turns them back into the owner's frame with [`Color::sign`].

use crate::config::EvalConfig;
use crate::position::Position;
use crate::types::{Color, Piece, PieceType, Score, Square};

const CONNECTED: usize = 0;
const ISOLATED: usize = 1;

/// Rank step from a pawn towards its own back rank
#[inline]
const fn backward(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// White-positive `[connected, isolated]` weights for each colour
#[inline]
fn signed_weights(config: &EvalConfig) -> [[Score; 2]; 2] {
    let bonus = config.pawn_connected_bonus;
    let penalty = config.pawn_isolated_penalty;
    [
        // White
        [bonus, -penalty],
        // Black
        [-bonus, penalty],
    ]
}

/// Whether a friendly pawn of `color` supports `square` diagonally from behind
pub fn is_connected(position: &Position, square: Square, color: Color) -> bool {
    let friendly_pawn = Some(Piece::new(color, PieceType::Pawn));
    let back = backward(color);

    [-1, 1].into_iter().any(|file_delta| {
        square
            .offset(file_delta, back)
            .is_some_and(|support| position.piece_at(support) == friendly_pawn)
    })
}

/// White-positive connectivity score of the pawn on `square`.
///
/// Returns `None` when `square` does not hold a pawn; only real pawns are
/// scored.
pub fn pawn_contribution(position: &Position, square: Square, config: &EvalConfig) -> Option<Score> {
    let piece = position.piece_at(square)?;
    if piece.kind != PieceType::Pawn {
        return None;
    }

    let column = if is_connected(position, square, piece.color) {
        CONNECTED
    } else {
        ISOLATED
    };
    Some(signed_weights(config)[piece.color.index()][column])
}
