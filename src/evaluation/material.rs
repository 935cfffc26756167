//! Material evaluation
//!
//! Base piece value plus piece-square placement for a single piece, and a
//! material-only balance for diagnostics.

use super::pst::pst_value;
use crate::config::EvalConfig;
use crate::position::Position;
use crate::types::{Piece, Score, Square};

/// Value of `piece` on `square` for its own side: material plus placement
#[inline]
pub fn material_and_placement(piece: Piece, square: Square, config: &EvalConfig) -> Score {
    config.piece_values.get(piece.kind) + pst_value(piece, square)
}

/// Evaluate material balance (White-positive, no placement)
pub fn evaluate_material(position: &Position, config: &EvalConfig) -> Score {
    position
        .occupied()
        .map(|(_, piece)| piece.color.sign() * config.piece_values.get(piece.kind))
        .sum()
}
