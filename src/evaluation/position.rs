//! Full position evaluation
//!
//! Combines material, placement, pawn connectivity and mobility into one
//! side-to-move-relative score.
//!
//! Two running totals are kept, one per colour, each in that colour's own
//! frame (bigger is better for that colour). One pass over the board adds
//! material and placement for every piece, plus connectivity for pawns. The
//! move generator is then consulted once and each side's mobility bonus is
//! added. The result is `total[side_to_move] - total[opponent]`, the negamax
//! convention: positive always favours whoever is about to move.

use super::material::material_and_placement;
use super::mobility::{mobility_bonus, Mobility};
use super::pawns::pawn_contribution;
use crate::config::EvalConfig;
use crate::move_gen::MoveGenerator;
use crate::position::Position;
use crate::types::{Color, PieceType, Score};
use tracing::trace;

/// One colour's share of the evaluation, in that colour's own frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideTotals {
    /// Piece values plus piece-square bonuses
    pub material: Score,
    /// Pawn-connectivity bonuses and penalties
    pub pawns: Score,
    /// Mobility bonus
    pub mobility: Score,
}

impl SideTotals {
    #[inline]
    pub fn total(&self) -> Score {
        self.material + self.pawns + self.mobility
    }
}

/// Per-colour breakdown of an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalBreakdown {
    pub side_to_move: Color,
    pub white: SideTotals,
    pub black: SideTotals,
    /// Raw move counts behind the mobility totals
    pub mobility: Mobility,
}

impl EvalBreakdown {
    #[inline]
    pub fn side(&self, color: Color) -> &SideTotals {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Side-to-move-relative score
    #[inline]
    pub fn score(&self) -> Score {
        self.side(self.side_to_move).total() - self.side(self.side_to_move.opponent()).total()
    }
}

/// Evaluate every term and keep the per-colour totals
pub fn breakdown<G>(position: &Position, generator: &G, config: &EvalConfig) -> EvalBreakdown
where
    G: MoveGenerator + ?Sized,
{
    let mut sides = [SideTotals::default(); 2];

    for (square, piece) in position.occupied() {
        let side = &mut sides[piece.color.index()];
        side.material += material_and_placement(piece, square, config);

        if piece.kind == PieceType::Pawn && config.uses_pawn_structure() {
            if let Some(contribution) = pawn_contribution(position, square, config) {
                // contribution is White-positive; fold it into the owner's frame
                side.pawns += piece.color.sign() * contribution;
            }
        }
    }

    let mobility = if config.uses_mobility() {
        let moves = generator.generate_legal_moves(position);
        Mobility::count(position, &moves)
    } else {
        Mobility::default()
    };
    for color in Color::ALL {
        sides[color.index()].mobility = mobility_bonus(mobility.of(color), config);
    }

    let [white, black] = sides;
    let result = EvalBreakdown {
        side_to_move: position.side_to_move(),
        white,
        black,
        mobility,
    };

    trace!(
        white_material = white.material,
        white_pawns = white.pawns,
        white_mobility = white.mobility,
        black_material = black.material,
        black_pawns = black.pawns,
        black_mobility = black.mobility,
        side_to_move = %result.side_to_move,
        score = result.score(),
        "evaluated position"
    );

    result
}

/// Evaluate full position, relative to the side to move
pub fn evaluate_position<G>(position: &Position, generator: &G, config: &EvalConfig) -> Score
where
    G: MoveGenerator + ?Sized,
{
    breakdown(position, generator, config).score()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_gen::{Move, MoveList, NoMoves};
    use crate::types::{Piece, Square};
    use std::cell::Cell;

    #[test]
    fn test_starting_position_static_terms_cancel() {
        let position = Position::starting();
        let result = breakdown(&position, &NoMoves, &EvalConfig::default());
        assert_eq!(result.white, result.black);
        assert_eq!(result.score(), 0);
        // every pawn on its home rank is unsupported
        assert_eq!(result.white.pawns, -8 * 15);
    }

    #[test]
    fn test_side_totals_are_in_own_frame() {
        let mut position = Position::empty(Color::Black);
        position.put(Square::new(35), Piece::new(Color::Black, PieceType::Pawn));
        position.put(Square::new(44), Piece::new(Color::Black, PieceType::Pawn));

        let result = breakdown(&position, &NoMoves, &EvalConfig::default());
        // d5 supported by e6, e6 unsupported
        assert_eq!(result.black.pawns, 10 - 15);
        assert_eq!(result.white, SideTotals::default());
    }

    #[test]
    fn test_generator_called_once() {
        let calls = Cell::new(0);
        let counting = |_: &Position| {
            calls.set(calls.get() + 1);
            MoveList::new()
        };
        evaluate_position(&Position::starting(), &counting, &EvalConfig::default());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_baseline_skips_generator() {
        let calls = Cell::new(0);
        let counting = |_: &Position| {
            calls.set(calls.get() + 1);
            MoveList::new()
        };
        let score = evaluate_position(&Position::starting(), &counting, &EvalConfig::baseline());
        assert_eq!(calls.get(), 0);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_zero_pawn_weights_leave_pawn_totals_empty() {
        let result = breakdown(&Position::starting(), &NoMoves, &EvalConfig::baseline());
        assert_eq!(result.white.pawns, 0);
        assert_eq!(result.black.pawns, 0);
    }

    #[test]
    fn test_mobility_credited_to_mover_colour() {
        let position = Position::starting();
        let black_moves = |_: &Position| {
            let mut moves = MoveList::new();
            // b8-c6, g8-f6
            moves.push(Move::new(Square::new(57), Square::new(42)));
            moves.push(Move::new(Square::new(62), Square::new(45)));
            moves
        };
        let result = breakdown(&position, &black_moves, &EvalConfig::default());
        assert_eq!(result.black.mobility, 10);
        assert_eq!(result.white.mobility, 0);
        // White to move, Black has the extra activity
        assert_eq!(result.score(), -10);
    }
}
