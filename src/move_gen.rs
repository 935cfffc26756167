//! Move generation seam
//!
//! The evaluator does not generate moves itself. It consumes the output of a
//! legal-move generator through the [`MoveGenerator`] trait, once per
//! evaluation, and only looks at where each move starts.
//!
//! ## Generator Contract
//!
//! - Moves are generated for `position.side_to_move()` only.
//! - At most [`MAX_MOVES`] moves are produced. [`MoveList`] is a fixed-capacity
//!   vector; pushing beyond it panics, since that is a broken generator rather
//!   than something evaluation can recover from.
//!
//! ## Provided Generators
//!
//! - [`NoMoves`] - yields nothing; turns the evaluator into a purely static one
//! - [`rules::RulesGenerator`] - real legal moves from the shared rules crate
//! - any `Fn(&Position) -> MoveList` closure

pub mod rules;

pub use crate::constants::MAX_MOVES;
use crate::position::Position;
use crate::types::Square;
use arrayvec::ArrayVec;

/// A move as seen by the evaluator: origin and destination squares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

/// Bounded list of generated moves
pub type MoveList = ArrayVec<Move, MAX_MOVES>;

/// Source of legal moves for a position
pub trait MoveGenerator {
    /// Generate the legal moves of the side to move
    fn generate_legal_moves(&self, position: &Position) -> MoveList;
}

impl<F> MoveGenerator for F
where
    F: Fn(&Position) -> MoveList,
{
    fn generate_legal_moves(&self, position: &Position) -> MoveList {
        self(position)
    }
}

/// Generator that never produces a move
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMoves;

impl MoveGenerator for NoMoves {
    #[inline]
    fn generate_legal_moves(&self, _position: &Position) -> MoveList {
        MoveList::new()
    }
}
