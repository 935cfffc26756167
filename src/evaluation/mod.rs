//! Position evaluation with piece-square tables
//!
//! Evaluates chess positions using:
//! - Material count (piece values)
//! - Positional bonuses (piece-square tables)
//! - Pawn connectivity (diagonal chain support)
//! - Mobility (number of legal moves)
//!
//! Scores are relative to the side to move, which is what a negamax search
//! expects: `evaluate(p) == -evaluate(p with the other side to move)` for the
//! static terms.
//!
//! ## Module Organization
//!
//! - `pst` - Piece-square tables for positional evaluation
//! - `material` - Material and placement per piece, material balance
//! - `pawns` - Connected/unsupported pawn scoring
//! - `mobility` - Move counts per colour
//! - `position` - Full position evaluation (all terms combined)
//!
//! ## Usage
//!
//! ```
//! use chess_eval::{Evaluator, NoMoves, Position};
//!
//! let evaluator = Evaluator::new(NoMoves);
//! assert_eq!(evaluator.evaluate(&Position::starting()), 0);
//! ```
//!
//! ## Concurrency
//!
//! Evaluation keeps no state between calls and never mutates its input. An
//! [`Evaluator`] can be shared between search threads (`Arc<Evaluator<_>>`)
//! as long as its generator is `Sync`.

pub mod material;
pub mod mobility;
pub mod pawns;
pub mod position;
pub mod pst;

pub use material::evaluate_material;
pub use position::{breakdown, evaluate_position, EvalBreakdown, SideTotals};

use crate::config::EvalConfig;
use crate::move_gen::rules::RulesGenerator;
use crate::move_gen::MoveGenerator;
use crate::position::Position;
use crate::types::Score;

/// Evaluator bound to a weight set and a move generator
#[derive(Debug, Clone)]
pub struct Evaluator<G = RulesGenerator> {
    config: EvalConfig,
    generator: G,
}

impl<G: MoveGenerator> Evaluator<G> {
    /// Evaluator with the canonical weights
    pub fn new(generator: G) -> Self {
        Self::with_config(generator, EvalConfig::default())
    }

    pub fn with_config(generator: G, config: EvalConfig) -> Self {
        Evaluator { config, generator }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Score `position` for the side to move (positive = good for the mover)
    pub fn evaluate(&self, position: &Position) -> Score {
        evaluate_position(position, &self.generator, &self.config)
    }

    /// Same evaluation, with every term broken out per colour
    pub fn breakdown(&self, position: &Position) -> EvalBreakdown {
        breakdown(position, &self.generator, &self.config)
    }
}

impl Default for Evaluator<RulesGenerator> {
    fn default() -> Self {
        Evaluator::new(RulesGenerator)
    }
}

/// Evaluate with the canonical weights
///
/// # Examples
///
/// ```
/// use chess_eval::{evaluate, Position, RulesGenerator};
///
/// // White to move has 20 legal moves, Black's mobility is not generated
/// assert_eq!(evaluate(&Position::starting(), &RulesGenerator), 100);
/// ```
pub fn evaluate<G>(position: &Position, generator: &G) -> Score
where
    G: MoveGenerator + ?Sized,
{
    evaluate_position(position, generator, &EvalConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_gen::NoMoves;
    use crate::types::Color;

    #[test]
    fn test_evaluator_matches_free_function() {
        let position = Position::starting().with_side_to_move(Color::Black);
        let evaluator = Evaluator::new(RulesGenerator);
        assert_eq!(evaluator.evaluate(&position), evaluate(&position, &RulesGenerator));
        assert_eq!(evaluator.breakdown(&position).score(), evaluator.evaluate(&position));
    }

    #[test]
    fn test_with_config_is_used() {
        let evaluator = Evaluator::with_config(RulesGenerator, EvalConfig::baseline());
        assert_eq!(evaluator.config(), &EvalConfig::baseline());
        assert_eq!(evaluator.evaluate(&Position::starting()), 0);
    }

    #[test]
    fn test_evaluator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Evaluator<RulesGenerator>>();
        assert_send_sync::<Evaluator<NoMoves>>();
    }
}
