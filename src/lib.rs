//! # chess_eval
//!
//! Static position evaluation for an alpha-beta chess search.
//!
//! Given a board snapshot and the side to move, [`evaluate`] returns one signed
//! integer in centipawns, positive when the position favours the side about to
//! move. The score combines:
//!
//! 1. Material (fixed piece values)
//! 2. Placement (one piece-square table per piece type, mirrored for Black)
//! 3. Pawn connectivity (bonus for diagonal support, penalty without it)
//! 4. Mobility (weighted count of generated moves)
//!
//! Board management, move generation and search live outside this crate.
//! Moves are consumed through the [`MoveGenerator`] trait; [`RulesGenerator`]
//! is a ready-made legal-move source and [`NoMoves`] turns mobility off at the
//! generator level.
//!
//! ```
//! use chess_eval::{Evaluator, Position, RulesGenerator};
//!
//! let evaluator = Evaluator::new(RulesGenerator);
//! let position = Position::from_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2").unwrap();
//! let score = evaluator.evaluate(&position);
//! assert_eq!(score, evaluator.breakdown(&position).score());
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod position;
pub mod types;

pub use config::{EvalConfig, PieceValues};
pub use error::{ChessEvalError, ChessEvalResult};
pub use evaluation::{evaluate, EvalBreakdown, Evaluator, SideTotals};
pub use move_gen::rules::RulesGenerator;
pub use move_gen::{Move, MoveGenerator, MoveList, NoMoves};
pub use position::{Board, Position};
pub use types::{Color, Piece, PieceType, Score, Square};
