//! Shared chess rules
//!
//! Thin layer over `shakmaty` that answers one question for the evaluator:
//! which legal moves does the side to move have in a given FEN?
//!
//! Moves are reported as plain `(from, to)` square indices in the
//! rank-major layout (`a1 = 0`, `h1 = 7`, `a8 = 56`, `h8 = 63`), so callers
//! never need shakmaty types in their own signatures.

use shakmaty::fen::{Fen, ParseFenError};
use shakmaty::{CastlingMode, Chess, Position};
use thiserror::Error;

/// Errors raised while turning a FEN into a playable position
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The text is not syntactically valid FEN
    #[error("Invalid FEN '{fen}': {message}")]
    InvalidFen { fen: String, message: String },

    /// The FEN parsed, but the position breaks the rules of chess
    /// (missing king, pawn on a back rank, opponent in check, ...)
    #[error("Illegal position '{fen}': {message}")]
    IllegalPosition { fen: String, message: String },
}

/// Result type alias for rules operations
pub type RulesResult<T> = Result<T, RulesError>;

/// Origin and destination of one legal move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveSquares {
    pub from: u8,
    pub to: u8,
}

/// Parse and validate a FEN into a standard chess position
fn parse_position(fen: &str) -> RulesResult<Chess> {
    let parsed: Fen = fen.parse().map_err(|e: ParseFenError| RulesError::InvalidFen {
        fen: fen.to_string(),
        message: e.to_string(),
    })?;

    parsed
        .into_position::<Chess>(CastlingMode::Standard)
        .map_err(|e| RulesError::IllegalPosition {
            fen: fen.to_string(),
            message: e.to_string(),
        })
}

/// Generate every legal move for the side to move in `fen`
///
/// # Examples
///
/// ```
/// use chess_logic_shared::legal_moves_from_fen;
///
/// let moves = legal_moves_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
/// assert_eq!(moves.len(), 20);
/// ```
pub fn legal_moves_from_fen(fen: &str) -> RulesResult<Vec<MoveSquares>> {
    let position = parse_position(fen)?;

    let moves: Vec<MoveSquares> = position
        .legal_moves()
        .iter()
        .filter_map(|m| {
            // Drops have no origin square and never occur in standard chess.
            m.from().map(|from| MoveSquares {
                from: u8::from(from),
                to: u8::from(m.to()),
            })
        })
        .collect();

    tracing::trace!(fen, count = moves.len(), "generated legal moves");
    Ok(moves)
}
