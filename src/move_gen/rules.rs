//! Legal moves from the shared rules crate
//!
//! [`RulesGenerator`] hands the position to `chess-logic-shared` as FEN and
//! converts the answer into a [`MoveList`]. The snapshot carries no castling
//! rights or en passant square, so neither kind of move is ever produced.

use super::{Move, MoveGenerator, MoveList};
use crate::error::{ChessEvalError, ChessEvalResult};
use crate::position::Position;
use crate::types::Square;
use chess_logic_shared::legal_moves_from_fen;
use tracing::warn;

/// Legal-move generator backed by the shared chess rules
#[derive(Debug, Clone, Copy, Default)]
pub struct RulesGenerator;

impl RulesGenerator {
    /// Generate legal moves, reporting positions the rules refuse to play
    /// (missing kings, pawns on a back rank, side not to move in check, ...)
    pub fn try_generate(&self, position: &Position) -> ChessEvalResult<MoveList> {
        let fen = position.to_fen();
        let squares = legal_moves_from_fen(&fen).map_err(|e| ChessEvalError::RulesRejected {
            message: e.to_string(),
        })?;

        let mut moves = MoveList::new();
        for m in squares {
            let from = Square::try_from(m.from)?;
            let to = Square::try_from(m.to)?;
            moves.push(Move::new(from, to));
        }
        Ok(moves)
    }
}

impl MoveGenerator for RulesGenerator {
    /// Rejected positions produce no moves; the rejection is logged.
    fn generate_legal_moves(&self, position: &Position) -> MoveList {
        match self.try_generate(position) {
            Ok(moves) => moves,
            Err(e) => {
                warn!("[MOVEGEN] {}. Treating position as having no moves.", e);
                MoveList::new()
            }
        }
    }
}
