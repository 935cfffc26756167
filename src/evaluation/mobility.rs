//! Mobility evaluation
//!
//! Counts generated moves per colour. Each move is credited to the colour of
//! the piece on its origin square.
//!
//! A legal-move generator only produces moves for the side to move, so in
//! practice the other colour's count is zero and mobility acts as a bonus for
//! the mover. Both counts are still tracked so a generator that reports moves
//! for both sides is scored correctly.

use crate::config::EvalConfig;
use crate::move_gen::Move;
use crate::position::Position;
use crate::types::{Color, Score};

/// Generated-move counts per colour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mobility {
    pub white: usize,
    pub black: usize,
}

impl Mobility {
    /// Partition `moves` by the colour standing on each origin square.
    ///
    /// A move whose origin square is empty belongs to nobody and is skipped.
    pub fn count(position: &Position, moves: &[Move]) -> Self {
        let mut mobility = Mobility::default();
        for m in moves {
            match position.piece_at(m.from).map(|piece| piece.color) {
                Some(Color::White) => mobility.white += 1,
                Some(Color::Black) => mobility.black += 1,
                None => {}
            }
        }
        mobility
    }

    #[inline]
    pub fn of(&self, color: Color) -> usize {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

/// Score for `count` moves
#[inline]
pub fn mobility_bonus(count: usize, config: &EvalConfig) -> Score {
    // MAX_MOVES bounds count well inside i32.
    count as Score * config.mobility_weight
}
