//! Shared helpers for integration tests

#![allow(dead_code)]

use chess_eval::board::mirror;
use chess_eval::{Piece, Position};
use tracing_subscriber::EnvFilter;

/// Route `tracing` output through the test harness (`RUST_LOG=trace` to see it)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parse a FEN known to be valid
pub fn fen(text: &str) -> Position {
    Position::from_fen(text).unwrap_or_else(|e| panic!("bad test FEN {text:?}: {e}"))
}

/// Swap colours and reflect the board top to bottom, flipping the side to move
pub fn color_flipped(position: &Position) -> Position {
    let mut flipped = Position::empty(position.side_to_move().opponent());
    for (square, piece) in position.occupied() {
        flipped.put(mirror(square), Piece::new(piece.color.opponent(), piece.kind));
    }
    flipped
}
