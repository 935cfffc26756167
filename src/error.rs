//! Error types for the evaluator
//!
//! Evaluation itself cannot fail. These errors cover the edges of the crate:
//! building squares and positions from untrusted input, loading weight
//! configuration, and asking the rules layer for legal moves.

use thiserror::Error;

/// Errors that can occur around position evaluation
#[derive(Error, Debug)]
pub enum ChessEvalError {
    /// Invalid square index (out of bounds)
    #[error("Invalid square index: {square} (must be 0-63)")]
    InvalidSquare { square: i32 },

    /// Unparseable algebraic square name
    #[error("Invalid square name: '{name}'")]
    InvalidSquareName { name: String },

    /// Malformed FEN string
    #[error("Invalid FEN: {message}")]
    InvalidFen { message: String },

    /// Config file I/O error
    #[error("Config I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Config serialization/deserialization error
    #[error("Config serialization error: {0}")]
    ConfigSerialization(#[from] serde_json::Error),

    /// Weights large enough to overflow a score
    #[error("Evaluation weights out of range: {message}")]
    WeightsOutOfRange { message: String },

    /// The rules layer refused to generate moves for the position
    #[error("Rules rejected position: {message}")]
    RulesRejected { message: String },
}

/// Result type alias for evaluator operations
pub type ChessEvalResult<T> = Result<T, ChessEvalError>;
