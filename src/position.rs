//! # Position Snapshot
//!
//! A [`Position`] is the read-only input of the evaluator: 64 cells, each empty
//! or holding a coloured piece, plus the side to move. Castling rights, the en
//! passant square and move clocks belong to the move-application layer and
//! are not part of the snapshot.
//!
//! ## FEN
//!
//! Positions read and write Forsyth-Edwards Notation. Only the first two fields
//! (piece placement and active colour) carry information here; any further
//! fields are accepted and ignored, and [`Position::to_fen`] writes
//! `- - 0 1` for them.
//!
//! ```
//! use chess_eval::{Color, Position};
//!
//! let position = Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 b - - 0 1").unwrap();
//! assert_eq!(position.side_to_move(), Color::Black);
//! assert_eq!(position.to_fen(), "4k3/8/8/8/4P3/8/8/4K3 b - - 0 1");
//! ```

use crate::error::{ChessEvalError, ChessEvalResult};
use crate::types::{Color, Piece, PieceType, Square};
use std::fmt;
use std::str::FromStr;

/// Board cells in square order
pub type Board = [Option<Piece>; 64];

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Immutable-by-convention board snapshot handed to the evaluator
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    side_to_move: Color,
}

impl Position {
    /// Empty board with the given side to move
    pub fn empty(side_to_move: Color) -> Self {
        Position {
            board: [None; 64],
            side_to_move,
        }
    }

    /// Build a position from a full board
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Position {
            board,
            side_to_move,
        }
    }

    /// Standard initial setup, White to move
    pub fn starting() -> Self {
        let mut board: Board = [None; 64];
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            board[file] = Some(Piece::new(Color::White, kind));
            board[8 + file] = Some(Piece::new(Color::White, PieceType::Pawn));
            board[48 + file] = Some(Piece::new(Color::Black, PieceType::Pawn));
            board[56 + file] = Some(Piece::new(Color::Black, kind));
        }
        Position {
            board,
            side_to_move: Color::White,
        }
    }

    /// Parse the placement and active-colour fields of a FEN string
    pub fn from_fen(fen: &str) -> ChessEvalResult<Self> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or_else(|| invalid_fen("empty FEN string"))?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid_fen(format!(
                "expected 8 ranks in placement, found {}",
                ranks.len()
            )));
        }

        let mut board: Board = [None; 64];
        // FEN lists rank 8 first.
        for (row, rank_text) in ranks.iter().enumerate() {
            let rank = 7 - row as u8;
            let mut file: u8 = 0;
            for c in rank_text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 || skip > 8 {
                        return Err(invalid_fen(format!("bad empty-square count '{c}'")));
                    }
                    file += skip as u8;
                } else {
                    let piece = Piece::from_char(c)
                        .ok_or_else(|| invalid_fen(format!("unknown piece letter '{c}'")))?;
                    if file >= 8 {
                        return Err(invalid_fen(format!("rank {} has more than 8 files", rank + 1)));
                    }
                    board[(rank * 8 + file) as usize] = Some(piece);
                    file += 1;
                }
                if file > 8 {
                    return Err(invalid_fen(format!("rank {} has more than 8 files", rank + 1)));
                }
            }
            if file != 8 {
                return Err(invalid_fen(format!("rank {} has {} files", rank + 1, file)));
            }
        }

        let side_to_move = match fields.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(invalid_fen(format!("bad active colour '{other}'"))),
        };

        Ok(Position {
            board,
            side_to_move,
        })
    }

    /// Serialize as FEN (placement and colour; remaining fields are `- - 0 1`)
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(64);
        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                match self.board[(rank * 8 + file) as usize] {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }
        fen.push_str(match self.side_to_move {
            Color::White => " w",
            Color::Black => " b",
        });
        fen.push_str(" - - 0 1");
        fen
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Iterate over occupied squares in index order
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.board[sq.index()].map(|piece| (sq, piece)))
    }

    /// Place a piece, returning whatever occupied the square before
    pub fn put(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.board[square.index()].replace(piece)
    }

    /// Clear a square, returning its previous occupant
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.board[square.index()].take()
    }

    /// Same board, different side to move
    pub fn with_side_to_move(&self, side_to_move: Color) -> Self {
        Position {
            board: self.board,
            side_to_move,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}

impl FromStr for Position {
    type Err = ChessEvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl fmt::Display for Position {
    /// Render the board as an 8x8 grid, rank 8 on top
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let c = self.board[(rank * 8 + file) as usize].map_or('.', Piece::to_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}

fn invalid_fen(message: impl Into<String>) -> ChessEvalError {
    ChessEvalError::InvalidFen {
        message: message.into(),
    }
}
