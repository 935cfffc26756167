//! # Board Vocabulary
//!
//! The small closed types every other module speaks in: colours, piece types,
//! pieces and squares.
//!
//! ## Square Layout
//!
//! Squares are numbered rank-major from White's side of the board:
//!
//! ```text
//! rank 8 | 56 57 58 59 60 61 62 63
//! rank 7 | 48 49 50 51 52 53 54 55
//!   ...  |
//! rank 2 |  8  9 10 11 12 13 14 15
//! rank 1 |  0  1  2  3  4  5  6  7
//!        +------------------------
//!           a  b  c  d  e  f  g  h
//! ```
//!
//! so `square = rank * 8 + file` with rank 0 being White's back rank.
//!
//! ## Why a `Square` newtype?
//!
//! Every table in the evaluator is indexed by square. Wrapping the index in a
//! type whose constructors reject anything outside `0..64` moves the range
//! check to the edge of the crate; once a `Square` exists, lookups cannot go
//! out of bounds.

use crate::error::{ChessEvalError, ChessEvalResult};
use std::fmt;
use std::str::FromStr;

/// Evaluation score in centipawns
pub type Score = i32;

/// Side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Index into per-colour arrays (White = 0, Black = 1)
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// +1 for White, -1 for Black
    ///
    /// Converts a White-positive quantity into the colour's own frame and back.
    #[inline]
    pub const fn sign(self) -> Score {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// The six kinds of chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lower-case FEN letter
    pub const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    /// Parse a FEN letter of either case
    pub fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }
}

/// A coloured piece occupying a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceType) -> Self {
        Piece { color, kind }
    }

    /// FEN letter: upper case for White, lower case for Black
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        let kind = PieceType::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { color, kind })
    }
}

/// Board square, always in `0..64`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Create a square from a raw index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 64`. Use [`Square::try_from`] for untrusted input.
    #[inline]
    pub const fn new(index: u8) -> Self {
        assert!(index < 64, "square index out of range (must be 0-63)");
        Square(index)
    }

    /// Create a square from file (0 = a) and rank (0 = rank 1)
    pub fn from_coords(file: u8, rank: u8) -> ChessEvalResult<Self> {
        if file >= 8 || rank >= 8 {
            return Err(ChessEvalError::InvalidSquare {
                square: i32::from(rank) * 8 + i32::from(file),
            });
        }
        Ok(Square(rank * 8 + file))
    }

    /// Iterate over all 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Step by whole files and ranks; `None` when the step leaves the board
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.file() as i8 + file_delta;
        let rank = self.rank() as i8 + rank_delta;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }
}

impl TryFrom<u8> for Square {
    type Error = ChessEvalError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if index < 64 {
            Ok(Square(index))
        } else {
            Err(ChessEvalError::InvalidSquare {
                square: i32::from(index),
            })
        }
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> u8 {
        square.0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ChessEvalError;

    /// Parse algebraic notation such as `e4`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let invalid = || ChessEvalError::InvalidSquareName {
            name: s.to_string(),
        };
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        Square::from_coords(file, rank).map_err(|_| invalid())
    }
}
