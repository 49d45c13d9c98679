//! Board container and its wire codec.

use crate::{Color, Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when decoding a board from its wire form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardCodecError {
    #[error("invalid board encoding: expected 64 characters, got {0}")]
    WrongLength(usize),

    #[error("invalid board encoding: unknown piece character '{0}'")]
    UnknownPiece(char),
}

/// An 8x8 board of optional pieces.
///
/// Indexed by [`Square`], row-major with row 0 as White's back rank. At
/// most one piece occupies a square by construction. Serialized as a flat
/// 64-character string ('.' for empty, piece letters otherwise, uppercase
/// for White) so transport collaborators round-trip it losslessly without
/// knowing the in-memory layout.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting arrangement.
    pub fn standard() -> Self {
        let mut board = Board::empty();

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for (col, &kind) in back_rank.iter().enumerate() {
            let col = col as u8;
            for color in [Color::White, Color::Black] {
                let home = Square::new(color.back_row(), col).expect("col in range");
                let pawn = Square::new(color.pawn_start_row(), col).expect("col in range");
                board.set(home, Some(Piece::new(kind, color)));
                board.set(pawn, Some(Piece::new(PieceKind::Pawn, color)));
            }
        }

        board
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    /// Places or clears a piece on the given square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index() as usize] = piece;
    }

    /// Iterates over all occupied squares and their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Counts the pieces owned by a color.
    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color == color).count()
    }

    /// Returns the square of the given color's king, if it is on the board.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(sq, _)| sq)
    }

    /// Encodes the board as its flat 64-character wire form.
    pub fn encode(&self) -> String {
        self.squares
            .iter()
            .map(|slot| slot.map_or('.', Piece::to_char))
            .collect()
    }

    /// Decodes a board from its flat 64-character wire form.
    pub fn decode(s: &str) -> Result<Self, BoardCodecError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 64 {
            return Err(BoardCodecError::WrongLength(chars.len()));
        }

        let mut board = Board::empty();
        for (i, &c) in chars.iter().enumerate() {
            if c == '.' {
                continue;
            }
            let piece = Piece::from_char(c).ok_or(BoardCodecError::UnknownPiece(c))?;
            board.squares[i] = Some(piece);
        }
        Ok(board)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> String {
        board.encode()
    }
}

impl TryFrom<String> for Board {
    type Error = BoardCodecError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Board::decode(&s)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.encode())
    }
}

impl fmt::Display for Board {
    /// Prints the board from White's point of view (Black's back rank on
    /// top) with file and rank labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8u8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..8u8 {
                let sq = Square::new(row, col).expect("row/col in range");
                let c = self.piece_at(sq).map_or('.', Piece::to_char);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
