//! Move records.

use crate::{Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single move: origin, destination, the piece that moved, and what it
/// captured or promoted to.
///
/// Moves are value objects - once constructed (by move enumeration or
/// application) they are never mutated. The `captured` field records the
/// piece that stood on the destination square, and `promotion` the kind a
/// pawn became on reaching the far rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a move record with no capture or promotion.
    #[inline]
    pub const fn new(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            captured: None,
            promotion: None,
        }
    }

    /// Returns true if this move captured a piece.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    /// Coordinate notation: origin and destination squares, with the
    /// promotion letter appended when present (e.g., "e2e4", "e7e8q").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char(crate::Color::Black))?;
        }
        Ok(())
    }
}
