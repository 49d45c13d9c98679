//! Rules engine for chess.
//!
//! This crate owns the position representation and the rules of play:
//! - [`Board`], [`Square`], [`Piece`], and [`Move`] for the position model
//! - [`GameState`] for the full game snapshot and functional move application
//! - Legality checking, check and checkmate detection, and move enumeration
//!   in the [`rules`] module
//!
//! The rule set is deliberately reduced: no castling, no en passant, and no
//! draw detection. Capturing a king ends the game immediately, and a mating
//! move leaves the turn on the winner - both are part of the engine's
//! observable contract, not oversights.
//!
//! Everything here is a pure, synchronous computation over immutable
//! inputs; hosts may call it from any threading model.
//!
//! # Example
//!
//! ```
//! use chess_rules::{GameMode, GameState, Square};
//!
//! let game = GameState::new(GameMode::Pvp);
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! let game = game.apply_move(e2, e4, None).unwrap();
//! assert_eq!(game.moves.len(), 1);
//! ```

mod board;
mod color;
mod moves;
mod piece;
pub mod rules;
mod square;
mod state;

pub use board::{Board, BoardCodecError};
pub use color::Color;
pub use moves::Move;
pub use piece::{Piece, PieceKind};
pub use rules::{all_legal_moves, is_checkmate, is_in_check, is_legal, is_pawn_promotion_move};
pub use square::Square;
pub use state::{GameMode, GameState, GameStatus, MoveError, INITIAL_TIME_MS};
