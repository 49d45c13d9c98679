//! Adversarial search for the chess rules engine.
//!
//! This crate supplies the automated opponent:
//! - [`evaluate`] - material and piece-square scoring of a board
//! - [`best_move`] - depth-limited minimax with alpha-beta pruning,
//!   tuned by [`Difficulty`]
//! - [`heuristic_move`] - a searchless weighted-random picker, used for
//!   the easy tier's randomness and as the fallback when the primary
//!   search cannot produce a move
//!
//! Like the rules engine it builds on, the search is a pure synchronous
//! computation: no shared state, no cancellation. `best_move` at the
//! hard tier can take visible wall-clock time on a full board - hosts
//! wanting a responsive thread should call it from a worker.
//!
//! # Example
//!
//! ```
//! use chess_rules::{GameMode, GameState};
//! use chess_search::{best_move, heuristic_move, Difficulty};
//!
//! let game = GameState::new(GameMode::Bot);
//! let m = best_move(&game, Difficulty::Easy)
//!     .or_else(|| heuristic_move(&game, Difficulty::Easy));
//! assert!(m.is_some());
//! ```

mod difficulty;
mod evaluate;
mod heuristic;
mod search;

pub use difficulty::Difficulty;
pub use evaluate::evaluate;
pub use heuristic::{heuristic_move, heuristic_move_with};
pub use search::best_move;
