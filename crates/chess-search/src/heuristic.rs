//! Heuristic move picking - the searchless fallback engine.
//!
//! Weights move classes by chance instead of searching: random play on
//! the easy tier, then captures, then center occupation, then anything
//! legal. Hosts use it both as the easy tier's randomness source and as
//! the fallback when the primary search fails.

use crate::Difficulty;
use chess_rules::{GameState, Move};
use rand::seq::SliceRandom;
use rand::Rng;

/// Chance that the easy tier plays a uniformly random legal move.
const EASY_RANDOM_CHANCE: f64 = 0.4;

/// Chance of taking an available capture.
const CAPTURE_CHANCE: f64 = 0.7;

/// Chance of taking an available move into the center.
const CENTER_CHANCE: f64 = 0.5;

/// Picks a move for the side to move using the thread RNG.
///
/// Returns `None` when no legal move exists.
pub fn heuristic_move(state: &GameState, difficulty: Difficulty) -> Option<Move> {
    heuristic_move_with(&mut rand::thread_rng(), state, difficulty)
}

/// Picks a move using the supplied RNG. Deterministic under a seeded RNG,
/// which is what the tests rely on.
pub fn heuristic_move_with<R: Rng>(
    rng: &mut R,
    state: &GameState,
    difficulty: Difficulty,
) -> Option<Move> {
    let moves = state.legal_moves();
    if moves.is_empty() {
        return None;
    }

    if difficulty == Difficulty::Easy && rng.gen::<f64>() < EASY_RANDOM_CHANCE {
        tracing::debug!("playing random move (easy tier)");
        return moves.choose(rng).copied();
    }

    let captures: Vec<Move> = moves.iter().filter(|m| m.is_capture()).copied().collect();
    if !captures.is_empty() && rng.gen::<f64>() < CAPTURE_CHANCE {
        tracing::debug!("playing capture move");
        return captures.choose(rng).copied();
    }

    let center: Vec<Move> = moves
        .iter()
        .filter(|m| (3..=4).contains(&m.to.row()) && (3..=4).contains(&m.to.col()))
        .copied()
        .collect();
    if !center.is_empty() && rng.gen::<f64>() < CENTER_CHANCE {
        tracing::debug!("playing center control move");
        return center.choose(rng).copied();
    }

    moves.choose(rng).copied()
}
