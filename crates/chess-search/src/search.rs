//! Minimax search with alpha-beta pruning.

use crate::{evaluate, Difficulty};
use chess_rules::{all_legal_moves, Color, GameState, Move};
use std::time::Instant;

/// Sentinel score that dominates any static evaluation.
const INFINITY: i32 = 1_000_000;

/// Finds the strongest move for the side to move, searching to the depth
/// the difficulty tier prescribes.
///
/// Returns `None` when the side to move has no legal moves or the
/// position is already checkmate; callers read that together with the
/// `checkmate` flag to tell a finished game from an anomaly.
pub fn best_move(state: &GameState, difficulty: Difficulty) -> Option<Move> {
    let depth = difficulty.search_depth();
    let start = Instant::now();
    let mut nodes = 0u64;

    let (score, chosen) = minimax(
        state,
        depth,
        -INFINITY,
        INFINITY,
        true,
        state.turn,
        &mut nodes,
    );

    tracing::debug!(
        "search done: difficulty={} depth={} nodes={} elapsed={}ms score={}",
        difficulty,
        depth,
        nodes,
        start.elapsed().as_millis(),
        score
    );
    if let Some(m) = chosen {
        tracing::debug!("playing {}", m);
    }

    chosen
}

/// Depth-limited minimax over game states.
///
/// The maximizer is always `bot`; plies strictly alternate between
/// maximizing and minimizing regardless of whose turn the state records.
/// Alpha and beta travel by value, so sibling branches never observe each
/// other's bounds. A side with no moves at an interior node scores as an
/// infinite loss for whichever player was to choose, which folds
/// stalemate-like dead ends into the mate score.
fn minimax(
    state: &GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    bot: Color,
    nodes: &mut u64,
) -> (i32, Option<Move>) {
    *nodes += 1;

    if depth == 0 || state.checkmate {
        return (evaluate(&state.board, bot), None);
    }

    let side = if maximizing { bot } else { bot.opposite() };
    let moves = all_legal_moves(&state.board, side);

    if moves.is_empty() {
        let score = if maximizing { -INFINITY } else { INFINITY };
        return (score, None);
    }

    let mut chosen = None;

    if maximizing {
        let mut best = -INFINITY;
        for m in moves {
            let Ok(next) = state.apply_move(m.from, m.to, m.promotion) else {
                continue;
            };
            let (score, _) = minimax(&next, depth - 1, alpha, beta, false, bot, nodes);
            if score > best {
                best = score;
                chosen = Some(m);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        (best, chosen)
    } else {
        let mut best = INFINITY;
        for m in moves {
            let Ok(next) = state.apply_move(m.from, m.to, m.promotion) else {
                continue;
            };
            let (score, _) = minimax(&next, depth - 1, alpha, beta, true, bot, nodes);
            if score < best {
                best = score;
                chosen = Some(m);
            }
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        (best, chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_rules::{Board, GameMode, Piece, PieceKind, Square};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn state_with(placements: &[(&str, char)], turn: Color) -> GameState {
        let mut board = Board::empty();
        for &(s, c) in placements {
            board.set(sq(s), Some(Piece::from_char(c).unwrap()));
        }
        GameState {
            board,
            turn,
            ..GameState::new(GameMode::Bot)
        }
    }

    #[test]
    fn takes_a_hanging_queen() {
        let state = state_with(
            &[("e1", 'K'), ("a1", 'R'), ("a8", 'q'), ("h8", 'k')],
            Color::White,
        );
        let m = best_move(&state, Difficulty::Easy).unwrap();
        assert_eq!(m.from, sq("a1"));
        assert_eq!(m.to, sq("a8"));
        assert_eq!(m.captured, Some(Piece::from_char('q').unwrap()));
    }

    #[test]
    fn no_move_on_checkmated_state() {
        let state = GameState {
            checkmate: true,
            ..state_with(&[("e8", 'k'), ("e7", 'Q'), ("e6", 'K')], Color::Black)
        };
        assert_eq!(best_move(&state, Difficulty::Medium), None);
    }

    #[test]
    fn no_move_without_pieces() {
        let state = state_with(&[("e1", 'K')], Color::Black);
        assert_eq!(best_move(&state, Difficulty::Easy), None);
    }

    #[test]
    fn prefers_promotion_to_queen() {
        let state = state_with(&[("a7", 'P'), ("e1", 'K'), ("h8", 'k')], Color::White);
        let m = best_move(&state, Difficulty::Easy).unwrap();
        assert_eq!(m.to, sq("a8"));
        assert_eq!(m.promotion, Some(PieceKind::Queen));
    }
}
