//! Game state lifecycle and move application.

use crate::rules::{all_legal_moves, is_checkmate, is_in_check, is_legal};
use crate::{Board, Color, Move, Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Starting time per side, in milliseconds (10 minutes).
pub const INITIAL_TIME_MS: u64 = 600_000;

/// How a game is being played. Bookkeeping only - the rules do not
/// interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Pvp,
    Bot,
    Online,
}

/// The per-game state machine, derived from the check/checkmate flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
}

/// Errors from attempting to apply a move.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    /// The move fails the legality predicate.
    #[error("illegal move: {from} to {to}")]
    Illegal { from: Square, to: Square },

    /// A pawn reached the promotion row without a chosen promotion kind.
    #[error("promotion choice required for {from} to {to}")]
    MissingPromotion { from: Square, to: Square },
}

/// A full game snapshot: board, side to move, history, terminal flags,
/// clocks, and mode tag.
///
/// States are functional values: applying a move never mutates an
/// existing state, it produces a fresh one. Every snapshot in a game's
/// history therefore stays valid for inspection or replay.
///
/// The clocks are owned and decremented by an external timer
/// collaborator; move application copies them forward untouched.
///
/// Side to move alternates after every applied move except when the move
/// delivers checkmate - then `turn` deliberately stays on the mover, so
/// the winner can be read directly off the terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub moves: Vec<Move>,
    pub check: bool,
    pub checkmate: bool,
    pub white_time_ms: u64,
    pub black_time_ms: u64,
    pub mode: GameMode,
}

impl GameState {
    /// Creates a game at the standard starting arrangement with full
    /// clocks, White to move.
    pub fn new(mode: GameMode) -> Self {
        GameState {
            board: Board::standard(),
            turn: Color::White,
            moves: Vec::new(),
            check: false,
            checkmate: false,
            white_time_ms: INITIAL_TIME_MS,
            black_time_ms: INITIAL_TIME_MS,
            mode,
        }
    }

    /// Returns the state machine view of this position.
    pub fn status(&self) -> GameStatus {
        if self.checkmate {
            GameStatus::Checkmate
        } else if self.check {
            GameStatus::Check
        } else {
            GameStatus::InProgress
        }
    }

    /// Enumerates the legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        all_legal_moves(&self.board, self.turn)
    }

    /// Returns true if the piece on `from` may move to `to`.
    ///
    /// Pure query form of [`apply_move`](Self::apply_move); UIs use it to
    /// light up destination squares.
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        is_legal(&self.board, from, to)
    }

    /// Validates and applies a move, returning the successor state.
    ///
    /// Legality is always re-checked here - a stale check by the caller
    /// is never trusted. Capturing a king marks the position checkmate
    /// immediately. A pawn landing on the promotion row requires a
    /// promotion kind from [`PieceKind::PROMOTIONS`]; the application is
    /// rejected otherwise.
    ///
    /// Callers must consult the `checkmate` flag before applying further
    /// moves; a terminal position is not re-detected here.
    pub fn apply_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<GameState, MoveError> {
        if !is_legal(&self.board, from, to) {
            return Err(MoveError::Illegal { from, to });
        }
        let Some(piece) = self.board.piece_at(from) else {
            return Err(MoveError::Illegal { from, to });
        };

        let promoting = piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row();
        let promotion = match (promoting, promotion) {
            (true, Some(kind)) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
            (true, Some(_)) => return Err(MoveError::Illegal { from, to }),
            (true, None) => return Err(MoveError::MissingPromotion { from, to }),
            (false, Some(_)) => return Err(MoveError::Illegal { from, to }),
            (false, None) => None,
        };

        let captured = self.board.piece_at(to);
        let king_captured = matches!(captured, Some(p) if p.kind == PieceKind::King);

        let mut board = self.board.clone();
        let placed = match promotion {
            Some(kind) => Piece::new(kind, piece.color),
            None => piece,
        };
        board.set(to, Some(placed));
        board.set(from, None);

        let next = self.turn.opposite();
        let check = is_in_check(&board, next);
        let checkmate = king_captured || is_checkmate(&board, next);

        let mut moves = self.moves.clone();
        moves.push(Move {
            from,
            to,
            piece,
            captured,
            promotion,
        });

        Ok(GameState {
            board,
            turn: if checkmate { self.turn } else { next },
            moves,
            check,
            checkmate,
            white_time_ms: self.white_time_ms,
            black_time_ms: self.black_time_ms,
            mode: self.mode,
        })
    }

    /// Derives a human-readable outcome, if the game has one.
    ///
    /// Checkmate reads the winner off the unadvanced `turn`; otherwise a
    /// side whose clock has run out loses on time. Clocks are maintained
    /// by the external timer, so flag fall is only as fresh as its last
    /// update.
    pub fn game_result(&self) -> Option<String> {
        if self.checkmate {
            return Some(format!("{} wins by checkmate!", self.turn));
        }
        if self.white_time_ms == 0 {
            return Some(format!("{} wins by timeout!", Color::Black));
        }
        if self.black_time_ms == 0 {
            return Some(format!("{} wins by timeout!", Color::White));
        }
        None
    }
}
