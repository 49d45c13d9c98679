//! Move legality, check, and checkmate detection.
//!
//! Legality here is the per-piece geometric predicate: it ignores whose
//! turn it is and does not forbid moving into check. Check and checkmate
//! are derived on top of it by attack probing and exhaustive move
//! simulation. Castling and en passant are not part of this rule set.

use crate::{Board, Color, Move, Piece, PieceKind, Square};

/// Returns true if the piece on `from` may move to `to`.
///
/// Fails (returns false) for an empty origin or a destination holding a
/// piece of the same color; otherwise dispatches on the piece kind.
pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };

    let target = board.piece_at(to);
    if let Some(t) = target {
        if t.color == piece.color {
            return false;
        }
    }

    let dr = to.row() as i8 - from.row() as i8;
    let dc = to.col() as i8 - from.col() as i8;

    match piece.kind {
        PieceKind::Pawn => pawn_move_ok(piece.color, from, dr, dc, target.is_some()),
        PieceKind::Knight => knight_move_ok(dr, dc),
        PieceKind::Bishop => bishop_move_ok(board, from, to, dr, dc),
        PieceKind::Rook => rook_move_ok(board, from, to, dr, dc),
        PieceKind::Queen => {
            rook_move_ok(board, from, to, dr, dc) || bishop_move_ok(board, from, to, dr, dc)
        }
        PieceKind::King => king_move_ok(dr, dc),
    }
}

fn pawn_move_ok(color: Color, from: Square, dr: i8, dc: i8, capturing: bool) -> bool {
    let dir = color.pawn_direction();

    // Forward moves require an empty destination. The double step is
    // gated on the start row and destination only.
    if dc == 0 && !capturing {
        if dr == dir {
            return true;
        }
        if from.row() == color.pawn_start_row() && dr == 2 * dir {
            return true;
        }
    }

    // Diagonal single step, only onto an enemy piece.
    dc.abs() == 1 && dr == dir && capturing
}

fn knight_move_ok(dr: i8, dc: i8) -> bool {
    (dr.abs() == 2 && dc.abs() == 1) || (dr.abs() == 1 && dc.abs() == 2)
}

fn bishop_move_ok(board: &Board, from: Square, to: Square, dr: i8, dc: i8) -> bool {
    if dr.abs() != dc.abs() {
        return false;
    }
    path_clear(board, from, to)
}

fn rook_move_ok(board: &Board, from: Square, to: Square, dr: i8, dc: i8) -> bool {
    if dr != 0 && dc != 0 {
        return false;
    }
    path_clear(board, from, to)
}

fn king_move_ok(dr: i8, dc: i8) -> bool {
    dr.abs() <= 1 && dc.abs() <= 1
}

/// Walks the squares strictly between `from` and `to`, which must be
/// aligned on a rank, file, or diagonal.
fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let dr = (to.row() as i8 - from.row() as i8).signum();
    let dc = (to.col() as i8 - from.col() as i8).signum();

    let mut current = from;
    loop {
        current = match current.offset(dr, dc) {
            Some(sq) => sq,
            None => return false,
        };
        if current == to {
            return true;
        }
        if board.piece_at(current).is_some() {
            return false;
        }
    }
}

/// Returns true if `side`'s king is attacked.
///
/// A missing king counts as in check; that only arises on scratch boards
/// mid-simulation, never in a persisted position.
pub fn is_in_check(board: &Board, side: Color) -> bool {
    let Some(king_sq) = board.find_king(side) else {
        return true;
    };

    Square::all().any(|sq| match board.piece_at(sq) {
        Some(piece) if piece.color != side => is_legal(board, sq, king_sq),
        _ => false,
    })
}

/// Returns true if `side` is in check and no move it can make escapes.
///
/// Each candidate move is simulated on a scratch board (relocation only;
/// promotion choice cannot affect whether check is escaped) and the check
/// test re-run.
pub fn is_checkmate(board: &Board, side: Color) -> bool {
    if !is_in_check(board, side) {
        return false;
    }

    for (from, piece) in board.pieces() {
        if piece.color != side {
            continue;
        }
        for to in Square::all() {
            if !is_legal(board, from, to) {
                continue;
            }
            let mut scratch = board.clone();
            scratch.set(to, Some(piece));
            scratch.set(from, None);
            if !is_in_check(&scratch, side) {
                return false;
            }
        }
    }

    true
}

/// Enumerates every legal move for `side`.
///
/// A pawn move landing on the promotion row expands into one entry per
/// promotion kind, since the chosen kind changes material value.
pub fn all_legal_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut moves = Vec::new();

    for (from, piece) in board.pieces() {
        if piece.color != side {
            continue;
        }
        for to in Square::all() {
            if !is_legal(board, from, to) {
                continue;
            }
            let captured = board.piece_at(to);
            if piece.kind == PieceKind::Pawn && to.row() == side.promotion_row() {
                for kind in PieceKind::PROMOTIONS {
                    moves.push(Move {
                        from,
                        to,
                        piece,
                        captured,
                        promotion: Some(kind),
                    });
                }
            } else {
                moves.push(Move {
                    from,
                    to,
                    piece,
                    captured,
                    promotion: None,
                });
            }
        }
    }

    moves
}

/// Returns true if moving `from` to `to` is a legal pawn move onto the
/// promotion row. Callers use this to prompt for a promotion choice
/// before applying the move.
pub fn is_pawn_promotion_move(board: &Board, from: Square, to: Square) -> bool {
    match board.piece_at(from) {
        Some(piece) if piece.kind == PieceKind::Pawn => {
            to.row() == piece.color.promotion_row() && is_legal(board, from, to)
        }
        _ => false,
    }
}
