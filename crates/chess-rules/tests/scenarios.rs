//! End-to-end scenarios for the rules engine.

use chess_rules::rules::{all_legal_moves, is_checkmate, is_in_check, is_legal};
use chess_rules::{Board, Color, GameMode, GameState, Piece, Square};

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

fn board_with(placements: &[(&str, char)]) -> Board {
    let mut board = Board::empty();
    for &(s, c) in placements {
        board.set(sq(s), Some(Piece::from_char(c).unwrap()));
    }
    board
}

#[test]
fn double_pawn_push_from_start_rank() {
    let game = GameState::new(GameMode::Pvp);
    assert!(is_legal(&game.board, sq("e2"), sq("e4")));
    // The symmetric three-square push is not a pawn move.
    assert!(!is_legal(&game.board, sq("e2"), sq("e5")));
}

#[test]
fn queen_mates_a_cornered_king() {
    // Lone king on its home square, queen giving adjacent check backed by
    // its own king: nowhere to run, nothing to block or capture with.
    let board = board_with(&[("e8", 'k'), ("e7", 'Q'), ("e6", 'K')]);
    assert!(is_in_check(&board, Color::Black));
    assert!(is_checkmate(&board, Color::Black));
}

#[test]
fn rook_slides_the_full_file_unless_blocked() {
    let open = board_with(&[("a1", 'R'), ("a8", 'r')]);
    assert!(is_legal(&open, sq("a1"), sq("a8")));

    for blocker in ["a2", "a3", "a4", "a5", "a6", "a7"] {
        let mut blocked = open.clone();
        blocked.set(sq(blocker), Some(Piece::from_char('P').unwrap()));
        assert!(
            !is_legal(&blocked, sq("a1"), sq("a8")),
            "blocker on {} should cut the file",
            blocker
        );
    }
}

#[test]
fn king_capture_is_checkmate_immediately() {
    // The black king still has escape squares, so a full no-escape proof
    // would fail; the capture alone must end the game.
    let state = GameState {
        board: board_with(&[("e1", 'K'), ("e4", 'R'), ("e8", 'k'), ("a5", 'q')]),
        turn: Color::White,
        ..GameState::new(GameMode::Pvp)
    };
    let next = state.apply_move(sq("e4"), sq("e8"), None).unwrap();
    assert!(next.checkmate);
    assert_eq!(next.turn, Color::White);
}

#[test]
fn checkmate_is_stable_under_every_simulated_reply() {
    let board = board_with(&[("e8", 'k'), ("e7", 'Q'), ("e6", 'K'), ("a8", 'r')]);
    assert!(is_checkmate(&board, Color::Black));

    // No legal black move produces a board where the mate is refuted.
    for m in all_legal_moves(&board, Color::Black) {
        let mut scratch = board.clone();
        scratch.set(m.to, Some(m.piece));
        scratch.set(m.from, None);
        assert!(
            is_in_check(&scratch, Color::Black),
            "{} should not escape the mate",
            m
        );
    }
}

#[test]
fn full_game_scholars_mate() {
    let game = GameState::new(GameMode::Pvp);
    let game = game.apply_move(sq("e2"), sq("e4"), None).unwrap();
    let game = game.apply_move(sq("e7"), sq("e5"), None).unwrap();
    let game = game.apply_move(sq("f1"), sq("c4"), None).unwrap();
    let game = game.apply_move(sq("b8"), sq("c6"), None).unwrap();
    let game = game.apply_move(sq("d1"), sq("h5"), None).unwrap();
    let game = game.apply_move(sq("g8"), sq("f6"), None).unwrap();
    let game = game.apply_move(sq("h5"), sq("f7"), None).unwrap();

    assert!(game.check);
    assert!(game.checkmate);
    assert_eq!(game.turn, Color::White);
    assert_eq!(game.moves.len(), 7);
    assert_eq!(game.game_result(), Some("White wins by checkmate!".into()));
}
