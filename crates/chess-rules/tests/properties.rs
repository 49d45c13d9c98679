//! Algebraic properties of the rules engine, checked over random play.

use chess_rules::{all_legal_moves, Board, Color, GameMode, GameState, PieceKind};
use proptest::prelude::*;

/// Plays up to `choices.len()` plies from the start, picking each move by
/// indexing the enumerated list. Stops at checkmate or when a side has no
/// moves.
fn playout(choices: &[usize]) -> Vec<GameState> {
    let mut states = vec![GameState::new(GameMode::Pvp)];
    for &choice in choices {
        let state = states.last().unwrap();
        if state.checkmate {
            break;
        }
        let legal = state.legal_moves();
        if legal.is_empty() {
            break;
        }
        let m = legal[choice % legal.len()];
        let next = state
            .apply_move(m.from, m.to, m.promotion)
            .expect("enumerated moves must apply");
        states.push(next);
    }
    states
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn piece_counts_never_increase(choices in prop::collection::vec(0usize..512, 0..60)) {
        let states = playout(&choices);
        for pair in states.windows(2) {
            for color in [Color::White, Color::Black] {
                prop_assert!(
                    pair[1].board.piece_count(color) <= pair[0].board.piece_count(color),
                    "captures only remove pieces"
                );
            }
        }
    }

    #[test]
    fn at_most_one_king_per_side(choices in prop::collection::vec(0usize..512, 0..60)) {
        let states = playout(&choices);
        for state in &states {
            for color in [Color::White, Color::Black] {
                let kings = state
                    .board
                    .pieces()
                    .filter(|(_, p)| p.kind == PieceKind::King && p.color == color)
                    .count();
                prop_assert!(kings <= 1);
            }
        }
    }

    #[test]
    fn enumeration_is_pure(choices in prop::collection::vec(0usize..512, 0..40)) {
        let state = playout(&choices).pop().unwrap();
        let first = all_legal_moves(&state.board, state.turn);
        let second = all_legal_moves(&state.board, state.turn);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn board_codec_roundtrips(choices in prop::collection::vec(0usize..512, 0..60)) {
        let state = playout(&choices).pop().unwrap();
        let encoded = state.board.encode();
        prop_assert_eq!(Board::decode(&encoded), Ok(state.board));
    }

    #[test]
    fn promotion_choices_come_in_fours(choices in prop::collection::vec(0usize..512, 0..60)) {
        let state = playout(&choices).pop().unwrap();
        for m in state.legal_moves() {
            if m.piece.kind == PieceKind::Pawn && m.to.row() == m.piece.color.promotion_row() {
                let variants = state
                    .legal_moves()
                    .iter()
                    .filter(|other| other.from == m.from && other.to == m.to)
                    .count();
                prop_assert_eq!(variants, 4, "one entry per promotion kind");
            }
        }
    }

    #[test]
    fn history_grows_by_one_per_ply(choices in prop::collection::vec(0usize..512, 0..60)) {
        let states = playout(&choices);
        for (i, state) in states.iter().enumerate() {
            prop_assert_eq!(state.moves.len(), i);
        }
    }
}
