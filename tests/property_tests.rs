//! Randomized playouts checking rule invariants after every move.

use proptest::prelude::*;

use rust_checkers::core::{GameRng, GameState, MoveKind, Side};
use rust_checkers::rules::{apply_move, is_legal, legal_moves, legal_moves_for_side};

/// Apply up to `plies` uniformly random legal moves, calling `check` with
/// the state before and after each one.
fn random_playout(seed: u64, plies: usize, mut check: impl FnMut(&GameState, &GameState)) {
    let mut rng = GameRng::new(seed);
    let mut state = GameState::new();

    for _ in 0..plies {
        let moves = legal_moves(&state);
        let Some(&mv) = rng.choose(&moves) else {
            break;
        };
        let before = state.clone();
        apply_move(&mut state, mv).expect("generated move is legal");
        check(&before, &state);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_piece_count_never_increases(seed in any::<u64>(), plies in 1usize..150) {
        random_playout(seed, plies, |before, after| {
            assert!(after.board().total() <= before.board().total());
            for side in Side::ALL {
                assert!(after.board().count(side) <= before.board().count(side));
            }
        });
    }

    #[test]
    fn prop_capture_removes_exactly_the_midpoint(seed in any::<u64>(), plies in 1usize..150) {
        random_playout(seed, plies, |before, after| {
            let record = after.history().last().expect("a move was recorded");
            let mv = record.mv;
            let mover = before.board().get(mv.from).expect("mover existed");

            assert!(after.board().get(mv.from).is_none());
            assert_eq!(after.board().get(mv.to).map(|p| p.owner()), Some(mover.owner()));

            let removed = before.board().total() - after.board().total();
            match mv.kind() {
                Some(MoveKind::Capture) => {
                    assert_eq!(removed, 1);
                    assert!(after.board().get(mv.midpoint()).is_none());
                    assert_eq!(
                        before.board().get(mv.midpoint()).map(|p| p.owner()),
                        Some(mover.owner().opponent())
                    );
                }
                _ => assert_eq!(removed, 0),
            }
        });
    }

    #[test]
    fn prop_men_only_move_forward(seed in any::<u64>(), plies in 1usize..150) {
        random_playout(seed, plies, |before, after| {
            let mv = after.history().last().expect("a move was recorded").mv;
            let mover = before.board().get(mv.from).expect("mover existed");
            if !mover.is_crowned() {
                let (dr, _) = mv.delta();
                assert_eq!(dr.signum(), mover.owner().forward());
            }
        });
    }

    #[test]
    fn prop_crowning_is_monotonic(seed in any::<u64>(), plies in 1usize..150) {
        random_playout(seed, plies, |before, after| {
            let record = after.history().last().expect("a move was recorded");
            let mover = before.board().get(record.mv.from).expect("mover existed");
            let landed = after.board().get(record.mv.to).expect("mover landed");

            if mover.is_crowned() {
                assert!(landed.is_crowned());
                assert!(!record.promoted);
            } else {
                let reached_far_row = record.mv.to.row == mover.owner().promotion_row();
                assert_eq!(landed.is_crowned(), reached_far_row);
                assert_eq!(record.promoted, reached_far_row);
            }

            let kings = |state: &GameState| {
                state.board().pieces().filter(|(_, p)| p.is_crowned()).count()
            };
            // A capture may remove a king, otherwise kings only accumulate
            if record.mv.kind() == Some(MoveKind::Simple) {
                assert!(kings(after) >= kings(before));
            }
        });
    }

    #[test]
    fn prop_forced_capture_never_mixes_kinds(seed in any::<u64>(), plies in 1usize..150) {
        random_playout(seed, plies, |_, after| {
            for side in Side::ALL {
                let moves = legal_moves_for_side(after.board(), side);
                let captures = moves.iter().filter(|m| m.is_capture()).count();
                assert!(captures == 0 || captures == moves.len());
            }
        });
    }

    #[test]
    fn prop_generated_moves_are_legal(seed in any::<u64>(), plies in 1usize..100) {
        random_playout(seed, plies, |_, after| {
            for side in Side::ALL {
                for mv in legal_moves_for_side(after.board(), side) {
                    assert!(is_legal(after.board(), side, mv));
                }
            }
        });
    }
}
