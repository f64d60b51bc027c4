//! Move-selection policies.
//!
//! Both AI opponents implement `MoveStrategy`, so callers pick one by
//! configuration and drive it the same way:
//! - `Minimax`: fixed-depth adversarial search
//! - `Heuristic`: one-ply capture / protection / safety filter

use serde::{Deserialize, Serialize};

use crate::core::{Board, GameRng, GameState, Move, Side, Square};
use crate::rules::{captures_for_piece, legal_moves_for_side};

use super::heuristic::Heuristic;
use super::minimax::{Minimax, DEFAULT_DEPTH};
use super::stats::SearchStats;

// =============================================================================
// Strategy trait
// =============================================================================

/// A way of choosing a move for one side.
///
/// Implementations only read the board they are given and may copy it
/// freely; they never see the live game state.
pub trait MoveStrategy {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Choose a move for `side`. If `chain` is set the move must continue
    /// the capture chain from that square.
    ///
    /// Returns `None` when no legal move exists.
    fn choose(
        &mut self,
        board: &Board,
        side: Side,
        chain: Option<Square>,
        rng: &mut GameRng,
    ) -> Option<Move>;

    /// Statistics from the most recent choice, for strategies that search.
    fn stats(&self) -> Option<&SearchStats> {
        None
    }

    /// Choose a move at the start of `side`'s turn.
    fn choose_move(&mut self, board: &Board, side: Side, rng: &mut GameRng) -> Option<Move> {
        self.choose(board, side, None, rng)
    }
}

// =============================================================================
// Strategy selection
// =============================================================================

/// Serializable choice of strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Minimax search to the given depth in plies (at least 1).
    Minimax { depth: u32 },
    /// One-ply heuristic selector.
    Heuristic,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Minimax {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl Strategy {
    /// Instantiate the configured strategy.
    #[must_use]
    pub fn build(self) -> Box<dyn MoveStrategy> {
        match self {
            Strategy::Minimax { depth } => Box::new(Minimax::new(depth)),
            Strategy::Heuristic => Box::new(Heuristic),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Moves a strategy may choose from: the pending chain's captures, or the
/// side's legal moves under forced capture.
pub(crate) fn candidate_moves(board: &Board, side: Side, chain: Option<Square>) -> Vec<Move> {
    match chain {
        Some(at) => captures_for_piece(board, at).into_vec(),
        None => legal_moves_for_side(board, side),
    }
}

/// Ask `strategy` for the side to move in `state`.
///
/// Returns `None` when the game is over or the side has no legal move.
pub fn ai_choose_move(state: &GameState, strategy: Strategy, rng: &mut GameRng) -> Option<Move> {
    choose_with(strategy.build().as_mut(), state, rng)
}

/// Like [`ai_choose_move`] with an already-built strategy.
pub fn choose_with(
    strategy: &mut dyn MoveStrategy,
    state: &GameState,
    rng: &mut GameRng,
) -> Option<Move> {
    if state.is_over() {
        return None;
    }
    strategy.choose(state.board(), state.turn(), state.chain_square(), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{apply_move, legal_moves};

    #[test]
    fn test_default_strategy() {
        assert_eq!(Strategy::default(), Strategy::Minimax { depth: 3 });
        assert_eq!(Strategy::default().build().name(), "minimax");
        assert_eq!(Strategy::Heuristic.build().name(), "heuristic");
    }

    #[test]
    fn test_only_minimax_reports_stats() {
        let board = Board::standard();
        let mut rng = GameRng::new(3);

        let mut minimax = Strategy::Minimax { depth: 2 }.build();
        minimax.choose_move(&board, Side::A, &mut rng);
        assert!(minimax.stats().is_some_and(|s| s.nodes > 1 && s.root_moves == 7));

        let mut heuristic = Strategy::Heuristic.build();
        heuristic.choose_move(&board, Side::A, &mut rng);
        assert!(heuristic.stats().is_none());
    }

    #[test]
    fn test_strategies_return_legal_moves() {
        let state = GameState::new();
        let legal = legal_moves(&state);

        for strategy in [Strategy::Minimax { depth: 2 }, Strategy::Heuristic] {
            let mut rng = GameRng::new(7);
            let mv = ai_choose_move(&state, strategy, &mut rng).unwrap();
            assert!(legal.contains(&mv), "{strategy:?} chose {mv}");
        }
    }

    #[test]
    fn test_chain_is_respected() {
        let board = Board::from_rows([
            ".......b",
            "........",
            "........",
            "..b.....",
            "........",
            "..b.....",
            ".a...a..",
            "........",
        ])
        .unwrap();
        let mut state = GameState::from_board(board, Side::A);
        apply_move(&mut state, Move::new(Square::new(6, 1), Square::new(4, 3))).unwrap();
        assert_eq!(state.chain_square(), Some(Square::new(4, 3)));

        for strategy in [Strategy::Minimax { depth: 3 }, Strategy::Heuristic] {
            let mut rng = GameRng::new(1);
            assert_eq!(
                ai_choose_move(&state, strategy, &mut rng),
                Some(Move::new(Square::new(4, 3), Square::new(2, 1)))
            );
        }
    }

    #[test]
    fn test_no_move_when_over() {
        let board = Board::from_rows([
            "........",
            "........",
            "........",
            "....b...",
            "...a....",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        let mut state = GameState::from_board(board, Side::A);
        apply_move(&mut state, Move::new(Square::new(4, 3), Square::new(2, 5))).unwrap();
        assert!(state.is_over());

        let mut rng = GameRng::new(1);
        assert_eq!(ai_choose_move(&state, Strategy::Heuristic, &mut rng), None);
    }

    #[test]
    fn test_strategy_serialization() {
        for strategy in [Strategy::Minimax { depth: 4 }, Strategy::Heuristic] {
            let json = serde_json::to_string(&strategy).unwrap();
            let deserialized: Strategy = serde_json::from_str(&json).unwrap();
            assert_eq!(strategy, deserialized);
        }
    }
}
