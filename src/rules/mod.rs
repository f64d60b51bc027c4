//! Checkers rules: move validation, generation and the turn state machine.
//!
//! - `movegen`: pure board queries (`is_legal`, `legal_moves_for_side`, ...)
//! - `engine`: `apply_move` and terminal detection over a `GameState`
//! - `error`: typed rule violations

pub mod engine;
pub mod error;
pub mod movegen;

pub use engine::{
    apply_move, legal_destinations, legal_moves, new_game, terminal_result, GameResult, Outcome,
    WinReason,
};
pub use error::{EngineError, InvalidMove};
pub use movegen::{
    captures_for_piece, check_move, has_further_capture, is_legal, legal_moves_for_piece,
    legal_moves_for_side, play_on_board, side_has_capture, PieceMoves,
};
