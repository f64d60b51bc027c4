//! # rust-checkers
//!
//! An 8×8 checkers rule engine with computer opponents.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: `rules::apply_move` checks a move in full
//!    before touching the game, so a rejected move changes nothing.
//!
//! 2. **Value-type boards**: `Board` is `Copy`. Search and heuristics copy
//!    it freely and never see the live game.
//!
//! 3. **Injected randomness**: every random choice goes through a seeded
//!    `GameRng`, so games are reproducible.
//!
//! ## Rules
//!
//! - Side A moves first from rows 5-7 toward row 0; Side B starts on rows
//!   0-2. Men move diagonally forward, kings both ways.
//! - Captures are mandatory. A capture that leaves the same piece another
//!   capture continues the turn with that piece.
//! - A man reaching the far row is crowned at once and may keep capturing
//!   as a king.
//! - A side with no pieces or no legal move on its turn loses. There are no
//!   draws.
//!
//! ## Modules
//!
//! - `core`: sides, squares, pieces, board, moves, RNG, game state
//! - `rules`: move validation, move generation, turn state machine
//! - `ai`: minimax and heuristic strategies, evaluation, configuration
//! - `session`: game modes, AI scheduling and replays

pub mod core;
pub mod rules;
pub mod ai;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    Square, Direction, BOARD_SIZE,
    Piece, Board,
    Move, MoveKind, MoveRecord,
    GameRng,
    GameState, Phase,
};

pub use crate::rules::{
    apply_move, legal_destinations, legal_moves, new_game,
    EngineError, GameResult, InvalidMove, Outcome, WinReason,
};

pub use crate::ai::{
    ai_choose_move, evaluate,
    AiConfig, Heuristic, Minimax, MoveStrategy, SearchResult, SearchStats, Strategy,
};

pub use crate::session::{Mode, Pending, Session, SessionConfig};
