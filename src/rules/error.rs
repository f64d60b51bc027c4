//! Rule violations and engine errors.
//!
//! Every variant is recoverable: the caller re-prompts for a move. A side
//! with no legal moves is reported as an error only by operations that
//! must produce a move; the state machine itself treats it as a loss.

use thiserror::Error;

use crate::core::{Move, Side, Square};

/// Why a requested move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("square {0} is off the board")]
    OffBoard(Square),

    #[error("square {0} is not a playable square")]
    Unplayable(Square),

    #[error("no piece on {0}")]
    EmptySource(Square),

    #[error("it is {expected}'s turn, but the piece belongs to {found}")]
    WrongTurn { expected: Side, found: Side },

    #[error("destination {0} is occupied")]
    Occupied(Square),

    #[error("{0} is not a one- or two-square diagonal")]
    BadGeometry(Move),

    #[error("{0} moves an uncrowned piece backward")]
    Backward(Move),

    #[error("no opposing piece to capture on {0}")]
    NoCaptureTarget(Square),

    #[error("a capture is available and must be taken")]
    CaptureRequired,

    #[error("the capture chain must continue from {at}")]
    ChainLocked { at: Square },

    #[error("the game is over")]
    GameOver,
}

/// Errors from operations that drive a game forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),

    #[error("{0} has no legal moves")]
    NoLegalMoves(Side),

    #[error("it is not the computer's turn")]
    NotAiTurn,

    #[error("it is the computer's turn")]
    NotHumanTurn,
}
