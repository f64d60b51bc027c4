//! Turn state machine.
//!
//! A turn moves through these phases:
//!
//! ```text
//! AwaitingMove(turn) --apply_move--> PostMove
//!     PostMove --capture with another capture available--> ChainCapture(turn, square)
//!     PostMove --otherwise--> switch turn --> CheckTerminal
//!     CheckTerminal --> AwaitingMove(other) | GameOver(winner)
//! ```
//!
//! `apply_move` validates completely before touching the state, so a
//! rejected move leaves the game exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, GameState, Move, MoveKind, MoveRecord, Phase, Side, Square};

use super::error::InvalidMove;
use super::movegen::{
    captures_for_piece, check_move, has_further_capture, legal_moves_for_side, play_on_board,
    side_has_capture,
};

/// Why the losing side lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// The loser has no pieces left.
    NoPieces,
    /// The loser has pieces but none of them can move.
    NoMoves,
}

/// Result of a completed game. Checkers here has no draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Side,
    pub reason: WinReason,
}

impl GameResult {
    #[must_use]
    pub const fn new(winner: Side, reason: WinReason) -> Self {
        Self { winner, reason }
    }

    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner == side
    }

    #[must_use]
    pub fn loser(&self) -> Side {
        self.winner.opponent()
    }
}

/// What happened when a move was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub mv: Move,
    pub kind: MoveKind,
    /// The mover was crowned by this move.
    pub promoted: bool,
    /// The square of the removed piece, for captures.
    pub captured: Option<Square>,
    /// Set when the same side must capture again from this square.
    pub chain: Option<Square>,
    /// Set when this move ended the game.
    pub result: Option<GameResult>,
}

impl Outcome {
    /// Whether the turn passed to the other side.
    #[must_use]
    pub fn turn_complete(&self) -> bool {
        self.chain.is_none()
    }
}

/// A fresh game from the standard position.
#[must_use]
pub fn new_game() -> GameState {
    GameState::new()
}

/// Moves the side to move may make right now.
///
/// Honours forced capture and a pending capture chain. Empty once the game
/// is over.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    match state.phase() {
        Phase::GameOver(_) => Vec::new(),
        Phase::ChainCapture(at) => captures_for_piece(state.board(), at).into_vec(),
        Phase::AwaitingMove => legal_moves_for_side(state.board(), state.turn()),
    }
}

/// Destinations reachable from `from` this turn, for highlighting.
#[must_use]
pub fn legal_destinations(state: &GameState, from: Square) -> Vec<Square> {
    legal_moves(state)
        .into_iter()
        .filter(|mv| mv.from == from)
        .map(|mv| mv.to)
        .collect()
}

/// Decide whether `to_move` has lost.
///
/// A side that has no pieces, or whose pieces have no legal move, loses.
#[must_use]
pub fn terminal_result(board: &Board, to_move: Side) -> Option<GameResult> {
    if board.count(to_move) == 0 {
        return Some(GameResult::new(to_move.opponent(), WinReason::NoPieces));
    }
    if legal_moves_for_side(board, to_move).is_empty() {
        return Some(GameResult::new(to_move.opponent(), WinReason::NoMoves));
    }
    None
}

fn validate(state: &GameState, mv: Move) -> Result<MoveKind, InvalidMove> {
    let chain = match state.phase() {
        Phase::GameOver(_) => return Err(InvalidMove::GameOver),
        Phase::ChainCapture(at) if mv.from != at => return Err(InvalidMove::ChainLocked { at }),
        Phase::ChainCapture(at) => Some(at),
        Phase::AwaitingMove => None,
    };

    let kind = check_move(state.board(), state.turn(), mv)?;

    if kind == MoveKind::Simple && (chain.is_some() || side_has_capture(state.board(), state.turn()))
    {
        return Err(InvalidMove::CaptureRequired);
    }
    Ok(kind)
}

/// Apply a move for the side to move.
///
/// On success the piece is relocated, any jumped piece removed, the mover
/// crowned if it reached the far rank, and then either a capture chain is
/// opened (same side moves again from the landing square) or the turn
/// passes. When the turn passes and the new side to move has lost, the
/// game ends and the winner's score increments.
pub fn apply_move(state: &mut GameState, mv: Move) -> Result<Outcome, InvalidMove> {
    let kind = validate(state, mv)?;
    let side = state.turn;

    let promoted = play_on_board(&mut state.board, mv);
    let captured = (kind == MoveKind::Capture).then(|| mv.midpoint());
    let ply = state.ply();
    state.history.push(MoveRecord::new(side, mv, ply, promoted));

    debug!(%side, %mv, ?kind, ply, "applied move");
    if promoted {
        debug!(%side, square = %mv.to, "piece crowned");
    }

    if kind == MoveKind::Capture && has_further_capture(&state.board, mv.to) {
        debug!(%side, square = %mv.to, "capture chain continues");
        state.phase = Phase::ChainCapture(mv.to);
        return Ok(Outcome {
            mv,
            kind,
            promoted,
            captured,
            chain: Some(mv.to),
            result: None,
        });
    }

    state.turn = side.opponent();
    state.phase = Phase::AwaitingMove;

    let result = terminal_result(&state.board, state.turn);
    if let Some(result) = result {
        state.scores[result.winner] += 1;
        state.phase = Phase::GameOver(result);
        debug!(winner = %result.winner, reason = ?result.reason, "game over");
    }

    Ok(Outcome {
        mv,
        kind,
        promoted,
        captured,
        chain: None,
        result,
    })
}
