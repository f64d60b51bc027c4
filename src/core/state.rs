//! Live game state.
//!
//! `GameState` owns the authoritative board, the side to move, the
//! running score and the turn phase. It is only mutated through
//! `rules::apply_move`; AI strategies work on copies of the board.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::moves::MoveRecord;
use super::side::{Side, SideMap};
use super::square::Square;
use crate::rules::GameResult;

/// Where the game is within a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The side to move may move any piece (subject to forced capture).
    AwaitingMove,
    /// A capture chain is pending: the side to move must capture again
    /// with the piece on this square.
    ChainCapture(Square),
    /// The game has ended.
    GameOver(GameResult),
}

/// Complete state of one game plus the score carried across replays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Side,
    pub(crate) scores: SideMap<u32>,
    pub(crate) phase: Phase,
    pub(crate) history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh game from the standard position, Side A to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Side::A)
    }

    /// A game starting from an arbitrary position.
    ///
    /// Terminal status is not evaluated until the first move is applied.
    #[must_use]
    pub fn from_board(board: Board, turn: Side) -> Self {
        Self {
            board,
            turn,
            scores: SideMap::with_default(),
            phase: Phase::AwaitingMove,
            history: Vec::new(),
        }
    }

    /// Start a new game from the standard position, keeping the scores.
    pub fn reset(&mut self) {
        let scores = self.scores.clone();
        *self = Self::new();
        self.scores = scores;
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side whose move it is.
    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        self.scores[side]
    }

    #[must_use]
    pub fn scores(&self) -> &SideMap<u32> {
        &self.scores
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    /// The square the next move must start from, if a chain is pending.
    #[must_use]
    pub fn chain_square(&self) -> Option<Square> {
        match self.phase {
            Phase::ChainCapture(sq) => Some(sq),
            _ => None,
        }
    }

    /// Moves applied so far in this game.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Number of moves applied so far.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.history.len() as u32
    }
}
