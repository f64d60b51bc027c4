//! Game session driver.
//!
//! `Session` wraps a `GameState` with a game mode, a configured AI
//! strategy and its random stream. It never blocks: after each move the
//! caller asks `pending()` what should happen next, and when the answer is
//! `Pending::Ai` it waits out the reported delay (however the front end
//! schedules work) and then calls `play_ai`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ai::{choose_with, AiConfig, MoveStrategy, SearchStats};
use crate::core::{GameRng, GameState, Move, Side, Square};
use crate::rules::{self, apply_move, EngineError, GameResult, InvalidMove, Outcome};

/// Who controls each side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Both sides are played by humans.
    TwoPlayer,
    /// One side is played by the computer.
    SinglePlayer { ai_side: Side },
}

impl Default for Mode {
    fn default() -> Self {
        Mode::SinglePlayer { ai_side: Side::B }
    }
}

impl Mode {
    #[must_use]
    pub fn is_ai(self, side: Side) -> bool {
        matches!(self, Mode::SinglePlayer { ai_side } if ai_side == side)
    }
}

/// Session configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub mode: Mode,
    pub ai: AiConfig,
}

impl SessionConfig {
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_ai(mut self, ai: AiConfig) -> Self {
        self.ai = ai;
        self
    }
}

/// What the session is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pending {
    /// A human move for this side.
    Human(Side),
    /// The computer should move for `side` after `delay`.
    Ai { side: Side, delay: Duration },
    /// The game has ended; only `replay` makes progress.
    GameOver(GameResult),
}

/// A sequence of games under one configuration, with a running score.
pub struct Session {
    config: SessionConfig,
    state: GameState,
    strategy: Box<dyn MoveStrategy>,
    /// Match-level stream; forked once per game.
    rng: GameRng,
    game_rng: GameRng,
}

impl Session {
    /// Start a session at the standard opening position.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::from_state(config, GameState::new())
    }

    /// Start a session from an existing game state.
    #[must_use]
    pub fn from_state(config: SessionConfig, state: GameState) -> Self {
        let mut rng = GameRng::from_seed_opt(config.ai.seed);
        let game_rng = rng.fork();
        let strategy = config.ai.strategy.build();
        debug!(mode = ?config.mode, strategy = strategy.name(), seed = rng.seed(), "session started");

        Self {
            config,
            state,
            strategy,
            rng,
            game_rng,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Seed of the match-level random stream.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn pending(&self) -> Pending {
        if let Some(result) = self.state.result() {
            return Pending::GameOver(result);
        }

        let side = self.state.turn();
        if self.config.mode.is_ai(side) {
            Pending::Ai {
                side,
                delay: self.config.ai.move_delay(),
            }
        } else {
            Pending::Human(side)
        }
    }

    /// Statistics from the computer's last search, if its strategy searches.
    #[must_use]
    pub fn last_search_stats(&self) -> Option<&SearchStats> {
        self.strategy.stats()
    }

    /// Destinations to highlight when a human selects `from`.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        rules::legal_destinations(&self.state, from)
    }

    /// Apply a move entered by a human.
    pub fn play_human(&mut self, mv: Move) -> Result<Outcome, EngineError> {
        if !self.state.is_over() && self.config.mode.is_ai(self.state.turn()) {
            return Err(EngineError::NotHumanTurn);
        }
        Ok(apply_move(&mut self.state, mv)?)
    }

    /// Let the computer make one move.
    ///
    /// A capture that opens a chain leaves the session pending on the AI
    /// again; each jump is its own call.
    pub fn play_ai(&mut self) -> Result<Outcome, EngineError> {
        if self.state.is_over() {
            return Err(InvalidMove::GameOver.into());
        }

        let side = self.state.turn();
        if !self.config.mode.is_ai(side) {
            return Err(EngineError::NotAiTurn);
        }

        let mv = choose_with(self.strategy.as_mut(), &self.state, &mut self.game_rng)
            .ok_or(EngineError::NoLegalMoves(side))?;
        debug!(%side, %mv, strategy = self.strategy.name(), "computer move");
        if let Some(stats) = self.strategy.stats() {
            debug!(
                nodes = stats.nodes,
                nodes_per_second = stats.nodes_per_second(),
                "search stats"
            );
        }
        Ok(apply_move(&mut self.state, mv)?)
    }

    /// Start the next game from the standard position, keeping the score.
    pub fn replay(&mut self) {
        self.state.reset();
        self.game_rng = self.rng.fork();
        debug!(
            score_a = self.state.score(Side::A),
            score_b = self.state.score(Side::B),
            "new game"
        );
    }
}
