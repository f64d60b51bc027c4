//! Computer opponents.
//!
//! ## Overview
//!
//! Two interchangeable strategies behind the `MoveStrategy` trait:
//!
//! - **Minimax**: fixed-depth search over board copies, scored by
//!   `evaluate` (material plus advancement). Capture chains are extra plies
//!   for the same side. Equal root moves are broken with the injected RNG.
//! - **Heuristic**: one-ply filter that prefers captures, then moves that
//!   rescue a threatened piece, then moves that do not hang a piece.
//!
//! ## Usage
//!
//! ```rust
//! use rust_checkers::ai::{ai_choose_move, Strategy};
//! use rust_checkers::core::{GameRng, GameState};
//! use rust_checkers::rules::apply_move;
//!
//! let mut state = GameState::new();
//! let mut rng = GameRng::new(42);
//!
//! if let Some(mv) = ai_choose_move(&state, Strategy::Minimax { depth: 2 }, &mut rng) {
//!     apply_move(&mut state, mv).unwrap();
//! }
//! ```

pub mod config;
pub mod eval;
pub mod heuristic;
pub mod minimax;
pub mod policy;
pub mod stats;

// Re-export main types
pub use config::AiConfig;
pub use eval::evaluate;
pub use heuristic::{is_vulnerable, Heuristic, MoveBuckets};
pub use minimax::{Minimax, SearchResult, DEFAULT_DEPTH};
pub use policy::{ai_choose_move, choose_with, MoveStrategy, Strategy};
pub use stats::SearchStats;
