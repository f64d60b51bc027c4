//! Core types: sides, squares, pieces, the board, moves, RNG and game state.
//!
//! These are plain data. Rules that decide what may happen to them live in
//! `rules`; move choice lives in `ai`.

pub mod side;
pub mod square;
pub mod piece;
pub mod board;
pub mod moves;
pub mod rng;
pub mod state;

pub use side::{Side, SideMap};
pub use square::{Direction, Square, BOARD_SIZE};
pub use piece::Piece;
pub use board::Board;
pub use moves::{Move, MoveKind, MoveRecord};
pub use rng::GameRng;
pub use state::{GameState, Phase};
