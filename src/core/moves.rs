//! Move representation: source square + destination square.
//!
//! The kind of a move (simple step or capture) is derived from its
//! geometry. Whether the move is legal on a given board is decided by
//! `rules::movegen`.

use serde::{Deserialize, Serialize};

use super::side::Side;
use super::square::Square;

/// Geometric classification of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// One diagonal step.
    Simple,
    /// Two diagonal steps over an opposing piece.
    Capture,
}

/// A single step or jump.
///
/// ## Example
///
/// ```
/// use rust_checkers::core::{Move, MoveKind, Square};
///
/// let jump = Move::new(Square::new(4, 3), Square::new(2, 5));
/// assert_eq!(jump.kind(), Some(MoveKind::Capture));
/// assert_eq!(jump.midpoint(), Square::new(3, 4));
///
/// let step = Move::new(Square::new(5, 0), Square::new(4, 1));
/// assert_eq!(step.kind(), Some(MoveKind::Simple));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Row and column deltas. Wraps for coordinates far off the board.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        (
            self.to.row.wrapping_sub(self.from.row),
            self.to.col.wrapping_sub(self.from.col),
        )
    }

    /// `Simple` for a one-square diagonal, `Capture` for a two-square
    /// diagonal, `None` for any other shape.
    #[must_use]
    pub const fn kind(self) -> Option<MoveKind> {
        let dr = (self.to.row as i16 - self.from.row as i16).unsigned_abs();
        let dc = (self.to.col as i16 - self.from.col as i16).unsigned_abs();
        if dr != dc {
            return None;
        }
        match dr {
            1 => Some(MoveKind::Simple),
            2 => Some(MoveKind::Capture),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(self.kind(), Some(MoveKind::Capture))
    }

    /// The jumped square of a capture.
    #[must_use]
    pub const fn midpoint(self) -> Square {
        Square::new(
            ((self.from.row as i16 + self.to.row as i16) / 2) as i8,
            ((self.from.col as i16 + self.to.col as i16) / 2) as i8,
        )
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A move that was applied to a live game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that moved.
    pub side: Side,

    pub mv: Move,

    /// Ply number within the game (starts at 0).
    pub ply: u32,

    /// Whether the mover was crowned by this move.
    pub promoted: bool,
}

impl MoveRecord {
    #[must_use]
    pub fn new(side: Side, mv: Move, ply: u32, promoted: bool) -> Self {
        Self {
            side,
            mv,
            ply,
            promoted,
        }
    }
}
