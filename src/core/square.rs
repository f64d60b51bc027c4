//! Board coordinates and diagonal directions.
//!
//! Coordinates are signed so that off-board targets (a jump past the edge,
//! a malformed request from the presentation layer) can be represented and
//! rejected by the validator instead of underflowing.

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: i8 = 8;

/// A `(row, col)` coordinate. May lie off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Dark squares, where `row + col` is odd. Only these ever hold pieces.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        self.in_bounds() && (self.row + self.col) % 2 == 1
    }

    /// The square `steps` diagonal steps away in `dir`.
    #[must_use]
    pub const fn offset(self, dir: Direction, steps: i8) -> Self {
        Self {
            row: self.row + dir.dr * steps,
            col: self.col + dir.dc * steps,
        }
    }

    /// All 32 playable squares in row-major order.
    pub fn playable() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
            .filter(|sq| sq.is_playable())
    }
}

impl From<(i8, i8)> for Square {
    fn from((row, col): (i8, i8)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A unit diagonal step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

impl Direction {
    pub const UP_LEFT: Direction = Direction { dr: -1, dc: -1 };
    pub const UP_RIGHT: Direction = Direction { dr: -1, dc: 1 };
    pub const DOWN_LEFT: Direction = Direction { dr: 1, dc: -1 };
    pub const DOWN_RIGHT: Direction = Direction { dr: 1, dc: 1 };

    /// The four diagonals.
    pub const ALL: [Direction; 4] = [
        Direction::UP_LEFT,
        Direction::UP_RIGHT,
        Direction::DOWN_LEFT,
        Direction::DOWN_RIGHT,
    ];

    #[must_use]
    pub const fn reverse(self) -> Self {
        Self {
            dr: -self.dr,
            dc: -self.dc,
        }
    }
}
