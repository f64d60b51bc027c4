//! Checkers pieces.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// A man or king belonging to one side.
///
/// Pieces are plain values: copying a board copies its pieces, so a
/// simulated board never shares a piece with the board it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    owner: Side,
    crowned: bool,
}

impl Piece {
    /// An uncrowned man.
    #[must_use]
    pub const fn man(owner: Side) -> Self {
        Self {
            owner,
            crowned: false,
        }
    }

    #[must_use]
    pub const fn king(owner: Side) -> Self {
        Self {
            owner,
            crowned: true,
        }
    }

    #[must_use]
    pub const fn owner(self) -> Side {
        self.owner
    }

    #[must_use]
    pub const fn is_crowned(self) -> bool {
        self.crowned
    }

    /// Crown the piece. Returns true if it was not already a king.
    pub fn crown(&mut self) -> bool {
        let promoted = !self.crowned;
        self.crowned = true;
        promoted
    }

    /// Material value used by the evaluator.
    #[must_use]
    pub const fn value(self) -> i32 {
        if self.crowned {
            7
        } else {
            3
        }
    }

    /// One-character board symbol: `a`/`b` for men, `A`/`B` for kings.
    #[must_use]
    pub const fn symbol(self) -> char {
        match (self.owner, self.crowned) {
            (Side::A, false) => 'a',
            (Side::A, true) => 'A',
            (Side::B, false) => 'b',
            (Side::B, true) => 'B',
        }
    }

    /// Inverse of [`Piece::symbol`].
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            'a' => Some(Piece::man(Side::A)),
            'A' => Some(Piece::king(Side::A)),
            'b' => Some(Piece::man(Side::B)),
            'B' => Some(Piece::king(Side::B)),
            _ => None,
        }
    }
}
