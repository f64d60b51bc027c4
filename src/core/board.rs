//! The 8×8 board.
//!
//! The board is pure data: it stores pieces and answers occupancy queries.
//! Legality lives in `rules::movegen`.

use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::side::Side;
use super::square::{Square, BOARD_SIZE};

const N: usize = BOARD_SIZE as usize;

/// An 8×8 grid of optional pieces.
///
/// `Board` is `Copy`; cloning it for simulation is a deep copy.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; N]; N],
        }
    }

    /// The standard opening position: Side B on rows 0-2, Side A on rows 5-7.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for sq in Square::playable() {
            for side in Side::ALL {
                if side.is_starting_row(sq.row) {
                    board.set(sq, Some(Piece::man(side)));
                }
            }
        }
        board
    }

    /// Parse a board from eight rows of `.`/`a`/`A`/`b`/`B`.
    ///
    /// Whitespace inside a row is ignored. Returns `None` on unknown
    /// characters, wrong row lengths, or pieces on light squares.
    ///
    /// ```
    /// use rust_checkers::core::{Board, Side, Square};
    ///
    /// let board = Board::from_rows([
    ///     "........",
    ///     "........",
    ///     "........",
    ///     "....b...",
    ///     "...a....",
    ///     "........",
    ///     "........",
    ///     "........",
    /// ]).unwrap();
    ///
    /// assert_eq!(board.count(Side::A), 1);
    /// assert_eq!(board.get(Square::new(3, 4)).map(|p| p.owner()), Some(Side::B));
    /// ```
    #[must_use]
    pub fn from_rows(rows: [&str; N]) -> Option<Self> {
        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != N {
                return None;
            }
            for (col, c) in cells.into_iter().enumerate() {
                if c == '.' {
                    continue;
                }
                let piece = Piece::from_symbol(c)?;
                let sq = Square::new(row as i8, col as i8);
                if !sq.is_playable() {
                    return None;
                }
                board.set(sq, Some(piece));
            }
        }
        Some(board)
    }

    /// The piece on `square`, or `None` if empty or off-board.
    #[must_use]
    pub fn get(&self, square: Square) -> Option<Piece> {
        if !square.in_bounds() {
            return None;
        }
        self.cells[square.row as usize][square.col as usize]
    }

    /// Place or clear a piece.
    ///
    /// # Panics
    ///
    /// Panics if `square` is off the board.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        assert!(square.in_bounds(), "square {square} is off the board");
        self.cells[square.row as usize][square.col as usize] = piece;
    }

    /// Remove and return the piece on `square`.
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        if !square.in_bounds() {
            return None;
        }
        self.cells[square.row as usize][square.col as usize].take()
    }

    #[must_use]
    pub fn is_empty_at(&self, square: Square) -> bool {
        square.in_bounds() && self.get(square).is_none()
    }

    #[must_use]
    pub fn is_playable(&self, square: Square) -> bool {
        square.is_playable()
    }

    /// Number of pieces owned by `side`.
    #[must_use]
    pub fn count(&self, side: Side) -> u32 {
        self.pieces().filter(|(_, p)| p.owner() == side).count() as u32
    }

    /// Total number of pieces on the board.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.pieces().count() as u32
    }

    /// Iterate over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::playable().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Iterate over the squares holding `side`'s pieces.
    pub fn squares_of(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, p)| p.owner() == side)
            .map(|(sq, _)| sq)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let c = self
                    .get(Square::new(row, col))
                    .map_or('.', Piece::symbol);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board:")?;
        write!(f, "{self}")
    }
}
