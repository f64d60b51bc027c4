//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two players. Side A moves first from the bottom of the board
//! (rows 5-7) toward row 0; Side B starts on rows 0-2 and moves toward row 7.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`, used for scores.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::square::BOARD_SIZE;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Both sides, in turn order.
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Row delta of a forward step for an uncrowned piece.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Side::A => -1,
            Side::B => 1,
        }
    }

    /// The row this side's pieces are crowned on (the opponent's back rank).
    #[must_use]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Side::A => 0,
            Side::B => BOARD_SIZE - 1,
        }
    }

    /// This side's own back rank.
    #[must_use]
    pub const fn home_row(self) -> i8 {
        self.opponent().promotion_row()
    }

    /// Whether `row` belongs to this side's three starting rows.
    #[must_use]
    pub const fn is_starting_row(self, row: i8) -> bool {
        match self {
            Side::A => row >= BOARD_SIZE - 3 && row < BOARD_SIZE,
            Side::B => row >= 0 && row < 3,
        }
    }

    /// Rows travelled from the own back rank toward promotion.
    #[must_use]
    pub const fn advancement(self, row: i8) -> i8 {
        match self {
            Side::A => BOARD_SIZE - 1 - row,
            Side::B => row,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "Side A"),
            Side::B => write!(f, "Side B"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_checkers::core::{Side, SideMap};
///
/// let mut scores: SideMap<u32> = SideMap::with_default();
/// scores[Side::B] += 1;
///
/// assert_eq!(scores[Side::A], 0);
/// assert_eq!(scores[Side::B], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::A), factory(Side::B)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new SideMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert_eq!(Side::A.opponent(), Side::B);
        assert_eq!(Side::B.opponent(), Side::A);
        assert_eq!(Side::A.forward(), -1);
        assert_eq!(Side::B.forward(), 1);
        assert_eq!(format!("{}", Side::A), "Side A");
    }

    #[test]
    fn test_promotion_and_home_rows() {
        assert_eq!(Side::A.promotion_row(), 0);
        assert_eq!(Side::B.promotion_row(), 7);
        assert_eq!(Side::A.home_row(), 7);
        assert_eq!(Side::B.home_row(), 0);
    }

    #[test]
    fn test_starting_rows() {
        let a_rows: Vec<_> = (0..8).filter(|&r| Side::A.is_starting_row(r)).collect();
        let b_rows: Vec<_> = (0..8).filter(|&r| Side::B.is_starting_row(r)).collect();
        assert_eq!(a_rows, vec![5, 6, 7]);
        assert_eq!(b_rows, vec![0, 1, 2]);
    }

    #[test]
    fn test_advancement() {
        assert_eq!(Side::A.advancement(7), 0);
        assert_eq!(Side::A.advancement(0), 7);
        assert_eq!(Side::B.advancement(0), 0);
        assert_eq!(Side::B.advancement(5), 5);
    }

    #[test]
    fn test_side_map_new() {
        let map = SideMap::new(|s| s.index() * 10);
        assert_eq!(map[Side::A], 0);
        assert_eq!(map[Side::B], 10);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<u32> = SideMap::with_value(0);
        map[Side::A] = 3;
        *map.get_mut(Side::B) += 2;

        assert_eq!(map[Side::A], 3);
        assert_eq!(map[Side::B], 2);
    }

    #[test]
    fn test_side_map_iter() {
        let map = SideMap::new(|s| s.index() as u32);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::A, &0), (Side::B, &1)]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map: SideMap<u32> = SideMap::new(|s| s.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
