//! Static board evaluation.

use crate::core::{Board, Side};

/// Material plus advancement, from `ai`'s point of view.
///
/// Each piece is worth 7 as a king or 3 as a man. Men additionally earn
/// one and a half points per row advanced from their own back rank,
/// truncated per piece. AI pieces add, opposing pieces subtract.
#[must_use]
pub fn evaluate(board: &Board, ai: Side) -> i32 {
    board
        .pieces()
        .map(|(sq, piece)| {
            let positional = if piece.is_crowned() {
                0
            } else {
                i32::from(piece.owner().advancement(sq.row)) * 3 / 2
            };
            let value = piece.value() + positional;
            if piece.owner() == ai {
                value
            } else {
                -value
            }
        })
        .sum()
}
