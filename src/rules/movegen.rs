//! Move validation and generation.
//!
//! All functions here are pure queries over a `Board`. They know nothing
//! about turn phases or scores; `rules::engine` layers those on top.
//!
//! ## Forced capture
//!
//! [`legal_moves_for_side`] never mixes kinds: if any capture exists for
//! the side, only captures are returned.

use smallvec::SmallVec;

use crate::core::{Board, Direction, Move, MoveKind, Piece, Side, Square};

use super::error::InvalidMove;

/// Moves available to a single piece. At most 4 directions × 2 distances.
pub type PieceMoves = SmallVec<[Move; 8]>;

/// Diagonals a piece may travel along.
#[must_use]
pub fn directions(piece: Piece) -> &'static [Direction] {
    const A_FORWARD: [Direction; 2] = [Direction::UP_LEFT, Direction::UP_RIGHT];
    const B_FORWARD: [Direction; 2] = [Direction::DOWN_LEFT, Direction::DOWN_RIGHT];

    if piece.is_crowned() {
        &Direction::ALL
    } else {
        match piece.owner() {
            Side::A => &A_FORWARD,
            Side::B => &B_FORWARD,
        }
    }
}

/// Check a move against the board for `turn`, reporting the first rule
/// it breaks.
///
/// This covers a single move in isolation. Forced capture and capture
/// chains are enforced by the state machine.
pub fn check_move(board: &Board, turn: Side, mv: Move) -> Result<MoveKind, InvalidMove> {
    if !mv.from.in_bounds() {
        return Err(InvalidMove::OffBoard(mv.from));
    }
    if !mv.to.in_bounds() {
        return Err(InvalidMove::OffBoard(mv.to));
    }
    if !mv.to.is_playable() {
        return Err(InvalidMove::Unplayable(mv.to));
    }

    let piece = board.get(mv.from).ok_or(InvalidMove::EmptySource(mv.from))?;
    if piece.owner() != turn {
        return Err(InvalidMove::WrongTurn {
            expected: turn,
            found: piece.owner(),
        });
    }
    if board.get(mv.to).is_some() {
        return Err(InvalidMove::Occupied(mv.to));
    }

    let kind = mv.kind().ok_or(InvalidMove::BadGeometry(mv))?;

    let (dr, _) = mv.delta();
    if !piece.is_crowned() && dr.signum() != piece.owner().forward() {
        return Err(InvalidMove::Backward(mv));
    }

    if kind == MoveKind::Capture {
        let mid = mv.midpoint();
        match board.get(mid) {
            Some(victim) if victim.owner() != piece.owner() => {}
            _ => return Err(InvalidMove::NoCaptureTarget(mid)),
        }
    }

    Ok(kind)
}

/// Whether `mv` is a legal step or jump for `turn` on this board.
#[must_use]
pub fn is_legal(board: &Board, turn: Side, mv: Move) -> bool {
    check_move(board, turn, mv).is_ok()
}

/// Every legal step and jump for the piece on `square`, ignoring forced
/// capture across other pieces. Empty if there is no piece.
#[must_use]
pub fn legal_moves_for_piece(board: &Board, square: Square) -> PieceMoves {
    let mut moves = PieceMoves::new();
    let Some(piece) = board.get(square) else {
        return moves;
    };

    for &dir in directions(piece) {
        for steps in [1, 2] {
            let mv = Move::new(square, square.offset(dir, steps));
            if is_legal(board, piece.owner(), mv) {
                moves.push(mv);
            }
        }
    }
    moves
}

/// Capture moves for the piece on `square`.
#[must_use]
pub fn captures_for_piece(board: &Board, square: Square) -> PieceMoves {
    legal_moves_for_piece(board, square)
        .into_iter()
        .filter(|mv| mv.is_capture())
        .collect()
}

/// All legal moves for `side`. Captures only, if any capture exists.
#[must_use]
pub fn legal_moves_for_side(board: &Board, side: Side) -> Vec<Move> {
    let mut captures = Vec::new();
    let mut simple = Vec::new();

    for square in board.squares_of(side) {
        for mv in legal_moves_for_piece(board, square) {
            if mv.is_capture() {
                captures.push(mv);
            } else {
                simple.push(mv);
            }
        }
    }

    if captures.is_empty() {
        simple
    } else {
        captures
    }
}

/// Whether `side` has any capture available.
#[must_use]
pub fn side_has_capture(board: &Board, side: Side) -> bool {
    board
        .squares_of(side)
        .any(|sq| has_further_capture(board, sq))
}

/// Whether the piece now on `square` can capture again.
///
/// Called after a capture has been applied (and any promotion with it),
/// so a newly crowned piece is checked in all four directions.
#[must_use]
pub fn has_further_capture(board: &Board, square: Square) -> bool {
    legal_moves_for_piece(board, square)
        .iter()
        .any(|mv| mv.is_capture())
}

/// Apply a move to a board without validation or turn bookkeeping.
///
/// Relocates the piece, removes a jumped piece and crowns on the far
/// rank. Returns whether the mover was promoted. Used by the state
/// machine after validation and by AI simulations on board copies.
pub fn play_on_board(board: &mut Board, mv: Move) -> bool {
    let Some(mut piece) = board.take(mv.from) else {
        return false;
    };
    if mv.is_capture() {
        board.set(mv.midpoint(), None);
    }
    let promoted = mv.to.row == piece.owner().promotion_row() && piece.crown();
    board.set(mv.to, Some(piece));
    promoted
}
