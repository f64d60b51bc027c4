//! One-ply tactical move selection.
//!
//! Cheaper and weaker than minimax. Each candidate move is simulated once
//! and sorted into a bucket; the first non-empty bucket in priority order
//! supplies a uniformly random choice:
//!
//! 1. captures
//! 2. protective moves: a threatened piece steps to safety
//! 3. safe normal moves: an unthreatened piece moves somewhere unthreatened
//! 4. any normal move
//! 5. whatever is left (a threatened piece moving into another threat)

use tracing::trace;

use crate::core::{Board, Direction, GameRng, Move, Side, Square};
use crate::rules::play_on_board;

use super::policy::{candidate_moves, MoveStrategy};

/// Whether the piece on `square` could be jumped on the opponent's next
/// move.
///
/// True when, along some diagonal, an opposing piece sits on one side and
/// the square on the other side is on the board and empty.
#[must_use]
pub fn is_vulnerable(board: &Board, square: Square) -> bool {
    let Some(piece) = board.get(square) else {
        return false;
    };

    Direction::ALL.iter().any(|&dir| {
        let attacker = square.offset(dir.reverse(), 1);
        let landing = square.offset(dir, 1);
        board
            .get(attacker)
            .is_some_and(|p| p.owner() != piece.owner())
            && board.is_empty_at(landing)
    })
}

/// Candidate moves sorted by tactical category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveBuckets {
    pub captures: Vec<Move>,
    pub protective: Vec<Move>,
    /// Normal moves whose destination is not vulnerable.
    pub safe: Vec<Move>,
    /// All moves of pieces that were not vulnerable, safe or not.
    pub normal: Vec<Move>,
    /// Moves of vulnerable pieces that stay vulnerable.
    pub vulnerable: Vec<Move>,
}

impl MoveBuckets {
    /// Sort `side`'s candidate moves.
    #[must_use]
    pub fn classify(board: &Board, side: Side, chain: Option<Square>) -> Self {
        let mut buckets = Self::default();

        for mv in candidate_moves(board, side, chain) {
            if mv.is_capture() {
                buckets.captures.push(mv);
                continue;
            }

            let mut after = *board;
            play_on_board(&mut after, mv);
            let lands_safe = !is_vulnerable(&after, mv.to);

            if is_vulnerable(board, mv.from) {
                if lands_safe {
                    buckets.protective.push(mv);
                } else {
                    buckets.vulnerable.push(mv);
                }
            } else {
                if lands_safe {
                    buckets.safe.push(mv);
                }
                buckets.normal.push(mv);
            }
        }

        buckets
    }

    /// The highest-priority non-empty bucket.
    #[must_use]
    pub fn preferred(&self) -> &[Move] {
        [
            &self.captures,
            &self.protective,
            &self.safe,
            &self.normal,
            &self.vulnerable,
        ]
        .into_iter()
        .find(|bucket| !bucket.is_empty())
        .map(Vec::as_slice)
        .unwrap_or(&[])
    }
}

/// Heuristic move selection.
#[derive(Clone, Copy, Debug, Default)]
pub struct Heuristic;

impl MoveStrategy for Heuristic {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn choose(
        &mut self,
        board: &Board,
        side: Side,
        chain: Option<Square>,
        rng: &mut GameRng,
    ) -> Option<Move> {
        let buckets = MoveBuckets::classify(board, side, chain);
        trace!(
            %side,
            captures = buckets.captures.len(),
            protective = buckets.protective.len(),
            safe = buckets.safe.len(),
            normal = buckets.normal.len(),
            vulnerable = buckets.vulnerable.len(),
            "classified moves"
        );
        rng.choose(buckets.preferred()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col)
    }

    fn mv(r1: i8, c1: i8, r2: i8, c2: i8) -> Move {
        Move::new(sq(r1, c1), sq(r2, c2))
    }

    fn board(rows: [&str; 8]) -> Board {
        Board::from_rows(rows).expect("valid test board")
    }

    #[test]
    fn test_is_vulnerable() {
        let b = board([
            "........",
            "........",
            "........",
            "....b...",
            "...a....",
            "........",
            "........",
            "........",
        ]);
        // a on (4,3) can be jumped by b on (3,4) into (5,2), and vice versa
        assert!(is_vulnerable(&b, sq(4, 3)));
        assert!(is_vulnerable(&b, sq(3, 4)));
        assert!(!is_vulnerable(&b, sq(0, 1)), "empty square");
    }

    #[test]
    fn test_backed_piece_not_vulnerable() {
        let b = board([
            "........",
            "........",
            "........",
            "....b...",
            "...a....",
            "..a.....",
            "........",
            "........",
        ]);
        assert!(!is_vulnerable(&b, sq(4, 3)));
    }

    #[test]
    fn test_edge_piece_not_vulnerable() {
        let b = board([
            "........",
            "........",
            "........",
            "........",
            ".b......",
            "a.......",
            "........",
            "........",
        ]);
        // landing square (6,-1) is off the board
        assert!(!is_vulnerable(&b, sq(5, 0)));
        assert!(b.get(sq(4, 1)).is_some());
    }

    #[test]
    fn test_captures_take_priority() {
        let b = board([
            "........",
            "........",
            "........",
            "....b...",
            "...a....",
            "a.......",
            "........",
            "........",
        ]);
        let buckets = MoveBuckets::classify(&b, Side::A, None);
        assert_eq!(buckets.captures, vec![mv(4, 3, 2, 5)]);
        assert_eq!(buckets.preferred(), &[mv(4, 3, 2, 5)]);

        let mut rng = GameRng::new(0);
        assert_eq!(Heuristic.choose_move(&b, Side::A, &mut rng), Some(mv(4, 3, 2, 5)));
    }

    #[test]
    fn test_protective_move_preferred() {
        // b on (3,2) is threatened by a on (4,3) (landing (2,1) empty) and
        // cannot strike first because (5,4) is covered. Stepping to (4,1)
        // escapes; the other b on (1,6) has quiet moves.
        let b = board([
            "........",
            "......b.",
            "........",
            "..b.....",
            "...a....",
            "....a...",
            "........",
            "........",
        ]);
        let buckets = MoveBuckets::classify(&b, Side::B, None);

        assert!(buckets.captures.is_empty());
        assert_eq!(buckets.protective, vec![mv(3, 2, 4, 1)]);
        assert_eq!(buckets.preferred(), &[mv(3, 2, 4, 1)]);
        assert_eq!(buckets.normal.len(), 2);
    }

    #[test]
    fn test_safe_moves_filtered() {
        // b on (2,5) may go to (3,4), where a on (4,3) attacks it, or (3,6).
        let b = board([
            "........",
            "........",
            ".....b..",
            "........",
            "...a....",
            "........",
            "........",
            "........",
        ]);
        let buckets = MoveBuckets::classify(&b, Side::B, None);

        assert_eq!(buckets.normal.len(), 2);
        assert_eq!(buckets.safe, vec![mv(2, 5, 3, 6)]);

        let mut rng = GameRng::new(11);
        for _ in 0..20 {
            assert_eq!(Heuristic.choose_move(&b, Side::B, &mut rng), Some(mv(2, 5, 3, 6)));
        }
    }

    #[test]
    fn test_falls_back_to_normal_when_nothing_safe() {
        // Both destinations of b on (2,3) are attacked
        let b = board([
            "........",
            "........",
            "...b....",
            "........",
            ".a...a..",
            "........",
            "........",
            "........",
        ]);
        let buckets = MoveBuckets::classify(&b, Side::B, None);

        assert!(buckets.safe.is_empty());
        assert_eq!(buckets.normal.len(), 2);
        assert_eq!(buckets.preferred(), buckets.normal.as_slice());
    }

    #[test]
    fn test_last_resort_is_vulnerable_bucket() {
        // b on (2,3) is attacked by a on (3,4), cannot jump it because
        // (4,5) is covered, and its only step lands next to a on (4,1)
        let b = board([
            "........",
            "........",
            "...b....",
            "....a...",
            ".a...a..",
            "........",
            "........",
            "........",
        ]);
        let buckets = MoveBuckets::classify(&b, Side::B, None);

        assert!(buckets.captures.is_empty());
        assert!(buckets.protective.is_empty());
        assert!(buckets.safe.is_empty());
        assert!(buckets.normal.is_empty());
        assert_eq!(buckets.vulnerable, vec![mv(2, 3, 3, 2)]);
        assert_eq!(buckets.preferred(), &[mv(2, 3, 3, 2)]);

        let mut rng = GameRng::new(5);
        assert_eq!(Heuristic.choose_move(&b, Side::B, &mut rng), Some(mv(2, 3, 3, 2)));
    }

    #[test]
    fn test_no_moves() {
        let mut rng = GameRng::new(0);
        assert_eq!(Heuristic.choose_move(&Board::empty(), Side::A, &mut rng), None);
        assert!(MoveBuckets::default().preferred().is_empty());
    }
}
