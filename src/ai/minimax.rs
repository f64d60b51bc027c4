//! Fixed-depth minimax search.
//!
//! Brute force, no pruning. Every node works on its own copy of the board,
//! so sibling branches can never observe each other's moves. Depth counts
//! plies, and each jump of a capture chain is its own ply taken by the same
//! side.

use std::time::Instant;

use tracing::trace;

use crate::core::{Board, GameRng, Move, Side, Square};
use crate::rules::{has_further_capture, play_on_board};

use super::eval::evaluate;
use super::policy::{candidate_moves, MoveStrategy};
use super::stats::SearchStats;

/// Search depth used when none is configured.
pub const DEFAULT_DEPTH: u32 = 3;

/// The outcome of a root search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move, `None` if the side had no legal move.
    pub mv: Option<Move>,
    /// Minimax value of the root from the searching side's view.
    pub score: i32,
    /// Every root move achieving `score`. `mv` is one of these.
    pub best_moves: Vec<Move>,
}

/// Minimax move selection.
#[derive(Clone, Debug)]
pub struct Minimax {
    depth: u32,
    stats: SearchStats,
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

/// A position inside the search: who moves, and from where if a chain
/// is pending.
#[derive(Clone, Copy)]
struct Node {
    board: Board,
    to_move: Side,
    chain: Option<Square>,
}

impl Node {
    /// Play `mv` on a copy of this node's board.
    fn child(&self, mv: Move) -> Node {
        let mut board = self.board;
        play_on_board(&mut board, mv);

        if mv.is_capture() && has_further_capture(&board, mv.to) {
            Node {
                board,
                to_move: self.to_move,
                chain: Some(mv.to),
            }
        } else {
            Node {
                board,
                to_move: self.to_move.opponent(),
                chain: None,
            }
        }
    }
}

impl Minimax {
    /// Search `depth` plies ahead. A depth of 0 is raised to 1 so the
    /// search always picks a move when one exists.
    #[must_use]
    pub fn new(depth: u32) -> Self {
        Self {
            depth: depth.max(1),
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search from the start of `side`'s turn.
    pub fn select_move(&mut self, board: &Board, side: Side, rng: &mut GameRng) -> SearchResult {
        self.search(board, side, None, rng)
    }

    /// Search from a position, optionally in the middle of a capture chain.
    ///
    /// Root moves with equal value are chosen between uniformly at random.
    pub fn search(
        &mut self,
        board: &Board,
        side: Side,
        chain: Option<Square>,
        rng: &mut GameRng,
    ) -> SearchResult {
        let start = Instant::now();
        self.stats.reset();
        self.stats.nodes = 1;

        let root = Node {
            board: *board,
            to_move: side,
            chain,
        };
        let moves = candidate_moves(board, side, chain);
        self.stats.root_moves = moves.len() as u32;

        if moves.is_empty() {
            self.stats.leaves = 1;
            return SearchResult {
                mv: None,
                score: evaluate(board, side),
                best_moves: Vec::new(),
            };
        }

        let mut best_score = i32::MIN;
        let mut best_moves = Vec::new();
        for mv in moves {
            let score = self.minimax(&root.child(mv), self.depth - 1, side);
            trace!(%mv, score, "root move scored");

            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(mv);
            } else if score == best_score {
                best_moves.push(mv);
            }
        }

        let mv = rng.choose(&best_moves).copied();
        self.stats.tied_moves = best_moves.len() as u32;
        self.stats.time_us = start.elapsed().as_micros() as u64;
        trace!(
            %side,
            nodes = self.stats.nodes,
            score = best_score,
            ties = best_moves.len(),
            "minimax search complete"
        );

        SearchResult {
            mv,
            score: best_score,
            best_moves,
        }
    }

    fn minimax(&mut self, node: &Node, depth: u32, ai: Side) -> i32 {
        self.stats.nodes += 1;

        let moves = candidate_moves(&node.board, node.to_move, node.chain);
        if depth == 0 || moves.is_empty() {
            self.stats.leaves += 1;
            return evaluate(&node.board, ai);
        }

        let children = moves.into_iter().map(|mv| node.child(mv));
        if node.to_move == ai {
            children.fold(i32::MIN, |best, child| {
                best.max(self.minimax(&child, depth - 1, ai))
            })
        } else {
            children.fold(i32::MAX, |best, child| {
                best.min(self.minimax(&child, depth - 1, ai))
            })
        }
    }
}

impl MoveStrategy for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn choose(
        &mut self,
        board: &Board,
        side: Side,
        chain: Option<Square>,
        rng: &mut GameRng,
    ) -> Option<Move> {
        self.search(board, side, chain, rng).mv
    }

    fn stats(&self) -> Option<&SearchStats> {
        Some(&self.stats)
    }
}
