//! Search module for Gomoku AI
//!
//! Contains:
//! - Full-width depth-limited minimax
//! - Alpha-beta with one-ply move ordering and top-8 truncation
//!
//! Both searches mutate the board in place and restore it before returning.
//! Ties between equally scored moves are broken uniformly at random using
//! the searcher's own random source, so a seeded searcher is reproducible.

pub mod alphabeta;
pub mod minimax;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate;
use crate::rules::{candidate_moves, has_winner};

pub use alphabeta::MAX_BRANCH;

/// Infinity score for alpha-beta bounds and initial best scores
pub const INF: i32 = i32::MAX;

/// Search result: the score is always present, the move is absent
/// only when the position was terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Score from the perspective side's point of view
    pub score: i32,
    /// Chosen move, if any move was searched
    pub best_move: Option<Pos>,
}

impl SearchResult {
    #[inline]
    fn terminal(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited (every call into a search function)
    pub nodes: u64,
    /// Static evaluations at terminal nodes
    pub leaf_evals: u64,
    /// Static evaluations spent on alpha-beta move ordering
    pub ordering_evals: u64,
    /// Alpha-beta cutoffs (beta <= alpha)
    pub cutoffs: u64,
}

/// Tree searcher holding the random source for tie-breaking.
///
/// # Example
///
/// ```
/// use gomoku::{Board, Pos, Stone};
/// use gomoku::search::Searcher;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let mut board = Board::new();
/// board.place(Pos::new(7, 7), Stone::Black).unwrap();
/// let before = board.clone();
///
/// let mut searcher = Searcher::new(SmallRng::seed_from_u64(7));
/// let result = searcher.minimax(&mut board, 1, true, Stone::White, Stone::White);
/// assert!(result.best_move.is_some());
/// assert_eq!(board, before);
/// ```
pub struct Searcher<R: Rng> {
    rng: R,
    stats: SearchStats,
}

impl<R: Rng> Searcher<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Statistics accumulated since creation or the last reset
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Terminal check shared by both searches.
    ///
    /// A node is terminal when no depth is left, either side has five,
    /// or there are no candidate moves.
    fn expand(&mut self, board: &Board, depth: i32, perspective: Stone) -> Node {
        self.stats.nodes += 1;

        let terminal = depth <= 0
            || has_winner(board, perspective)
            || has_winner(board, perspective.opponent());
        let moves = if terminal { Vec::new() } else { candidate_moves(board) };

        if moves.is_empty() {
            self.stats.leaf_evals += 1;
            Node::Terminal(SearchResult::terminal(evaluate(board, perspective)))
        } else {
            Node::Expand(moves)
        }
    }

    /// Uniform choice among the tied best moves
    fn pick(&mut self, best: BestMoves) -> SearchResult {
        SearchResult {
            score: best.score,
            best_move: best.moves.choose(&mut self.rng).copied(),
        }
    }
}

enum Node {
    Terminal(SearchResult),
    Expand(Vec<Pos>),
}

/// Best score seen so far and every move that reached it.
struct BestMoves {
    maximizing: bool,
    score: i32,
    moves: Vec<Pos>,
}

impl BestMoves {
    fn new(maximizing: bool) -> Self {
        Self {
            maximizing,
            score: if maximizing { -INF } else { INF },
            moves: Vec::new(),
        }
    }

    /// Strictly better replaces the set, equal joins it.
    fn offer(&mut self, mv: Pos, score: i32) {
        let better = if self.maximizing {
            score > self.score
        } else {
            score < self.score
        };
        if better {
            self.score = score;
            self.moves.clear();
            self.moves.push(mv);
        } else if score == self.score {
            self.moves.push(mv);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_moves_maximizing() {
        let mut best = BestMoves::new(true);
        best.offer(Pos::new(0, 0), 5);
        best.offer(Pos::new(0, 1), 3);
        best.offer(Pos::new(0, 2), 5);
        assert_eq!(best.score, 5);
        assert_eq!(best.moves, vec![Pos::new(0, 0), Pos::new(0, 2)]);

        best.offer(Pos::new(0, 3), 9);
        assert_eq!(best.moves, vec![Pos::new(0, 3)]);
    }

    #[test]
    fn test_best_moves_minimizing() {
        let mut best = BestMoves::new(false);
        best.offer(Pos::new(1, 0), 5);
        best.offer(Pos::new(1, 1), -2);
        best.offer(Pos::new(1, 2), -2);
        best.offer(Pos::new(1, 3), 0);
        assert_eq!(best.score, -2);
        assert_eq!(best.moves, vec![Pos::new(1, 1), Pos::new(1, 2)]);
    }

    #[test]
    fn test_best_moves_accepts_extreme_scores() {
        let mut best = BestMoves::new(true);
        best.offer(Pos::new(2, 2), -INF + 1);
        assert_eq!(best.moves.len(), 1);
    }
}
