//! Full-width depth-limited minimax
//!
//! Every candidate move is searched at every node; nothing is pruned.

use rand::Rng;

use crate::board::{Board, Stone};

use super::{BestMoves, Node, SearchResult, Searcher};

impl<R: Rng> Searcher<R> {
    /// Minimax search.
    ///
    /// Scores are always from `perspective`'s point of view; `maximizing`
    /// says whether the side to move at this node wants them high.
    /// Each trial stone is removed again before the next one is placed, so
    /// `board` is unchanged when this returns.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: i32,
        maximizing: bool,
        perspective: Stone,
        to_move: Stone,
    ) -> SearchResult {
        debug_assert!(to_move.is_player());

        let moves = match self.expand(board, depth, perspective) {
            Node::Terminal(result) => return result,
            Node::Expand(moves) => moves,
        };

        let mut best = BestMoves::new(maximizing);
        for mv in moves {
            board.set(mv, to_move);
            let child = self.minimax(board, depth - 1, !maximizing, perspective, to_move.opponent());
            board.clear(mv);

            best.offer(mv, child.score);
        }

        self.pick(best)
    }
}
