//! Alpha-beta search with move ordering and branch truncation
//!
//! At every node the candidate moves are scored with one static evaluation
//! each, sorted best-first for the side to move and cut down to the top
//! [`MAX_BRANCH`]. The survivors are shuffled before being searched, so
//! the order of equally promising moves carries no bias.
//!
//! Because of the truncation this search is not guaranteed to agree with
//! [`Searcher::minimax`] at the same depth.

use std::cmp::Reverse;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate;

use super::{BestMoves, Node, SearchResult, Searcher};

/// Maximum moves explored at each node
pub const MAX_BRANCH: usize = 8;

impl<R: Rng> Searcher<R> {
    /// Alpha-beta search.
    ///
    /// `alpha`/`beta` bound the score from `perspective`'s point of view and
    /// are passed down unchanged; the maximizing side raises `alpha`, the
    /// minimizing side lowers `beta`. Remaining siblings are skipped once
    /// `beta <= alpha`. The board is restored before returning.
    ///
    /// # Example
    ///
    /// ```
    /// use gomoku::{Board, Pos, Stone};
    /// use gomoku::search::{Searcher, INF};
    /// use rand::rngs::SmallRng;
    /// use rand::SeedableRng;
    ///
    /// let mut board = Board::new();
    /// for col in 3..7 {
    ///     board.place(Pos::new(7, col), Stone::Black).unwrap();
    /// }
    /// board.place(Pos::new(7, 2), Stone::White).unwrap();
    ///
    /// let mut searcher = Searcher::new(SmallRng::seed_from_u64(1));
    /// let result = searcher.alpha_beta(&mut board, 2, -INF, INF, true, Stone::Black, Stone::Black);
    /// assert_eq!(result.best_move, Some(Pos::new(7, 7)));
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        perspective: Stone,
        to_move: Stone,
    ) -> SearchResult {
        debug_assert!(to_move.is_player());

        let moves = match self.expand(board, depth, perspective) {
            Node::Terminal(result) => return result,
            Node::Expand(moves) => moves,
        };
        let moves = self.order_moves(board, moves, maximizing, perspective, to_move);

        let mut best = BestMoves::new(maximizing);
        for mv in moves {
            board.set(mv, to_move);
            let child = self.alpha_beta(
                board,
                depth - 1,
                alpha,
                beta,
                !maximizing,
                perspective,
                to_move.opponent(),
            );
            board.clear(mv);

            best.offer(mv, child.score);
            if maximizing {
                alpha = alpha.max(best.score);
            } else {
                beta = beta.min(best.score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        self.pick(best)
    }

    /// Score each move one ply deep, keep the best [`MAX_BRANCH`] for the
    /// side to move, then shuffle them.
    fn order_moves(
        &mut self,
        board: &mut Board,
        moves: Vec<Pos>,
        maximizing: bool,
        perspective: Stone,
        to_move: Stone,
    ) -> Vec<Pos> {
        let mut scored: Vec<(i32, Pos)> = moves
            .into_iter()
            .map(|mv| {
                board.set(mv, to_move);
                let score = evaluate(board, perspective);
                board.clear(mv);
                (score, mv)
            })
            .collect();
        self.stats.ordering_evals += scored.len() as u64;

        if maximizing {
            scored.sort_unstable_by_key(|&entry| Reverse(entry));
        } else {
            scored.sort_unstable();
        }

        let mut top: Vec<Pos> = scored
            .into_iter()
            .take(MAX_BRANCH)
            .map(|(_, mv)| mv)
            .collect();
        top.shuffle(&mut self.rng);
        top
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::search::INF;

    fn searcher(seed: u64) -> Searcher<SmallRng> {
        Searcher::new(SmallRng::seed_from_u64(seed))
    }

    fn place_all(board: &mut Board, cells: &[(u8, u8)], stone: Stone) {
        for &(r, c) in cells {
            board.place(Pos::new(r, c), stone).unwrap();
        }
    }

    #[test]
    fn test_depth_zero_is_static_eval() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7)], Stone::Black);
        place_all(&mut board, &[(6, 6)], Stone::White);
        let result = searcher(0).alpha_beta(&mut board, 0, -INF, INF, true, Stone::Black, Stone::Black);
        assert_eq!(result.score, evaluate(&board, Stone::Black));
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(3, 3), (4, 4), (5, 5), (6, 6)], Stone::White);
        place_all(&mut board, &[(2, 2), (3, 4), (4, 5)], Stone::Black);

        for seed in 0..5 {
            let result = searcher(seed).alpha_beta(&mut board, 2, -INF, INF, true, Stone::White, Stone::White);
            assert_eq!(result.best_move, Some(Pos::new(7, 7)));
            assert_eq!(result.score, 1_000_000);
        }
    }

    #[test]
    fn test_blocks_immediate_loss() {
        let mut board = Board::new();
        // Black threatens five at (9, 7)
        place_all(&mut board, &[(5, 7), (6, 7), (7, 7), (8, 7)], Stone::Black);
        place_all(&mut board, &[(4, 7), (6, 8), (7, 8)], Stone::White);

        for seed in 0..5 {
            let result = searcher(seed).alpha_beta(&mut board, 2, -INF, INF, true, Stone::White, Stone::White);
            assert_eq!(result.best_move, Some(Pos::new(9, 7)));
        }
    }

    #[test]
    fn test_order_moves_truncates_and_keeps_best() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 5), (7, 6), (7, 7)], Stone::Black);
        place_all(&mut board, &[(6, 6), (8, 8)], Stone::White);
        let before = board.clone();
        let moves = crate::rules::candidate_moves(&board);
        assert!(moves.len() > MAX_BRANCH);

        let mut s = searcher(4);
        let ordered = s.order_moves(&mut board, moves.clone(), true, Stone::Black, Stone::Black);
        assert_eq!(board, before);
        assert_eq!(ordered.len(), MAX_BRANCH);
        assert_eq!(s.stats().ordering_evals, moves.len() as u64);

        let distinct: HashSet<Pos> = ordered.iter().copied().collect();
        assert_eq!(distinct.len(), MAX_BRANCH);

        // Every kept move scores at least as well as every dropped one
        let score = |mv: Pos| {
            let mut child = before.clone();
            child.place(mv, Stone::Black).unwrap();
            evaluate(&child, Stone::Black)
        };
        let worst_kept = ordered.iter().map(|&mv| score(mv)).min().unwrap();
        let best_dropped = moves
            .iter()
            .filter(|mv| !distinct.contains(mv))
            .map(|&mv| score(mv))
            .max()
            .unwrap();
        assert!(worst_kept >= best_dropped);
    }

    #[test]
    fn test_order_moves_minimizing_keeps_lowest() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 5), (7, 6), (7, 7)], Stone::Black);
        board.place(Pos::new(6, 6), Stone::White).unwrap();
        let moves = crate::rules::candidate_moves(&board);

        let mut s = searcher(8);
        let ordered = s.order_moves(&mut board, moves, false, Stone::Black, Stone::White);
        // The perspective side's open three must be capped, so blocking
        // squares rank first for the minimizer
        assert!(ordered.contains(&Pos::new(7, 4)) || ordered.contains(&Pos::new(7, 8)));
    }

    #[test]
    fn test_depth_one_move_is_in_tied_best_set() {
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Stone::Black).unwrap();

        let scored: Vec<(Pos, i32)> = crate::rules::candidate_moves(&board)
            .into_iter()
            .map(|mv| {
                let mut child = board.clone();
                child.place(mv, Stone::White).unwrap();
                (mv, evaluate(&child, Stone::White))
            })
            .collect();
        assert!(scored.len() <= MAX_BRANCH);
        let top = scored.iter().map(|&(_, s)| s).max().unwrap();
        let tied: HashSet<Pos> = scored
            .iter()
            .filter(|&&(_, s)| s == top)
            .map(|&(mv, _)| mv)
            .collect();
        assert!(tied.len() > 1);

        let mut seen = HashSet::new();
        for seed in 0..40 {
            let result = searcher(seed).alpha_beta(&mut board, 1, -INF, INF, true, Stone::White, Stone::White);
            let mv = result.best_move.unwrap();
            assert!(tied.contains(&mv), "{} is not among the best replies", mv);
            assert_eq!(result.score, top);
            seen.insert(mv);
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_cutoff_counted() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7), (7, 8)], Stone::Black);
        place_all(&mut board, &[(6, 7), (8, 8)], Stone::White);
        let mut s = searcher(2);
        s.alpha_beta(&mut board, 2, -INF, INF, true, Stone::Black, Stone::Black);
        assert!(s.stats().cutoffs > 0);
    }

    #[test]
    fn test_empty_board_plays_center() {
        let mut board = Board::new();
        let result = searcher(0).alpha_beta(&mut board, 2, -INF, INF, true, Stone::Black, Stone::Black);
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert_eq!(board, Board::new());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_search_restores_board(
            cells in prop::collection::vec((0u8..15, 0u8..15), 0..14),
            depth in 0i32..3,
            seed in any::<u64>(),
        ) {
            let mut board = Board::new();
            let mut stone = Stone::Black;
            for (r, c) in cells {
                if board.place(Pos::new(r, c), stone).is_ok() {
                    stone = stone.opponent();
                }
            }
            let before = board.clone();

            let mut s = searcher(seed);
            let ab = s.alpha_beta(&mut board, depth, -INF, INF, true, stone, stone);
            prop_assert_eq!(&board, &before);

            let mm = s.minimax(&mut board, depth.min(1), true, stone, stone);
            prop_assert_eq!(&board, &before);

            if let Some(mv) = ab.best_move {
                prop_assert!(before.is_empty(mv));
            }
            if let Some(mv) = mm.best_move {
                prop_assert!(before.is_empty(mv));
            }
        }
    }
}
